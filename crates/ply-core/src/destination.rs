//! 目的地區域

use serde::{Deserialize, Serialize};
use std::fmt;

/// 海運目的地（封閉集合）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    #[default]
    Europe,
    NorthAmerica,
    Asia,
}

impl Destination {
    /// 全部目的地
    pub const ALL: [Destination; 3] = [
        Destination::Europe,
        Destination::NorthAmerica,
        Destination::Asia,
    ];

    /// 依代碼查找目的地，未知代碼返回 None
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "europe" => Some(Destination::Europe),
            "north_america" => Some(Destination::NorthAmerica),
            "asia" => Some(Destination::Asia),
            _ => None,
        }
    }

    /// 依代碼查找目的地，未知代碼退回歐洲
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Destination::Europe => "europe",
            Destination::NorthAmerica => "north_america",
            Destination::Asia => "asia",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
