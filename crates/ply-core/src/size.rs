//! 板材尺寸解析

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{LogisticsError, Result};

/// mm³ → m³
const MM3_PER_M3: i64 = 1_000_000_000;

/// 板材尺寸（寬 × 高，毫米）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSize {
    pub width_mm: Decimal,
    pub height_mm: Decimal,
}

impl SheetSize {
    /// 創建新的板材尺寸，兩邊都必須為正數
    pub fn new(width_mm: Decimal, height_mm: Decimal) -> Result<Self> {
        if width_mm <= Decimal::ZERO || height_mm <= Decimal::ZERO {
            return Err(LogisticsError::MalformedSize(format!(
                "{}x{}",
                width_mm, height_mm
            )));
        }
        Ok(Self {
            width_mm,
            height_mm,
        })
    }

    /// 單張板材體積（m³），乘積超出 Decimal 範圍時返回錯誤
    pub fn volume_m3(&self, thickness_mm: u32) -> Result<Decimal> {
        self.width_mm
            .checked_mul(self.height_mm)
            .and_then(|area| area.checked_mul(Decimal::from(thickness_mm)))
            .and_then(|mm3| mm3.checked_div(Decimal::from(MM3_PER_M3)))
            .ok_or_else(|| {
                LogisticsError::DegenerateGeometry(format!(
                    "板材體積超出範圍: {} × {}mm",
                    self, thickness_mm
                ))
            })
    }
}

impl FromStr for SheetSize {
    type Err = LogisticsError;

    /// 解析 "WIDTHxHEIGHT" 格式，必須恰好兩個正數
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || LogisticsError::MalformedSize(s.to_string());

        let tokens: Vec<&str> = s.split(['x', 'X']).map(str::trim).collect();
        let [width, height] = tokens.as_slice() else {
            return Err(malformed());
        };

        let width = Decimal::from_str(width).map_err(|_| malformed())?;
        let height = Decimal::from_str(height).map_err(|_| malformed())?;

        Self::new(width, height).map_err(|_| malformed())
    }
}

impl fmt::Display for SheetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width_mm, self.height_mm)
    }
}
