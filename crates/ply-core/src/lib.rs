//! # Ply Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod destination;
pub mod product;
pub mod size;

// Re-export 主要類型
pub use config::{ContainerSpec, CrateBucket, LogisticsConfig, MaterialDensity, Surcharges};
pub use destination::Destination;
pub use product::{display_grade, Product};
pub use size::SheetSize;

use rust_decimal::Decimal;

/// 物流計算錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogisticsError {
    #[error("無效的板材尺寸: {0}")]
    MalformedSize(String),

    #[error("幾何資料退化，無法計算物流數據: {0}")]
    DegenerateGeometry(String),

    #[error("無效的訂購數量: {0} m³")]
    InvalidQuantity(Decimal),

    #[error("庫存資料解析錯誤: {0}")]
    Dataset(String),

    #[error("無效的物流配置: {0}")]
    InvalidConfig(String),

    #[error("找不到產品索引: {0}")]
    ProductNotFound(usize),

    #[error("超出可用庫存：需要 {requested} 箱，可用 {available} 箱")]
    OverAllocation { requested: u32, available: u32 },
}

pub type Result<T> = std::result::Result<T, LogisticsError>;
