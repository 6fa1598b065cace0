//! # Ply Logistics Engine
//!
//! 物流計算引擎：密度 → 體積 → 裝箱 → 貨櫃容量 → 運費 → 到岸成本

pub mod capacity;
pub mod density;
pub mod engine;
pub mod landed;
pub mod packing;
pub mod shipping;
pub mod summary;

// Re-export 主要類型
pub use capacity::DerivedCapacity;
pub use engine::LogisticsEngine;
pub use landed::LandedCost;
pub use shipping::ShippingEstimate;
pub use summary::LogisticsSummary;

use ply_core::{LogisticsError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 四捨五入到整數（.5 進位）
pub(crate) fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// 除法，商超出 Decimal 範圍時返回錯誤
pub(crate) fn checked_ratio(
    numerator: Decimal,
    denominator: Decimal,
    what: &str,
) -> Result<Decimal> {
    numerator.checked_div(denominator).ok_or_else(|| {
        LogisticsError::DegenerateGeometry(format!(
            "{} 超出範圍: {} / {}",
            what, numerator, denominator
        ))
    })
}

/// 向下取整並轉為計數
pub(crate) fn floor_count(value: Decimal, what: &str) -> Result<u32> {
    value.floor().to_u32().ok_or_else(|| {
        LogisticsError::DegenerateGeometry(format!("{} 超出範圍: {}", what, value))
    })
}

/// 向下取整並轉為大計數（張數）
pub(crate) fn floor_count_u64(value: Decimal, what: &str) -> Result<u64> {
    value.floor().to_u64().ok_or_else(|| {
        LogisticsError::DegenerateGeometry(format!("{} 超出範圍: {}", what, value))
    })
}

/// 向上取整並轉為計數
pub(crate) fn ceil_count(value: Decimal, what: &str) -> Result<u32> {
    value.ceil().to_u32().ok_or_else(|| {
        LogisticsError::DegenerateGeometry(format!("{} 超出範圍: {}", what, value))
    })
}
