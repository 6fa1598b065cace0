//! 貨櫃容量計算

use ply_core::{LogisticsConfig, LogisticsError, Product, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::density::DensityCalculator;
use crate::{checked_ratio, floor_count, floor_count_u64};
use crate::packing::PackingCalculator;

/// 貨櫃容量推導結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedCapacity {
    /// 每立方米重量（kg/m³）
    pub weight_per_m3: Decimal,

    /// 單張體積（m³）
    pub sheet_volume_m3: Decimal,

    /// 每箱張數
    pub sheets_per_crate: u32,

    /// 每箱體積（m³）= 每箱張數 × 單張體積
    pub crate_volume_m3: Decimal,

    /// 載重限制下可裝的立方米數 = floor(最大載重 / 每立方米重量)
    pub weight_limited_m3: u32,

    /// 容積限制下可裝的張數 = floor(最大容積 / 單張體積)
    ///
    /// 與 `weight_limited_m3` 單位不同，取最小值時沿用既有算法。
    pub volume_limited_sheets: u64,

    /// 實際容量 = floor(裝載率 × min(載重限制, 容積限制))
    pub practical_capacity: u32,

    /// 每櫃最多箱數 = floor(最大容積 / 每箱體積)
    pub max_crates_per_container: u32,
}

/// 容量計算器
pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 計算貨櫃容量
    pub fn calculate(product: &Product, config: &LogisticsConfig) -> Result<DerivedCapacity> {
        let weight_per_m3 = DensityCalculator::weight_per_m3(product, config);
        if weight_per_m3 <= Decimal::ZERO {
            return Err(LogisticsError::DegenerateGeometry(format!(
                "每立方米重量無效: {}",
                weight_per_m3
            )));
        }

        let sheet_volume_m3 = PackingCalculator::sheet_volume_m3(product)?;
        let sheets_per_crate = PackingCalculator::sheets_per_crate(product, config)?;

        let container = &config.container;
        let weight_limited_m3 = floor_count(
            checked_ratio(container.max_payload_kg, weight_per_m3, "載重限制")?,
            "載重限制",
        )?;
        let volume_limited_sheets = floor_count_u64(
            checked_ratio(container.max_volume_m3, sheet_volume_m3, "容積限制")?,
            "容積限制",
        )?;

        let limiting = u64::from(weight_limited_m3).min(volume_limited_sheets);
        let practical_capacity = floor_count(
            config.utilization_factor * Decimal::from(limiting),
            "實際容量",
        )?;

        let crate_volume_m3 = Decimal::from(sheets_per_crate) * sheet_volume_m3;
        if crate_volume_m3.is_zero() {
            return Err(LogisticsError::DegenerateGeometry(format!(
                "單張板材超出標準裝箱體積: {} × {}mm",
                product.size, product.thickness_mm
            )));
        }
        let max_crates_per_container = floor_count(
            checked_ratio(container.max_volume_m3, crate_volume_m3, "每櫃箱數")?,
            "每櫃箱數",
        )?;

        tracing::debug!(
            "容量計算 {}: {} kg/m³, 每箱 {} 張, 實際容量 {}, 每櫃 {} 箱",
            product.title(),
            weight_per_m3,
            sheets_per_crate,
            practical_capacity,
            max_crates_per_container
        );

        Ok(DerivedCapacity {
            weight_per_m3,
            sheet_volume_m3,
            sheets_per_crate,
            crate_volume_m3,
            weight_limited_m3,
            volume_limited_sheets,
            practical_capacity,
            max_crates_per_container,
        })
    }
}
