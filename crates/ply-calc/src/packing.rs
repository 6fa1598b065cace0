//! 板材體積與裝箱

use ply_core::{LogisticsConfig, LogisticsError, Product, Result};
use rust_decimal::Decimal;

use crate::{checked_ratio, floor_count};

/// 裝箱計算器
pub struct PackingCalculator;

impl PackingCalculator {
    /// 單張板材體積（m³）
    pub fn sheet_volume_m3(product: &Product) -> Result<Decimal> {
        let size = product.sheet_size()?;
        let volume = size.volume_m3(product.thickness_mm)?;

        if volume <= Decimal::ZERO {
            return Err(LogisticsError::DegenerateGeometry(format!(
                "板材體積為零: {} × {}mm",
                product.size, product.thickness_mm
            )));
        }

        Ok(volume)
    }

    /// 依厚度選擇的標準裝箱體積（m³）
    pub fn crate_volume_bucket(product: &Product, config: &LogisticsConfig) -> Decimal {
        config.crate_volume_for(product.thickness_mm)
    }

    /// 每箱張數 = floor(裝箱體積 / 單張體積)
    ///
    /// 單張體積大於裝箱體積時返回 0，由容量計算負責拒絕。
    pub fn sheets_per_crate(product: &Product, config: &LogisticsConfig) -> Result<u32> {
        let sheet_volume = Self::sheet_volume_m3(product)?;
        let bucket = Self::crate_volume_bucket(product, config);
        floor_count(checked_ratio(bucket, sheet_volume, "每箱張數")?, "每箱張數")
    }
}
