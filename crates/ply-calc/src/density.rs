//! 材料密度計算

use ply_core::{LogisticsConfig, Product};
use rust_decimal::Decimal;

use crate::round_whole;

/// 密度計算器
pub struct DensityCalculator;

impl DensityCalculator {
    /// 每立方米重量（kg/m³，取整）
    ///
    /// 基礎密度 × 品級係數 × 厚度係數 × 層數修正。
    /// 未知樹種直接返回預設密度，不套用任何係數。
    pub fn weight_per_m3(product: &Product, config: &LogisticsConfig) -> Decimal {
        let Some(material) = config.density_for(&product.species) else {
            tracing::warn!(
                "未知樹種 {}，使用預設密度 {} kg/m³",
                product.species,
                config.fallback_density_kg_m3
            );
            return config.fallback_density_kg_m3;
        };

        let weight = material.base_kg_m3
            * config.grade_factor(&product.grade)
            * config.thickness_factor(product.thickness_mm)
            * Self::ply_factor(product.ply_count, config);

        round_whole(weight)
    }

    /// 層數修正係數 = 1 + (層數 − 基準) × 步進，不低於下限
    pub fn ply_factor(ply_count: u32, config: &LogisticsConfig) -> Decimal {
        let delta = i64::from(ply_count) - i64::from(config.ply_baseline);
        let factor = Decimal::ONE + Decimal::from(delta) * config.ply_step;
        factor.max(config.ply_factor_floor)
    }
}
