//! 到岸成本計算

use ply_core::{LogisticsError, Product, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::capacity::DerivedCapacity;
use crate::shipping::ShippingEstimate;
use crate::{ceil_count, round_whole};

/// 到岸成本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandedCost {
    /// 訂購數量（m³）
    pub quantity_m3: Decimal,

    /// 貨款 = 數量 × FOB 單價
    pub product_cost_usd: Decimal,

    /// 運費 = 貨櫃數 × 每櫃總費用
    pub shipping_cost_usd: Decimal,

    pub total_cost_usd: Decimal,

    /// 每立方米到岸成本（取整）
    pub cost_per_m3_usd: Decimal,

    /// 所需貨櫃數 = ceil(數量 / 實際容量)
    pub containers_needed: u32,

    /// 裝載效率（%），100 表示貨櫃全滿
    pub efficiency_pct: Decimal,
}

/// 到岸成本計算器
pub struct LandedCostCalculator;

impl LandedCostCalculator {
    /// 計算指定數量的到岸成本
    pub fn calculate(
        product: &Product,
        capacity: &DerivedCapacity,
        shipping: &ShippingEstimate,
        quantity_m3: Decimal,
    ) -> Result<LandedCost> {
        if quantity_m3 <= Decimal::ZERO {
            return Err(LogisticsError::InvalidQuantity(quantity_m3));
        }
        if capacity.practical_capacity == 0 {
            return Err(LogisticsError::DegenerateGeometry(
                "實際容量為零，無法計算貨櫃數".to_string(),
            ));
        }

        let practical = Decimal::from(capacity.practical_capacity);
        let containers_needed = ceil_count(quantity_m3 / practical, "貨櫃數")?;

        let shipping_cost_usd = Decimal::from(containers_needed) * shipping.container_cost_usd;
        let (product_cost_usd, total_cost_usd) = quantity_m3
            .checked_mul(product.price_usd_per_m3)
            .and_then(|cost| Some((cost, cost.checked_add(shipping_cost_usd)?)))
            .ok_or(LogisticsError::InvalidQuantity(quantity_m3))?;
        let cost_per_m3_usd = round_whole(total_cost_usd / quantity_m3);

        let loaded_capacity = Decimal::from(containers_needed) * practical;
        let efficiency_pct = quantity_m3 / loaded_capacity * Decimal::ONE_HUNDRED;

        Ok(LandedCost {
            quantity_m3,
            product_cost_usd,
            shipping_cost_usd,
            total_cost_usd,
            cost_per_m3_usd,
            containers_needed,
            efficiency_pct,
        })
    }
}
