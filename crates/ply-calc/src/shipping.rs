//! 海運費用估算

use ply_core::{Destination, LogisticsConfig, LogisticsError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::capacity::DerivedCapacity;
use crate::round_whole;

/// 每櫃運費估算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingEstimate {
    pub destination: Destination,

    /// 基本運費（USD/櫃）
    pub base_rate_usd: Decimal,
    pub documentation_usd: Decimal,
    pub handling_usd: Decimal,
    pub insurance_usd: Decimal,
    pub local_charges_usd: Decimal,

    /// 每櫃總費用 = 基本運費 + 附加費
    pub container_cost_usd: Decimal,

    /// 每立方米運費（取整）= 每櫃總費用 / 實際容量
    pub cost_per_m3_usd: Decimal,
}

/// 運費計算器
pub struct ShippingCalculator;

impl ShippingCalculator {
    /// 估算指定目的地的運費
    pub fn estimate(
        capacity: &DerivedCapacity,
        destination: Destination,
        config: &LogisticsConfig,
    ) -> Result<ShippingEstimate> {
        let base_rate_usd = config.shipping_rate(destination).ok_or_else(|| {
            LogisticsError::InvalidConfig(format!("缺少目的地運費: {}", destination))
        })?;

        let surcharges = &config.surcharges;
        let insurance_usd = surcharges.insurance_for(base_rate_usd);
        let container_cost_usd = base_rate_usd + surcharges.total_for(base_rate_usd);

        if capacity.practical_capacity == 0 {
            return Err(LogisticsError::DegenerateGeometry(
                "實際容量為零，無法分攤運費".to_string(),
            ));
        }
        let cost_per_m3_usd =
            round_whole(container_cost_usd / Decimal::from(capacity.practical_capacity));

        Ok(ShippingEstimate {
            destination,
            base_rate_usd,
            documentation_usd: surcharges.documentation_usd,
            handling_usd: surcharges.handling_usd,
            insurance_usd,
            local_charges_usd: surcharges.local_charges_usd,
            container_cost_usd,
            cost_per_m3_usd,
        })
    }
}
