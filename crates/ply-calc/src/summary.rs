//! 產品物流摘要（詳情頁使用）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::capacity::DerivedCapacity;
use crate::round_whole;
use crate::shipping::ShippingEstimate;

/// 重量摘要（kg，取整）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    pub per_m3: Decimal,
    pub per_sheet: Decimal,
    pub per_crate: Decimal,
}

/// 體積摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSummary {
    pub per_sheet_m3: Decimal,
    pub per_crate_m3: Decimal,
    pub sheets_per_crate: u32,
}

/// 貨櫃摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub weight_limited_m3: u32,
    pub volume_limited_sheets: u64,
    pub practical_capacity: u32,
    pub max_crates: u32,
    pub utilization_factor: Decimal,
}

/// 運費摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingSummary {
    pub cost_per_container_usd: Decimal,
    pub cost_per_m3_usd: Decimal,
}

impl From<&ShippingEstimate> for ShippingSummary {
    fn from(estimate: &ShippingEstimate) -> Self {
        Self {
            cost_per_container_usd: estimate.container_cost_usd,
            cost_per_m3_usd: estimate.cost_per_m3_usd,
        }
    }
}

/// 物流摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsSummary {
    pub weight: WeightSummary,
    pub volume: VolumeSummary,
    pub container: ContainerSummary,
    pub europe: ShippingSummary,
    pub north_america: ShippingSummary,
}

impl LogisticsSummary {
    /// 由容量與兩個主要市場的運費組裝摘要
    pub fn assemble(
        capacity: &DerivedCapacity,
        utilization_factor: Decimal,
        europe: &ShippingEstimate,
        north_america: &ShippingEstimate,
    ) -> Self {
        Self {
            weight: WeightSummary {
                per_m3: capacity.weight_per_m3,
                per_sheet: round_whole(capacity.sheet_volume_m3 * capacity.weight_per_m3),
                per_crate: round_whole(capacity.crate_volume_m3 * capacity.weight_per_m3),
            },
            volume: VolumeSummary {
                per_sheet_m3: capacity.sheet_volume_m3,
                per_crate_m3: capacity.crate_volume_m3,
                sheets_per_crate: capacity.sheets_per_crate,
            },
            container: ContainerSummary {
                weight_limited_m3: capacity.weight_limited_m3,
                volume_limited_sheets: capacity.volume_limited_sheets,
                practical_capacity: capacity.practical_capacity,
                max_crates: capacity.max_crates_per_container,
                utilization_factor,
            },
            europe: europe.into(),
            north_america: north_america.into(),
        }
    }

    /// 單張體積（公升）
    pub fn sheet_volume_liters(&self) -> Decimal {
        (self.volume.per_sheet_m3 * Decimal::ONE_THOUSAND).round_dp(1)
    }
}
