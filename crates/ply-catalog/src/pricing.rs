//! 供應商申報數據推算的價格與重量

use ply_core::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 依供應商申報的每箱數據推算，缺資料或為零時為 None
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclaredPricing {
    /// 密度（kg/m³）= 每箱重量 / 每箱體積
    pub density_kg_m3: Option<Decimal>,

    /// 每張重量（kg）
    pub weight_per_sheet_kg: Option<Decimal>,

    /// 每張價格（USD）
    pub price_per_sheet_usd: Option<Decimal>,

    /// 每箱價格（USD）
    pub price_per_crate_usd: Option<Decimal>,

    /// 每櫃可裝箱數 = floor(貨櫃載重上限 / 每箱重量)
    pub crates_per_container: Option<u32>,

    /// 整櫃貨值（USD）
    pub container_value_usd: Option<Decimal>,
}

impl DeclaredPricing {
    pub fn from_product(product: &Product) -> Self {
        let weight = positive(product.weight_per_crate);
        let volume = positive(product.volume_per_crate);
        let sheets = product
            .sheets_per_crate
            .filter(|sheets| *sheets > 0)
            .map(Decimal::from);
        let payload = positive(product.payload_limit);

        let price_per_crate_usd = volume.map(|v| product.price_usd_per_m3 * v);
        let crates_per_container = payload
            .zip(weight)
            .and_then(|(payload, weight)| num_crates(payload / weight));

        Self {
            density_kg_m3: weight.zip(volume).map(|(w, v)| w / v),
            weight_per_sheet_kg: weight.zip(sheets).map(|(w, s)| w / s),
            price_per_sheet_usd: price_per_crate_usd.zip(sheets).map(|(p, s)| p / s),
            price_per_crate_usd,
            crates_per_container,
            container_value_usd: crates_per_container
                .zip(price_per_crate_usd)
                .map(|(crates, price)| Decimal::from(crates) * price),
        }
    }
}

fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| *v > Decimal::ZERO)
}

fn num_crates(value: Decimal) -> Option<u32> {
    use rust_decimal::prelude::ToPrimitive;
    value.floor().to_u32()
}
