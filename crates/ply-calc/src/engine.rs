//! 物流計算引擎

use ply_core::{Destination, LogisticsConfig, Product, Result};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::capacity::{CapacityCalculator, DerivedCapacity};
use crate::density::DensityCalculator;
use crate::landed::{LandedCost, LandedCostCalculator};
use crate::packing::PackingCalculator;
use crate::shipping::{ShippingCalculator, ShippingEstimate};
use crate::summary::LogisticsSummary;

/// 物流計算引擎
///
/// 純函數管線，只持有唯讀配置，可在多執行緒間共享。
#[derive(Debug, Clone, Default)]
pub struct LogisticsEngine {
    config: LogisticsConfig,
}

impl LogisticsEngine {
    /// 以驗證過的配置創建引擎
    pub fn new(config: LogisticsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 每立方米重量（kg/m³）
    pub fn weight_per_m3(&self, product: &Product) -> Decimal {
        DensityCalculator::weight_per_m3(product, &self.config)
    }

    /// 單張板材體積（m³）
    pub fn sheet_volume_m3(&self, product: &Product) -> Result<Decimal> {
        PackingCalculator::sheet_volume_m3(product)
    }

    /// 每箱張數
    pub fn sheets_per_crate(&self, product: &Product) -> Result<u32> {
        PackingCalculator::sheets_per_crate(product, &self.config)
    }

    /// 貨櫃容量
    pub fn container_capacity(&self, product: &Product) -> Result<DerivedCapacity> {
        CapacityCalculator::calculate(product, &self.config)
    }

    /// 運費估算，未知目的地代碼以歐洲計
    pub fn shipping_estimate(
        &self,
        product: &Product,
        destination: &str,
    ) -> Result<ShippingEstimate> {
        self.shipping_estimate_to(product, self.resolve_destination(destination))
    }

    /// 運費估算（已解析的目的地）
    pub fn shipping_estimate_to(
        &self,
        product: &Product,
        destination: Destination,
    ) -> Result<ShippingEstimate> {
        let capacity = self.container_capacity(product)?;
        ShippingCalculator::estimate(&capacity, destination, &self.config)
    }

    /// 到岸成本，未知目的地代碼以歐洲計
    pub fn landed_cost(
        &self,
        product: &Product,
        quantity_m3: Decimal,
        destination: &str,
    ) -> Result<LandedCost> {
        self.landed_cost_to(product, quantity_m3, self.resolve_destination(destination))
    }

    /// 到岸成本（已解析的目的地）
    pub fn landed_cost_to(
        &self,
        product: &Product,
        quantity_m3: Decimal,
        destination: Destination,
    ) -> Result<LandedCost> {
        let capacity = self.container_capacity(product)?;
        let shipping = ShippingCalculator::estimate(&capacity, destination, &self.config)?;
        LandedCostCalculator::calculate(product, &capacity, &shipping, quantity_m3)
    }

    /// 產品物流摘要
    pub fn summary(&self, product: &Product) -> Result<LogisticsSummary> {
        let capacity = self.container_capacity(product)?;
        let europe = ShippingCalculator::estimate(&capacity, Destination::Europe, &self.config)?;
        let north_america =
            ShippingCalculator::estimate(&capacity, Destination::NorthAmerica, &self.config)?;

        Ok(LogisticsSummary::assemble(
            &capacity,
            self.config.utilization_factor,
            &europe,
            &north_america,
        ))
    }

    /// 並行計算多個產品的物流摘要，每筆結果各自成功或失敗
    pub fn summarize_all(&self, products: &[Product]) -> Vec<Result<LogisticsSummary>> {
        tracing::info!("開始計算物流摘要：產品 {} 筆", products.len());

        let start_time = std::time::Instant::now();
        let results: Vec<_> = products
            .par_iter()
            .map(|product| self.summary(product))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(
            "物流摘要完成，耗時 {:?}，失敗 {} 筆",
            start_time.elapsed(),
            failed
        );

        results
    }

    /// 獲取配置引用
    pub fn config(&self) -> &LogisticsConfig {
        &self.config
    }

    fn resolve_destination(&self, code: &str) -> Destination {
        Destination::from_code(code).unwrap_or_else(|| {
            tracing::warn!("未知目的地 {}，以歐洲運費計算", code);
            Destination::Europe
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{pine_18mm, product};
    use ply_core::LogisticsError;
    use proptest::prelude::*;

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = LogisticsConfig::default().with_utilization_factor(Decimal::from(2));
        assert!(matches!(
            LogisticsEngine::new(config),
            Err(LogisticsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_destination_uses_europe() {
        let engine = LogisticsEngine::default();
        let product = pine_18mm();

        let unknown = engine.shipping_estimate(&product, "unknown_region").unwrap();
        let europe = engine.shipping_estimate(&product, "europe").unwrap();

        assert_eq!(unknown, europe);
        assert_eq!(unknown.base_rate_usd, Decimal::from(2800));
        assert_eq!(unknown.container_cost_usd, Decimal::from(3506));
    }

    #[test]
    fn test_landed_cost_by_code() {
        let engine = LogisticsEngine::default();
        let cost = engine
            .landed_cost(&pine_18mm(), Decimal::from(100), "north_america")
            .unwrap();
        assert_eq!(cost.shipping_cost_usd, Decimal::from(3914 * 3));
    }

    #[test]
    fn test_landed_cost_zero_quantity() {
        let engine = LogisticsEngine::default();
        let err = engine
            .landed_cost(&pine_18mm(), Decimal::ZERO, "europe")
            .unwrap_err();
        assert!(matches!(err, LogisticsError::InvalidQuantity(_)));
    }

    #[test]
    fn test_overflowing_size_errors_instead_of_panicking() {
        let engine = LogisticsEngine::default();
        let huge = product(
            "pine",
            "C+/C",
            18,
            7,
            "99999999999999999999x99999999999999999999",
        );

        for err in [
            engine.sheet_volume_m3(&huge).unwrap_err(),
            engine.container_capacity(&huge).unwrap_err(),
            engine.summary(&huge).unwrap_err(),
            engine.landed_cost(&huge, Decimal::from(100), "europe").unwrap_err(),
        ] {
            assert!(matches!(err, LogisticsError::DegenerateGeometry(_)));
        }
    }

    #[test]
    fn test_summarize_all_keeps_order_and_failures() {
        let engine = LogisticsEngine::default();
        let products = vec![
            pine_18mm(),
            product("pine", "C+/C", 18, 7, "bad"),
            product("euca", "BCX", 12, 9, "1220x2440"),
        ];

        let results = engine.summarize_all(&products);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().map(|s| s.weight.per_m3).ok(),
            Some(Decimal::from(450))
        );
        assert!(matches!(results[1], Err(LogisticsError::MalformedSize(_))));
        assert_eq!(
            results[2].as_ref().map(|s| s.weight.per_m3).ok(),
            Some(Decimal::from(539))
        );
    }

    const SPECIES: [&str; 4] = ["pine", "combi", "combi e", "euca"];
    const GRADES: [&str; 8] = [
        "C+/C",
        "CP/C",
        "BCX",
        "C/C",
        "CCX",
        "CDX",
        "falldown",
        "shop grade",
    ];
    const THICKNESSES: [u32; 8] = [6, 9, 12, 15, 18, 21, 24, 30];

    fn arb_product() -> impl Strategy<Value = Product> {
        (
            prop::sample::select(SPECIES.to_vec()),
            prop::sample::select(GRADES.to_vec()),
            prop::sample::select(THICKNESSES.to_vec()),
            1u32..=25,
            300u32..=3000,
            300u32..=3000,
        )
            .prop_map(|(species, grade, thickness, ply, width, height)| {
                product(species, grade, thickness, ply, &format!("{}x{}", width, height))
            })
    }

    proptest! {
        #[test]
        fn prop_weight_is_positive_and_deterministic(product in arb_product()) {
            let engine = LogisticsEngine::default();
            let first = engine.weight_per_m3(&product);
            prop_assert!(first > Decimal::ZERO);
            prop_assert_eq!(first, engine.weight_per_m3(&product));
        }

        #[test]
        fn prop_practical_capacity_is_derated(product in arb_product()) {
            let engine = LogisticsEngine::default();
            let capacity = engine.container_capacity(&product).unwrap();
            let limit = u64::from(capacity.weight_limited_m3).min(capacity.volume_limited_sheets);
            prop_assert!(u64::from(capacity.practical_capacity) <= limit);
            prop_assert_eq!(&capacity, &engine.container_capacity(&product).unwrap());
        }

        #[test]
        fn prop_shipping_cost_positive(product in arb_product()) {
            let engine = LogisticsEngine::default();
            let capacity = engine.container_capacity(&product).unwrap();
            prop_assume!(capacity.practical_capacity > 0);
            for destination in Destination::ALL {
                let estimate = engine.shipping_estimate_to(&product, destination).unwrap();
                prop_assert!(estimate.cost_per_m3_usd > Decimal::ZERO);
            }
        }

        #[test]
        fn prop_efficiency_within_bounds(product in arb_product(), quantity in 1u32..=500) {
            let engine = LogisticsEngine::default();
            let cost = engine
                .landed_cost_to(&product, Decimal::from(quantity), Destination::Asia)
                .unwrap();
            prop_assert!(cost.efficiency_pct > Decimal::ZERO);
            prop_assert!(cost.efficiency_pct <= Decimal::ONE_HUNDRED);
        }
    }
}
