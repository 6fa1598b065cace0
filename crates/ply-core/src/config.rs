//! 物流計算配置
//!
//! 貨櫃規格與所有常數查表（樹種密度、品級係數、厚度係數、裝箱體積、運費、附加費）。
//! `LogisticsConfig::default()` 即為出口業務使用的標準數值。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Destination, LogisticsError, Result};

/// 貨櫃規格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// 最大載重（kg）
    pub max_payload_kg: Decimal,

    /// 最大容積（m³）
    pub max_volume_m3: Decimal,

    /// 內部尺寸（m），僅供參考，不參與容量計算
    pub length_m: Decimal,
    pub width_m: Decimal,
    pub height_m: Decimal,
}

impl ContainerSpec {
    /// 40 呎高櫃（40' HC）
    pub fn high_cube_40() -> Self {
        Self {
            max_payload_kg: Decimal::from(26000),
            max_volume_m3: Decimal::new(675, 1),
            length_m: Decimal::new(12032, 3),
            width_m: Decimal::new(2352, 3),
            height_m: Decimal::new(2698, 3),
        }
    }
}

/// 樹種密度資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDensity {
    /// 基礎密度（kg/m³）
    pub base_kg_m3: Decimal,

    /// 含水率（保留欄位，目前無公式使用）
    pub moisture_fraction: Decimal,

    /// 密度波動範圍（保留欄位，目前無公式使用）
    pub variance_fraction: Decimal,
}

impl MaterialDensity {
    /// 以標準含水率 12%、波動 ±10% 創建
    pub fn with_base(base_kg_m3: Decimal) -> Self {
        Self {
            base_kg_m3,
            moisture_fraction: Decimal::new(12, 2),
            variance_fraction: Decimal::new(1, 1),
        }
    }
}

/// 裝箱體積分級（厚度上限含邊界）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrateBucket {
    /// 厚度上限（mm，含）
    pub max_thickness_mm: u32,

    /// 標準裝箱體積（m³）
    pub volume_m3: Decimal,
}

/// 每櫃附加費用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surcharges {
    pub documentation_usd: Decimal,
    pub handling_usd: Decimal,
    /// 保險費率（基本運費的比例）
    pub insurance_rate: Decimal,
    pub local_charges_usd: Decimal,
}

impl Surcharges {
    /// 保險費
    pub fn insurance_for(&self, base_rate_usd: Decimal) -> Decimal {
        base_rate_usd * self.insurance_rate
    }

    /// 附加費總額
    pub fn total_for(&self, base_rate_usd: Decimal) -> Decimal {
        self.documentation_usd
            + self.handling_usd
            + self.insurance_for(base_rate_usd)
            + self.local_charges_usd
    }
}

impl Default for Surcharges {
    fn default() -> Self {
        Self {
            documentation_usd: Decimal::from(150),
            handling_usd: Decimal::from(200),
            insurance_rate: Decimal::new(2, 2),
            local_charges_usd: Decimal::from(300),
        }
    }
}

/// 物流計算參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsConfig {
    /// 貨櫃規格
    pub container: ContainerSpec,

    /// 樹種 → 密度
    pub densities: BTreeMap<String, MaterialDensity>,

    /// 品級 → 重量係數
    pub grade_factors: BTreeMap<String, Decimal>,

    /// 厚度（mm）→ 重量係數
    pub thickness_factors: BTreeMap<u32, Decimal>,

    /// 未知樹種的預設密度（kg/m³）
    pub fallback_density_kg_m3: Decimal,

    /// 基準層數
    pub ply_baseline: u32,

    /// 每增減一層的密度修正比例
    pub ply_step: Decimal,

    /// 層數修正係數下限
    pub ply_factor_floor: Decimal,

    /// 裝箱體積分級，依厚度上限遞增排列
    pub crate_buckets: Vec<CrateBucket>,

    /// 超出所有分級時的裝箱體積（m³）
    pub oversize_crate_volume_m3: Decimal,

    /// 實際裝載率（堆疊與搬運損耗）
    pub utilization_factor: Decimal,

    /// 目的地 → 每櫃基本運費（USD）
    pub shipping_rates: BTreeMap<Destination, Decimal>,

    /// 每櫃附加費
    pub surcharges: Surcharges,
}

impl Default for LogisticsConfig {
    fn default() -> Self {
        let densities = [
            ("pine", 450),
            ("combi", 480),
            ("combi e", 490),
            ("euca", 520),
        ]
        .into_iter()
        .map(|(species, base)| {
            (
                species.to_string(),
                MaterialDensity::with_base(Decimal::from(base)),
            )
        })
        .collect();

        let grade_factors = [
            ("C+/C", Decimal::new(100, 2)),
            ("CP/C", Decimal::new(102, 2)),
            ("BCX", Decimal::new(105, 2)),
            ("C/C", Decimal::new(98, 2)),
            ("CCX", Decimal::new(100, 2)),
            ("CDX", Decimal::new(95, 2)),
            ("falldown", Decimal::new(92, 2)),
            ("shop grade", Decimal::new(90, 2)),
        ]
        .into_iter()
        .map(|(grade, factor)| (grade.to_string(), factor))
        .collect();

        let thickness_factors = [
            (6, Decimal::new(85, 2)),
            (9, Decimal::new(90, 2)),
            (12, Decimal::new(95, 2)),
            (15, Decimal::new(100, 2)),
            (18, Decimal::new(100, 2)),
            (21, Decimal::new(105, 2)),
            (24, Decimal::new(108, 2)),
            (30, Decimal::new(112, 2)),
        ]
        .into_iter()
        .collect();

        let shipping_rates = [
            (Destination::Europe, Decimal::from(2800)),
            (Destination::NorthAmerica, Decimal::from(3200)),
            (Destination::Asia, Decimal::from(2400)),
        ]
        .into_iter()
        .collect();

        Self {
            container: ContainerSpec::high_cube_40(),
            densities,
            grade_factors,
            thickness_factors,
            fallback_density_kg_m3: Decimal::from(450),
            ply_baseline: 7,
            ply_step: Decimal::new(2, 2),
            ply_factor_floor: Decimal::new(5, 1),
            crate_buckets: vec![
                CrateBucket {
                    max_thickness_mm: 12,
                    volume_m3: Decimal::new(28, 1),
                },
                CrateBucket {
                    max_thickness_mm: 18,
                    volume_m3: Decimal::new(25, 1),
                },
                CrateBucket {
                    max_thickness_mm: 24,
                    volume_m3: Decimal::new(22, 1),
                },
            ],
            oversize_crate_volume_m3: Decimal::new(20, 1),
            utilization_factor: Decimal::new(85, 2),
            shipping_rates,
            surcharges: Surcharges::default(),
        }
    }
}

impl LogisticsConfig {
    /// 從 JSON 載入並驗證配置
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LogisticsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置貨櫃規格
    pub fn with_container(mut self, container: ContainerSpec) -> Self {
        self.container = container;
        self
    }

    /// 建構器模式：新增或覆蓋樹種密度
    pub fn with_density(mut self, species: &str, density: MaterialDensity) -> Self {
        self.densities.insert(normalize_species(species), density);
        self
    }

    /// 建構器模式：新增或覆蓋品級係數
    pub fn with_grade_factor(mut self, grade: &str, factor: Decimal) -> Self {
        self.grade_factors.insert(grade.trim().to_string(), factor);
        self
    }

    /// 建構器模式：新增或覆蓋厚度係數
    pub fn with_thickness_factor(mut self, thickness_mm: u32, factor: Decimal) -> Self {
        self.thickness_factors.insert(thickness_mm, factor);
        self
    }

    /// 建構器模式：設置實際裝載率
    pub fn with_utilization_factor(mut self, factor: Decimal) -> Self {
        self.utilization_factor = factor;
        self
    }

    /// 建構器模式：設置目的地運費
    pub fn with_shipping_rate(mut self, destination: Destination, rate_usd: Decimal) -> Self {
        self.shipping_rates.insert(destination, rate_usd);
        self
    }

    /// 建構器模式：設置附加費
    pub fn with_surcharges(mut self, surcharges: Surcharges) -> Self {
        self.surcharges = surcharges;
        self
    }

    /// 查找樹種密度（忽略大小寫，`-`/`_` 視同空白）
    pub fn density_for(&self, species: &str) -> Option<&MaterialDensity> {
        let key = normalize_species(species);
        self.densities
            .iter()
            .find(|(name, _)| normalize_species(name) == key)
            .map(|(_, density)| density)
    }

    /// 品級係數，未知品級為 1.0
    pub fn grade_factor(&self, grade: &str) -> Decimal {
        let grade = grade.trim();
        self.grade_factors
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(grade))
            .map(|(_, factor)| *factor)
            .unwrap_or(Decimal::ONE)
    }

    /// 厚度係數，未知厚度為 1.0
    pub fn thickness_factor(&self, thickness_mm: u32) -> Decimal {
        self.thickness_factors
            .get(&thickness_mm)
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// 依厚度選擇標準裝箱體積
    pub fn crate_volume_for(&self, thickness_mm: u32) -> Decimal {
        self.crate_buckets
            .iter()
            .find(|bucket| thickness_mm <= bucket.max_thickness_mm)
            .map(|bucket| bucket.volume_m3)
            .unwrap_or(self.oversize_crate_volume_m3)
    }

    /// 目的地基本運費，缺少時退回歐洲運費
    pub fn shipping_rate(&self, destination: Destination) -> Option<Decimal> {
        self.shipping_rates
            .get(&destination)
            .or_else(|| self.shipping_rates.get(&Destination::Europe))
            .copied()
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        let invalid =
            |msg: &str| -> Result<()> { Err(LogisticsError::InvalidConfig(msg.to_string())) };

        if self.container.max_payload_kg <= Decimal::ZERO {
            return invalid("貨櫃載重必須大於 0");
        }
        if self.container.max_volume_m3 <= Decimal::ZERO {
            return invalid("貨櫃容積必須大於 0");
        }
        if self.fallback_density_kg_m3 <= Decimal::ZERO {
            return invalid("預設密度必須大於 0");
        }
        if self.utilization_factor <= Decimal::ZERO || self.utilization_factor > Decimal::ONE {
            return invalid("裝載率必須介於 0 與 1 之間");
        }
        if self.ply_step < Decimal::ZERO || self.ply_factor_floor <= Decimal::ZERO {
            return invalid("層數修正參數無效");
        }
        if self
            .densities
            .values()
            .any(|density| density.base_kg_m3 <= Decimal::ZERO)
        {
            return invalid("樹種密度必須大於 0");
        }
        if self
            .grade_factors
            .values()
            .chain(self.thickness_factors.values())
            .any(|factor| *factor <= Decimal::ZERO)
        {
            return invalid("重量係數必須大於 0");
        }
        if self
            .crate_buckets
            .windows(2)
            .any(|pair| pair[0].max_thickness_mm >= pair[1].max_thickness_mm)
        {
            return invalid("裝箱分級必須依厚度遞增");
        }
        if self
            .crate_buckets
            .iter()
            .map(|bucket| bucket.volume_m3)
            .chain(std::iter::once(self.oversize_crate_volume_m3))
            .any(|volume| volume <= Decimal::ZERO)
        {
            return invalid("裝箱體積必須大於 0");
        }
        if !self.shipping_rates.contains_key(&Destination::Europe) {
            return invalid("缺少歐洲基本運費");
        }
        if self.shipping_rates.values().any(|rate| *rate < Decimal::ZERO) {
            return invalid("運費不可為負");
        }

        Ok(())
    }
}

/// 樹種鍵值正規化：小寫、去空白、`-`/`_` 視同空白
pub fn normalize_species(species: &str) -> String {
    species
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config_is_valid() {
        let config = LogisticsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.container.max_payload_kg, Decimal::from(26000));
        assert_eq!(config.container.max_volume_m3, Decimal::new(675, 1));
        assert_eq!(config.utilization_factor, Decimal::new(85, 2));
    }

    #[rstest]
    #[case("pine", 450)]
    #[case("combi", 480)]
    #[case("combi e", 490)]
    #[case("combi-e", 490)]
    #[case(" Combi_E ", 490)]
    #[case("EUCA", 520)]
    fn test_density_lookup(#[case] species: &str, #[case] expected: i64) {
        let config = LogisticsConfig::default();
        let density = config.density_for(species).unwrap();
        assert_eq!(density.base_kg_m3, Decimal::from(expected));
    }

    #[test]
    fn test_density_reserved_fields() {
        let config = LogisticsConfig::default();
        let pine = config.density_for("pine").unwrap();
        assert_eq!(pine.moisture_fraction, Decimal::new(12, 2));
        assert_eq!(pine.variance_fraction, Decimal::new(1, 1));
    }

    #[test]
    fn test_unknown_species() {
        let config = LogisticsConfig::default();
        assert!(config.density_for("teak").is_none());
    }

    #[rstest]
    #[case("C+/C", Decimal::new(100, 2))]
    #[case("bcx", Decimal::new(105, 2))]
    #[case("CDX", Decimal::new(95, 2))]
    #[case("Shop Grade", Decimal::new(90, 2))]
    #[case("unknown", Decimal::ONE)]
    fn test_grade_factor(#[case] grade: &str, #[case] expected: Decimal) {
        assert_eq!(LogisticsConfig::default().grade_factor(grade), expected);
    }

    #[rstest]
    #[case(6, Decimal::new(85, 2))]
    #[case(24, Decimal::new(108, 2))]
    #[case(30, Decimal::new(112, 2))]
    #[case(10, Decimal::ONE)]
    fn test_thickness_factor(#[case] thickness: u32, #[case] expected: Decimal) {
        assert_eq!(LogisticsConfig::default().thickness_factor(thickness), expected);
    }

    #[rstest]
    #[case(6, Decimal::new(28, 1))]
    #[case(12, Decimal::new(28, 1))]
    #[case(13, Decimal::new(25, 1))]
    #[case(18, Decimal::new(25, 1))]
    #[case(21, Decimal::new(22, 1))]
    #[case(24, Decimal::new(22, 1))]
    #[case(25, Decimal::new(20, 1))]
    #[case(30, Decimal::new(20, 1))]
    fn test_crate_volume_buckets(#[case] thickness: u32, #[case] expected: Decimal) {
        assert_eq!(LogisticsConfig::default().crate_volume_for(thickness), expected);
    }

    #[test]
    fn test_shipping_rate_fallback() {
        let config = LogisticsConfig::default();
        assert_eq!(
            config.shipping_rate(Destination::NorthAmerica),
            Some(Decimal::from(3200))
        );

        let mut europe_only = LogisticsConfig::default();
        europe_only.shipping_rates.remove(&Destination::Asia);
        assert_eq!(
            europe_only.shipping_rate(Destination::Asia),
            Some(Decimal::from(2800))
        );
    }

    #[test]
    fn test_surcharges() {
        let surcharges = Surcharges::default();
        assert_eq!(surcharges.insurance_for(Decimal::from(2800)), Decimal::from(56));
        assert_eq!(surcharges.total_for(Decimal::from(2800)), Decimal::from(706));
    }

    #[test]
    fn test_config_builder() {
        let config = LogisticsConfig::default()
            .with_density("Teak", MaterialDensity::with_base(Decimal::from(650)))
            .with_grade_factor("AB", Decimal::new(110, 2))
            .with_thickness_factor(10, Decimal::new(92, 2))
            .with_utilization_factor(Decimal::new(9, 1))
            .with_shipping_rate(Destination::Asia, Decimal::from(2500));

        assert_eq!(
            config.density_for("teak").map(|d| d.base_kg_m3),
            Some(Decimal::from(650))
        );
        assert_eq!(config.grade_factor("ab"), Decimal::new(110, 2));
        assert_eq!(config.thickness_factor(10), Decimal::new(92, 2));
        assert_eq!(config.utilization_factor, Decimal::new(9, 1));
        assert_eq!(config.shipping_rate(Destination::Asia), Some(Decimal::from(2500)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = LogisticsConfig::default().with_utilization_factor(Decimal::ZERO);
        assert!(matches!(config.validate(), Err(LogisticsError::InvalidConfig(_))));

        let mut config = LogisticsConfig::default();
        config.crate_buckets.swap(0, 2);
        assert!(matches!(config.validate(), Err(LogisticsError::InvalidConfig(_))));

        let mut config = LogisticsConfig::default();
        config.shipping_rates.remove(&Destination::Europe);
        assert!(matches!(config.validate(), Err(LogisticsError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = LogisticsConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let loaded = LogisticsConfig::from_json_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_invalid() {
        let err = LogisticsConfig::from_json_str("{}").unwrap_err();
        assert!(matches!(err, LogisticsError::InvalidConfig(_)));
    }

    #[test]
    fn test_normalize_species() {
        assert_eq!(normalize_species("Combi-E"), "combi e");
        assert_eq!(normalize_species("  combi   e "), "combi e");
    }
}
