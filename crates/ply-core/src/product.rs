//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, SheetSize};

/// 庫存產品記錄（對應庫存資料檔中的一筆）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    /// 原木樹種
    #[serde(rename = "Logs")]
    pub species: String,

    /// 認證（FSC 等）
    #[serde(default)]
    pub certificate: String,

    /// 品級
    pub grade: String,

    /// 厚度（毫米）
    #[serde(rename = "Thickness")]
    pub thickness_mm: u32,

    /// 層數
    #[serde(rename = "Ply")]
    pub ply_count: u32,

    /// 尺寸字串，格式 "WIDTHxHEIGHT"
    pub size: String,

    /// FOB 單價（USD/m³）
    #[serde(rename = "Price")]
    pub price_usd_per_m3: Decimal,

    /// 可用庫存（箱）
    #[serde(default)]
    pub crates: u32,

    /// 供應商申報：每箱張數
    pub sheets_per_crate: Option<u32>,

    /// 供應商申報：每箱重量（kg）
    pub weight_per_crate: Option<Decimal>,

    /// 供應商申報：每箱體積（m³）
    pub volume_per_crate: Option<Decimal>,

    /// 供應商申報：貨櫃載重上限（kg）
    pub payload_limit: Option<Decimal>,
}

impl Product {
    /// 創建新的產品
    pub fn new(
        species: String,
        grade: String,
        thickness_mm: u32,
        ply_count: u32,
        size: String,
        price_usd_per_m3: Decimal,
    ) -> Self {
        Self {
            species,
            certificate: String::new(),
            grade,
            thickness_mm,
            ply_count,
            size,
            price_usd_per_m3,
            crates: 0,
            sheets_per_crate: None,
            weight_per_crate: None,
            volume_per_crate: None,
            payload_limit: None,
        }
    }

    /// 建構器模式：設置認證
    pub fn with_certificate(mut self, certificate: String) -> Self {
        self.certificate = certificate;
        self
    }

    /// 建構器模式：設置可用庫存
    pub fn with_crates(mut self, crates: u32) -> Self {
        self.crates = crates;
        self
    }

    /// 建構器模式：設置供應商申報的包裝數據
    pub fn with_declared_crate(
        mut self,
        sheets_per_crate: u32,
        weight_per_crate: Decimal,
        volume_per_crate: Decimal,
    ) -> Self {
        self.sheets_per_crate = Some(sheets_per_crate);
        self.weight_per_crate = Some(weight_per_crate);
        self.volume_per_crate = Some(volume_per_crate);
        self
    }

    /// 建構器模式：設置貨櫃載重上限
    pub fn with_payload_limit(mut self, payload_limit: Decimal) -> Self {
        self.payload_limit = Some(payload_limit);
        self
    }

    /// 解析尺寸欄位
    pub fn sheet_size(&self) -> Result<SheetSize> {
        self.size.parse()
    }

    /// 顯示用標題，例如 "pine C+/C - 1220x2440"
    pub fn title(&self) -> String {
        format!("{} {} - {}", self.species, display_grade(&self.grade), self.size)
    }
}

/// 美規品級（BCX/CCX/CDX）統一大寫，其他保持原樣
pub fn display_grade(grade: &str) -> String {
    let upper = grade.to_ascii_uppercase();
    if matches!(upper.as_str(), "BCX" | "CCX" | "CDX") {
        upper
    } else {
        grade.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pine() -> Product {
        Product::new(
            "pine".to_string(),
            "C+/C".to_string(),
            18,
            7,
            "1220x2440".to_string(),
            Decimal::from(550),
        )
    }

    #[test]
    fn test_create_product() {
        let product = pine();
        assert_eq!(product.species, "pine");
        assert_eq!(product.thickness_mm, 18);
        assert_eq!(product.crates, 0);
        assert!(product.sheets_per_crate.is_none());
    }

    #[test]
    fn test_product_builder() {
        let product = pine()
            .with_certificate("FSC".to_string())
            .with_crates(12)
            .with_declared_crate(46, Decimal::from(1100), Decimal::new(2465, 3))
            .with_payload_limit(Decimal::from(26000));

        assert_eq!(product.certificate, "FSC");
        assert_eq!(product.crates, 12);
        assert_eq!(product.sheets_per_crate, Some(46));
        assert_eq!(product.volume_per_crate, Some(Decimal::new(2465, 3)));
        assert_eq!(product.payload_limit, Some(Decimal::from(26000)));
    }

    #[test]
    fn test_deserialize_stock_record() {
        let json = r#"{
            "Logs": "euca",
            "Certificate": "FSC Mix",
            "Grade": "bcx",
            "Thickness": 12,
            "Ply": 9,
            "Size": "1220x2440",
            "Price": 610,
            "Crates": 8,
            "SheetsPerCrate": 70,
            "WeightPerCrate": 1350,
            "VolumePerCrate": 2.5
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.species, "euca");
        assert_eq!(product.certificate, "FSC Mix");
        assert_eq!(product.ply_count, 9);
        assert_eq!(product.price_usd_per_m3, Decimal::from(610));
        assert_eq!(product.crates, 8);
        assert_eq!(product.sheets_per_crate, Some(70));
        assert_eq!(product.volume_per_crate, Some(Decimal::new(25, 1)));
        assert!(product.payload_limit.is_none());
    }

    #[test]
    fn test_sheet_size_and_title() {
        let product = pine();
        assert!(product.sheet_size().is_ok());
        assert_eq!(product.title(), "pine C+/C - 1220x2440");
    }

    #[test]
    fn test_display_grade() {
        assert_eq!(display_grade("bcx"), "BCX");
        assert_eq!(display_grade("cdx"), "CDX");
        assert_eq!(display_grade("shop grade"), "shop grade");
    }
}
