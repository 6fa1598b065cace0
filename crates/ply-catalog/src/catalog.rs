//! 庫存目錄

use ply_core::{LogisticsError, Product, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::filter::ProductFilter;
use crate::sort::{sort_products, SortKey, SortOrder};

/// 庫存目錄（啟動時一次性載入，之後唯讀）
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

/// 篩選器可選值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFacets {
    pub species: Vec<String>,
    pub certificates: Vec<String>,
    pub grades: Vec<String>,
    pub thicknesses: Vec<u32>,
}

/// 目錄統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub products: usize,
    pub species: usize,
    pub certificates: usize,
    pub grades: usize,
    pub total_crates: u64,
}

impl Catalog {
    /// 以已驗證的產品創建目錄
    pub fn new(products: Vec<Product>) -> Result<Self> {
        for (index, product) in products.iter().enumerate() {
            product.sheet_size().map_err(|_| {
                LogisticsError::MalformedSize(format!("第 {} 筆: {}", index, product.size))
            })?;
        }
        Ok(Self { products })
    }

    /// 從庫存 JSON 陣列載入
    pub fn from_json_str(json: &str) -> Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| LogisticsError::Dataset(e.to_string()))?;

        let catalog = Self::new(products)?;
        tracing::info!("庫存目錄載入完成：產品 {} 筆", catalog.len());
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 篩選產品，返回 (索引, 產品)
    pub fn filter(&self, filter: &ProductFilter) -> Vec<(usize, &Product)> {
        self.products
            .iter()
            .enumerate()
            .filter(|(_, product)| filter.matches(product))
            .collect()
    }

    /// 篩選後排序
    pub fn search(
        &self,
        filter: &ProductFilter,
        key: SortKey,
        order: SortOrder,
    ) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .collect();
        sort_products(&mut products, key, order);
        products
    }

    /// 篩選器可選值（排序、去重）
    pub fn facets(&self) -> CatalogFacets {
        let species: BTreeSet<&str> = self.products.iter().map(|p| p.species.as_str()).collect();
        let certificates: BTreeSet<&str> =
            self.products.iter().map(|p| p.certificate.as_str()).collect();
        let grades: BTreeSet<&str> = self.products.iter().map(|p| p.grade.as_str()).collect();
        let thicknesses: BTreeSet<u32> = self.products.iter().map(|p| p.thickness_mm).collect();

        CatalogFacets {
            species: species.into_iter().map(String::from).collect(),
            certificates: certificates.into_iter().map(String::from).collect(),
            grades: grades.into_iter().map(String::from).collect(),
            thicknesses: thicknesses.into_iter().collect(),
        }
    }

    /// 統計指定產品集合
    pub fn stats<'a>(products: impl IntoIterator<Item = &'a Product>) -> CatalogStats {
        let mut species = BTreeSet::new();
        let mut certificates = BTreeSet::new();
        let mut grades = BTreeSet::new();
        let mut stats = CatalogStats::default();

        for product in products {
            stats.products += 1;
            stats.total_crates += u64::from(product.crates);
            species.insert(product.species.as_str());
            certificates.insert(product.certificate.as_str());
            grades.insert(product.grade.as_str());
        }

        stats.species = species.len();
        stats.certificates = certificates.len();
        stats.grades = grades.len();
        stats
    }
}
