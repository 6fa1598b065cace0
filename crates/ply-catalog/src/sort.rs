//! 產品排序

use ply_core::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 排序欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Price,
    Thickness,
    Crates,
    Species,
}

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortKey {
    /// 比較兩個產品
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Price => a.price_usd_per_m3.cmp(&b.price_usd_per_m3),
            SortKey::Thickness => a.thickness_mm.cmp(&b.thickness_mm),
            SortKey::Crates => a.crates.cmp(&b.crates),
            SortKey::Species => a.species.cmp(&b.species),
        }
    }
}

/// 穩定排序，相同鍵值保持原順序
pub fn sort_products(products: &mut [&Product], key: SortKey, order: SortOrder) {
    products.sort_by(|a, b| match order {
        SortOrder::Ascending => key.compare(a, b),
        SortOrder::Descending => key.compare(b, a),
    });
}
