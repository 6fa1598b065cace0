//! # Ply Catalog
//!
//! 庫存目錄：載入、篩選、排序、統計，以及詢價清單

pub mod catalog;
pub mod filter;
pub mod interest;
pub mod pricing;
pub mod sort;

// Re-export 主要類型
pub use catalog::{Catalog, CatalogFacets, CatalogStats};
pub use filter::ProductFilter;
pub use interest::{InterestItem, InterestList, InterestQuote, QuoteLine};
pub use pricing::DeclaredPricing;
pub use sort::{SortKey, SortOrder};
