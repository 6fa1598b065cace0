//! # Plystock
//!
//! 合板出口庫存目錄與物流計算

pub use ply_calc as calc;
pub use ply_catalog as catalog;
pub use ply_core as model;

pub use ply_calc::{
    DerivedCapacity, LandedCost, LogisticsEngine, LogisticsSummary, ShippingEstimate,
};
pub use ply_catalog::{Catalog, InterestList, ProductFilter};
pub use ply_core::{Destination, LogisticsConfig, LogisticsError, Product, Result};
