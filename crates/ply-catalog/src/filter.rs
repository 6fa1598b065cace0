//! 產品篩選條件

use ply_core::Product;
use serde::{Deserialize, Serialize};

/// 篩選條件（全部為可選，彼此以 AND 組合）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub species: Option<String>,
    pub certificate: Option<String>,
    pub grade: Option<String>,
    pub thickness_mm: Option<u32>,
}

impl ProductFilter {
    /// 建構器模式：按樹種篩選
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// 建構器模式：按認證篩選
    pub fn with_certificate(mut self, certificate: impl Into<String>) -> Self {
        self.certificate = Some(certificate.into());
        self
    }

    /// 建構器模式：按品級篩選
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// 建構器模式：按厚度篩選
    pub fn with_thickness(mut self, thickness_mm: u32) -> Self {
        self.thickness_mm = Some(thickness_mm);
        self
    }

    /// 是否未設置任何條件
    pub fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.certificate.is_none()
            && self.grade.is_none()
            && self.thickness_mm.is_none()
    }

    /// 檢查產品是否符合條件（精確比對）
    pub fn matches(&self, product: &Product) -> bool {
        self.species.as_ref().map_or(true, |s| *s == product.species)
            && self
                .certificate
                .as_ref()
                .map_or(true, |c| *c == product.certificate)
            && self.grade.as_ref().map_or(true, |g| *g == product.grade)
            && self.thickness_mm.map_or(true, |t| t == product.thickness_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::pine;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&pine()));
    }

    #[test]
    fn test_combined_conditions() {
        let product = pine().with_certificate("FSC".to_string());

        let filter = ProductFilter::default()
            .with_species("pine")
            .with_certificate("FSC")
            .with_thickness(18);
        assert!(!filter.is_empty());
        assert!(filter.matches(&product));

        let filter = filter.with_grade("BCX");
        assert!(!filter.matches(&product));
    }

    #[test]
    fn test_exact_match_only() {
        let filter = ProductFilter::default().with_species("Pine");
        assert!(!filter.matches(&pine()));

        let filter = ProductFilter::default().with_thickness(15);
        assert!(!filter.matches(&pine()));
    }
}
