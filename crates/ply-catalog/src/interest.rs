//! 詢價清單
//!
//! 訪客挑選的產品與箱數，可估算總值、到岸成本，並產生寄給供應商的詢價內容。
//! 寄送郵件不在本模組範圍。

use chrono::{DateTime, Utc};
use ply_calc::{LandedCost, LogisticsEngine};
use ply_core::{display_grade, Destination, LogisticsError, Product, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;

const MARKET_NOTE: &str =
    "Note: prices and weights may vary depending on market conditions and availability.";

/// 清單項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestItem {
    /// 目錄中的產品索引
    pub product_index: usize,

    pub product: Product,

    /// 箱數
    pub crates: u32,
}

impl InterestItem {
    /// 每箱體積：優先使用供應商申報值，否則使用引擎推算
    pub fn crate_volume_m3(&self, engine: &LogisticsEngine) -> Result<Decimal> {
        match self.product.volume_per_crate {
            Some(volume) if volume > Decimal::ZERO => Ok(volume),
            _ => Ok(engine.container_capacity(&self.product)?.crate_volume_m3),
        }
    }

    /// 項目總體積（m³）
    pub fn volume_m3(&self, engine: &LogisticsEngine) -> Result<Decimal> {
        Ok(self.crate_volume_m3(engine)? * Decimal::from(self.crates))
    }

    /// 小計（USD）= 體積 × FOB 單價
    pub fn subtotal_usd(&self, engine: &LogisticsEngine) -> Result<Decimal> {
        Ok(self.volume_m3(engine)? * self.product.price_usd_per_m3)
    }
}

/// 報價明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_index: usize,
    pub volume_m3: Decimal,
    pub landed: LandedCost,
}

/// 清單到岸成本報價
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestQuote {
    pub destination: Destination,
    pub lines: Vec<QuoteLine>,
    pub total_cost_usd: Decimal,
    /// 各明細貨櫃數之和；每項視為獨立出貨，不計併櫃
    pub containers_needed: u64,
}

/// 詢價清單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestList {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    items: Vec<InterestItem>,
}

impl InterestList {
    /// 創建空清單
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[InterestItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 加入產品，重複加入時合併箱數；返回該產品目前的總箱數
    pub fn add(&mut self, catalog: &Catalog, product_index: usize, crates: u32) -> Result<u32> {
        if crates == 0 {
            return Err(LogisticsError::InvalidQuantity(Decimal::ZERO));
        }
        let product = catalog
            .get(product_index)
            .ok_or(LogisticsError::ProductNotFound(product_index))?;

        let existing = self
            .items
            .iter()
            .position(|item| item.product_index == product_index);
        let current = existing.map_or(0, |pos| self.items[pos].crates);
        let requested = current.saturating_add(crates);

        if requested > product.crates {
            return Err(LogisticsError::OverAllocation {
                requested,
                available: product.crates,
            });
        }

        match existing {
            Some(pos) => self.items[pos].crates = requested,
            None => self.items.push(InterestItem {
                product_index,
                product: product.clone(),
                crates,
            }),
        }

        tracing::debug!("詢價清單加入 {}：共 {} 箱", product.title(), requested);
        Ok(requested)
    }

    /// 設定箱數，0 表示移除
    pub fn set_quantity(&mut self, product_index: usize, crates: u32) -> Result<()> {
        let pos = self
            .items
            .iter()
            .position(|item| item.product_index == product_index)
            .ok_or(LogisticsError::ProductNotFound(product_index))?;

        if crates == 0 {
            self.items.remove(pos);
            return Ok(());
        }

        let available = self.items[pos].product.crates;
        if crates > available {
            return Err(LogisticsError::OverAllocation {
                requested: crates,
                available,
            });
        }

        self.items[pos].crates = crates;
        Ok(())
    }

    /// 移除產品，返回是否存在
    pub fn remove(&mut self, product_index: usize) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_index != product_index);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// 總箱數
    pub fn total_crates(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.crates)).sum()
    }

    /// 總體積（m³）
    pub fn total_volume_m3(&self, engine: &LogisticsEngine) -> Result<Decimal> {
        self.items.iter().map(|item| item.volume_m3(engine)).sum()
    }

    /// 估計總貨值（USD，FOB）
    pub fn estimated_total_usd(&self, engine: &LogisticsEngine) -> Result<Decimal> {
        self.items.iter().map(|item| item.subtotal_usd(engine)).sum()
    }

    /// 逐項計算到岸成本，每項各自按整櫃計算運費
    pub fn quote(
        &self,
        engine: &LogisticsEngine,
        destination: Destination,
    ) -> Result<InterestQuote> {
        let mut lines = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let volume_m3 = item.volume_m3(engine)?;
            let landed = engine.landed_cost_to(&item.product, volume_m3, destination)?;
            lines.push(QuoteLine {
                product_index: item.product_index,
                volume_m3,
                landed,
            });
        }

        let total_cost_usd = lines.iter().map(|line| line.landed.total_cost_usd).sum();
        let containers_needed = lines
            .iter()
            .map(|line| u64::from(line.landed.containers_needed))
            .sum();

        Ok(InterestQuote {
            destination,
            lines,
            total_cost_usd,
            containers_needed,
        })
    }

    /// 產生詢價郵件內容
    pub fn render_inquiry(&self, engine: &LogisticsEngine, contact_email: &str) -> Result<String> {
        let mut lines = vec![
            "list request".to_string(),
            format!("contact: {}", contact_email.trim()),
            format!("inquiry: {}", self.id),
            format!("date: {}", self.created_at.format("%Y-%m-%d %H:%M UTC")),
            String::new(),
            "selected items:".to_string(),
        ];

        for (n, item) in self.items.iter().enumerate() {
            let product = &item.product;
            lines.push(format!(
                "{}. {} {} - {} | {}mm | {} ply | {}",
                n + 1,
                product.species,
                display_grade(&product.grade),
                product.size,
                product.thickness_mm,
                product.ply_count,
                product.certificate
            ));
            lines.push(format!("   crates: {}", item.crates));
            lines.push(format!(
                "   unit price/m³: {}",
                format_usd(product.price_usd_per_m3)
            ));
            lines.push(format!("   subtotal: {}", format_usd(item.subtotal_usd(engine)?)));
        }

        lines.push(String::new());
        lines.push(format!("total crates: {}", self.total_crates()));
        lines.push(format!(
            "estimated total value: {}",
            format_usd(self.estimated_total_usd(engine)?)
        ));
        lines.push(String::new());
        lines.push(MARKET_NOTE.to_string());

        let mut body = lines.join("\n");
        body.push('\n');
        Ok(body)
    }
}

impl Default for InterestList {
    fn default() -> Self {
        Self::new()
    }
}

/// 美元整數格式，千分位逗號，例如 $13,750
pub fn format_usd(value: Decimal) -> String {
    let whole = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
