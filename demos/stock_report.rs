//! 庫存物流報表示例

use plystock::catalog::DeclaredPricing;
use plystock::{Catalog, Destination, InterestList, LogisticsEngine};
use rust_decimal::Decimal;

const STOCK: &str = r#"[
    {"Logs": "pine", "Certificate": "FSC", "Grade": "C+/C", "Thickness": 18, "Ply": 7,
     "Size": "1220x2440", "Price": 550, "Crates": 30,
     "SheetsPerCrate": 46, "WeightPerCrate": 1110, "VolumePerCrate": 2.465, "PayloadLimit": 26000},
    {"Logs": "euca", "Certificate": "FSC Mix", "Grade": "BCX", "Thickness": 12, "Ply": 9,
     "Size": "1220x2440", "Price": 610, "Crates": 8},
    {"Logs": "combi", "Certificate": "FSC", "Grade": "CDX", "Thickness": 9, "Ply": 5,
     "Size": "1250x2500", "Price": 480, "Crates": 20}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 庫存物流報表 ===\n");

    let catalog = Catalog::from_json_str(STOCK)?;
    let engine = LogisticsEngine::default();

    for (product, summary) in catalog
        .products()
        .iter()
        .zip(engine.summarize_all(catalog.products()))
    {
        println!("{}", product.title());
        match summary {
            Ok(summary) => {
                println!(
                    "  重量: {} kg/m³, {} kg/張, {} kg/箱",
                    summary.weight.per_m3, summary.weight.per_sheet, summary.weight.per_crate
                );
                println!(
                    "  體積: {} L/張, 每箱 {} 張",
                    summary.sheet_volume_liters(),
                    summary.volume.sheets_per_crate
                );
                println!(
                    "  貨櫃: 實際容量 {} m³, 最多 {} 箱",
                    summary.container.practical_capacity, summary.container.max_crates
                );
                println!(
                    "  運費: 歐洲 ${}/m³, 北美 ${}/m³",
                    summary.europe.cost_per_m3_usd, summary.north_america.cost_per_m3_usd
                );
            }
            Err(e) => println!("  物流數據不可用: {}", e),
        }

        let declared = DeclaredPricing::from_product(product);
        if let Some(value) = declared.container_value_usd {
            println!("  整櫃貨值（申報）: ${}", value.round_dp(0));
        }
    }

    let mut list = InterestList::new();
    list.add(&catalog, 0, 10)?;
    list.add(&catalog, 2, 5)?;

    let quote = list.quote(&engine, Destination::Asia)?;
    println!("\n到岸成本（亞洲）: ${}", quote.total_cost_usd.round_dp(0));
    println!("總體積: {} m³", list.total_volume_m3(&engine)?.round_dp(3));
    println!("\n{}", list.render_inquiry(&engine, "buyer@example.com")?);

    let landed = engine.landed_cost(&catalog.products()[1], Decimal::from(60), "europe")?;
    println!(
        "euca 60 m³ 到歐洲: {} 櫃, 效率 {}%",
        landed.containers_needed,
        landed.efficiency_pct.round_dp(1)
    );

    Ok(())
}
