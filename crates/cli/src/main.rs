use anyhow::Result;

use minehaul_core::WarehouseId;

fn main() -> Result<()> {
    minehaul_observability::init();

    let site = std::env::var("MINEHAUL_WAREHOUSE").unwrap_or_else(|_| {
        tracing::debug!("MINEHAUL_WAREHOUSE not set; using the CENTRAL site");
        "CENTRAL".to_string()
    });

    let summary = minehaul_cli::scenario::run(WarehouseId::new(site))?;

    for report in &summary.reports {
        println!("report: {}", serde_json::to_string(report)?);
    }
    println!("rejected operation: {}", summary.rejected_operation);

    println!("\ninventory:");
    for (mineral, tonnes) in &summary.inventory {
        println!("  {mineral}: {tonnes} t");
    }
    println!("total stock: {} t", summary.total_stock_t);

    println!("\nbonuses:");
    for (name, amount) in &summary.bonuses {
        println!("  {name}: {amount}");
    }

    println!("\nnotices:");
    for notice in &summary.notices {
        println!("  {notice}");
    }

    Ok(())
}
