//! Print the eight runner totals for a workload and check them against the
//! pinned reference.
//!
//! Usage:
//!   cargo run -p shapebench --example report_totals
//!   cargo run -p shapebench --example report_totals -- 4096

use anyhow::{Context, Result};
use shapebench::prelude::*;
use shapebench::validate::reference_total;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("count must be a non-negative integer, got {arg:?}"))?,
        None => REFERENCE_COUNT,
    };
    let cfg = BenchCfg {
        count,
        ..BenchCfg::default()
    };

    let ds = Dataset::generate(cfg.count);
    let expected = if cfg.count == REFERENCE_COUNT {
        REFERENCE_TOTAL
    } else {
        reference_total(&ds)
    };
    tracing::info!(
        version = shapebench::VERSION,
        count = cfg.count,
        expected,
        "workload"
    );
    for i in 0..4 {
        if let Some(shape) = ds.describe(i) {
            println!("shape[{i}] = {shape:?} area {}", shape.area());
        }
    }

    let reports = validate_all(&ds, expected, cfg)?;
    for r in &reports {
        println!("{:>8}/{:<9} {:.8}", r.strategy, r.loop_shape, r.total);
    }
    tracing::info!(runners = reports.len(), "all totals within tolerance");
    Ok(())
}
