use std::sync::Arc;
use std::time::Instant;

use arrow::util::pretty::pretty_format_batches;
use common::config::Config;
use common::layout::Layout;
use common::types::TABLE_GOLD_MONTHLY_PARTNER_PERFORMANCE;
use lakehouse::DataFusionEngine;
use lakehouse::Engine;
use lakehouse::Pipeline;
use lakehouse::PipelineReport;
use lakehouse::TrendForecaster;
use tracing::info;

use crate::error::Result;

pub async fn run(cfg: &Config) -> Result<PipelineReport> {
    let layout = Layout::new(&cfg.volume.path);
    let engine = Arc::new(DataFusionEngine::new(cfg.lakehouse.warehouse_path.clone()));
    let pipeline = Pipeline::new(
        engine.clone(),
        Arc::new(TrendForecaster::new()),
        layout,
        &cfg.lakehouse,
    );

    let start = Instant::now();
    let report = pipeline.run().await?;
    info!(
        "{} tables in {}",
        report.tables.len(),
        humantime::format_duration(start.elapsed())
    );

    let summary = engine
        .query(&format!(
            "SELECT year, month, partner_name, total_revenue, per_capita_total FROM {TABLE_GOLD_MONTHLY_PARTNER_PERFORMANCE} ORDER BY year, month, partner_name"
        ))
        .await?;
    info!("monthly partner performance:\n{}", pretty_format_batches(&summary)?);

    Ok(report)
}
