use std::sync::Arc;

use common::config::Lakehouse;
use common::layout::Layout;
use tracing::info;

use crate::engine::Engine;
use crate::error::Result;
use crate::forecast::Forecaster;
use crate::stages::bronze;
use crate::stages::gold;
use crate::stages::silver;
use crate::stages::Layer;
use crate::stages::Stage;
use crate::stages::Step;

#[derive(Debug, Clone, PartialEq)]
pub struct TableReport {
    pub layer: Layer,
    pub table: String,
    pub rows: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub tables: Vec<TableReport>,
}

impl PipelineReport {
    pub fn rows(&self, table: &str) -> Option<usize> {
        self.tables.iter().find(|t| t.table == table).map(|t| t.rows)
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &TableReport> {
        self.tables.iter().filter(move |t| t.layer == layer)
    }
}

/// Bronze, silver and gold over the raw files of one volume.
pub struct Pipeline {
    engine: Arc<dyn Engine>,
    forecaster: Arc<dyn Forecaster>,
    layout: Layout,
    forecast_horizon_days: u32,
}

impl Pipeline {
    pub fn new(
        engine: Arc<dyn Engine>,
        forecaster: Arc<dyn Forecaster>,
        layout: Layout,
        cfg: &Lakehouse,
    ) -> Self {
        Self {
            engine,
            forecaster,
            layout,
            forecast_horizon_days: cfg.forecast_horizon_days,
        }
    }

    pub fn stages(&self) -> Vec<Stage> {
        vec![
            bronze::stage(&self.layout),
            silver::stage(),
            gold::stage(self.forecast_horizon_days),
        ]
    }

    pub async fn run(&self) -> Result<PipelineReport> {
        let mut report = PipelineReport::default();
        for stage in self.stages() {
            info!("{} layer: {} table(s)", stage.layer, stage.steps.len());
            for step in &stage.steps {
                let rows = self.run_step(step).await?;
                info!("{} {}: {rows} rows", stage.layer, step.table());
                report.tables.push(TableReport {
                    layer: stage.layer,
                    table: step.table().to_string(),
                    rows,
                });
            }
        }

        Ok(report)
    }

    async fn run_step(&self, step: &Step) -> Result<usize> {
        match step {
            Step::ReadFiles {
                table,
                pattern,
                provenance,
            } => self.engine.read_files(table, pattern, *provenance).await,
            Step::Sql { table, sql } => self.engine.create_or_replace(table, sql).await,
            Step::Forecast { table, request } => {
                self.engine
                    .forecast(table, request, self.forecaster.as_ref())
                    .await
            }
        }
    }
}
