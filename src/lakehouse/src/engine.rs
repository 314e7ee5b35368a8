use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::Array;
use arrow::array::ArrayRef;
use arrow::array::Date32Array;
use arrow::array::Float64Array;
use arrow::array::StringArray;
use arrow::datatypes::DataType;
use arrow::datatypes::Date32Type;
use arrow::datatypes::Field;
use arrow::datatypes::Schema;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use async_trait::async_trait;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::Utc;
use common::types::COLUMN_INGESTION_TIMESTAMP;
use common::types::COLUMN_SOURCE_FILE;
use datafusion::datasource::MemTable;
use datafusion::parquet::arrow::ArrowWriter;
use datafusion::prelude::lit;
use datafusion::prelude::CsvReadOptions;
use datafusion::prelude::DataFrame;
use datafusion::prelude::SessionContext;
use datafusion::scalar::ScalarValue;
use tracing::debug;
use tracing::warn;

use crate::error::LakehouseError;
use crate::error::Result;
use crate::forecast::ForecastRequest;
use crate::forecast::Forecaster;

/// Query execution seen by the pipeline stages. Every method that produces a table replaces
/// any previous table of that name and returns its row count.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Ingests every CSV file matching `pattern` into `table` under one merged schema.
    /// With `provenance` each row also carries its source path and the ingestion time.
    async fn read_files(&self, table: &str, pattern: &Path, provenance: bool) -> Result<usize>;

    async fn create_or_replace(&self, table: &str, sql: &str) -> Result<usize>;

    async fn forecast(
        &self,
        table: &str,
        request: &ForecastRequest,
        forecaster: &dyn Forecaster,
    ) -> Result<usize>;

    async fn query(&self, sql: &str) -> Result<Vec<RecordBatch>>;
}

/// Expands a wildcard path into sorted absolute file paths.
pub fn expand(pattern: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if path.is_file() {
            paths.push(fs::canonicalize(path)?);
        }
    }
    paths.sort();

    Ok(paths)
}

pub struct DataFusionEngine {
    ctx: SessionContext,
    warehouse: Option<PathBuf>,
}

impl DataFusionEngine {
    pub fn new(warehouse: Option<PathBuf>) -> Self {
        Self {
            ctx: SessionContext::new(),
            warehouse,
        }
    }

    async fn materialize(&self, table: &str, df: DataFrame) -> Result<usize> {
        let schema: SchemaRef = Arc::new(Schema::from(df.schema()));
        let batches = df.collect().await?;
        self.replace_table(table, schema, batches)
    }

    fn replace_table(
        &self,
        table: &str,
        schema: SchemaRef,
        batches: Vec<RecordBatch>,
    ) -> Result<usize> {
        // batches of one result may disagree on nullability, so every field is widened
        let schema = nullable(&schema);
        let batches = batches
            .into_iter()
            .map(|b| RecordBatch::try_new(schema.clone(), b.columns().to_vec()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let rows = batches.iter().map(|b| b.num_rows()).sum();

        self.persist(table, schema.clone(), &batches)?;
        let provider = MemTable::try_new(schema, vec![batches])?;
        self.ctx.deregister_table(table)?;
        self.ctx.register_table(table, Arc::new(provider))?;
        debug!("{table} materialized, {rows} rows");

        Ok(rows)
    }

    fn persist(&self, table: &str, schema: SchemaRef, batches: &[RecordBatch]) -> Result<()> {
        let dir = match &self.warehouse {
            Some(dir) => dir,
            None => return Ok(()),
        };
        fs::create_dir_all(dir)?;

        let path = dir.join(format!("{table}.parquet"));
        let file = File::create(&path)?;
        let mut writer = ArrowWriter::try_new(file, schema, None)?;
        for batch in batches {
            writer.write(batch)?;
        }
        writer.close()?;
        debug!("{table} persisted to {}", path.display());

        Ok(())
    }
}

#[async_trait]
impl Engine for DataFusionEngine {
    async fn read_files(&self, table: &str, pattern: &Path, provenance: bool) -> Result<usize> {
        let paths: Vec<String> = expand(pattern)?
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        if paths.is_empty() {
            return Err(LakehouseError::NoFilesMatched(
                pattern.to_string_lossy().to_string(),
            ));
        }
        debug!("{table}: {} file(s) match {}", paths.len(), pattern.display());

        let merged = self
            .ctx
            .read_csv(paths.clone(), CsvReadOptions::new().has_header(true))
            .await?;
        let file_schema = Schema::from(merged.schema());
        if !provenance {
            return self.materialize(table, merged).await;
        }

        let ingested_at = ScalarValue::TimestampMicrosecond(
            Some(Utc::now().timestamp_micros()),
            Some("+00:00".into()),
        );
        let mut schema: SchemaRef = Arc::new(file_schema.clone());
        let mut batches = Vec::new();
        for path in &paths {
            let options = CsvReadOptions::new().has_header(true).schema(&file_schema);
            let df = self
                .ctx
                .read_csv(path.as_str(), options)
                .await?
                .with_column(COLUMN_SOURCE_FILE, lit(path.as_str()))?
                .with_column(COLUMN_INGESTION_TIMESTAMP, lit(ingested_at.clone()))?;
            schema = Arc::new(Schema::from(df.schema()));
            batches.extend(df.collect().await?);
        }

        self.replace_table(table, schema, batches)
    }

    async fn create_or_replace(&self, table: &str, sql: &str) -> Result<usize> {
        let df = self.ctx.sql(sql).await?;
        self.materialize(table, df).await
    }

    async fn forecast(
        &self,
        table: &str,
        request: &ForecastRequest,
        forecaster: &dyn Forecaster,
    ) -> Result<usize> {
        let sql = format!(
            "SELECT CAST({time} AS DATE), CAST({group} AS VARCHAR), CAST({value} AS DOUBLE) FROM {source}",
            time = request.time_col,
            group = request.group_col,
            value = request.value_col,
            source = request.source,
        );

        let mut series: BTreeMap<String, Vec<(NaiveDate, f64)>> = BTreeMap::new();
        let mut dropped = 0;
        for batch in self.query(&sql).await? {
            let dates = downcast::<Date32Array>(batch.column(0), &request.time_col)?;
            let groups = downcast::<StringArray>(batch.column(1), &request.group_col)?;
            let values = downcast::<Float64Array>(batch.column(2), &request.value_col)?;

            for row in 0..batch.num_rows() {
                if dates.is_null(row) || groups.is_null(row) || values.is_null(row) {
                    dropped += 1;
                    continue;
                }
                let date = dates.value_as_date(row).ok_or_else(|| {
                    LakehouseError::Internal(format!("bad date in {}", request.time_col))
                })?;
                series
                    .entry(groups.value(row).to_string())
                    .or_default()
                    .push((date, values.value(row)));
            }
        }
        if dropped > 0 {
            warn!("{table}: dropped {dropped} row(s) with null time, group or value");
        }

        let last = series.values().flatten().map(|(d, _)| *d).max();
        let mut dates = Vec::new();
        let mut groups = Vec::new();
        let mut forecasts = Vec::new();
        let mut uppers = Vec::new();
        let mut lowers = Vec::new();
        if let Some(last) = last {
            let horizon = last + Duration::days(request.horizon_days as i64);
            debug!("{table}: {} group(s) up to {horizon}", series.len());
            for (group, history) in &series {
                for point in forecaster.forecast(history, horizon)? {
                    dates.push(Date32Type::from_naive_date(point.date));
                    groups.push(group.clone());
                    forecasts.push(point.value);
                    uppers.push(point.upper);
                    lowers.push(point.lower);
                }
            }
        }

        let schema = Arc::new(Schema::new(vec![
            Field::new(&request.time_col, DataType::Date32, false),
            Field::new(&request.group_col, DataType::Utf8, false),
            Field::new(format!("{}_forecast", request.value_col), DataType::Float64, false),
            Field::new(format!("{}_upper", request.value_col), DataType::Float64, false),
            Field::new(format!("{}_lower", request.value_col), DataType::Float64, false),
        ]));
        let batches = if dates.is_empty() {
            vec![]
        } else {
            let columns: Vec<ArrayRef> = vec![
                Arc::new(Date32Array::from(dates)),
                Arc::new(StringArray::from(groups)),
                Arc::new(Float64Array::from(forecasts)),
                Arc::new(Float64Array::from(uppers)),
                Arc::new(Float64Array::from(lowers)),
            ];
            vec![RecordBatch::try_new(schema.clone(), columns)?]
        };

        self.replace_table(table, schema, batches)
    }

    async fn query(&self, sql: &str) -> Result<Vec<RecordBatch>> {
        Ok(self.ctx.sql(sql).await?.collect().await?)
    }
}

fn nullable(schema: &Schema) -> SchemaRef {
    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|f| f.as_ref().clone().with_nullable(true))
        .collect();
    Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone()))
}

fn downcast<'a, T: 'static>(array: &'a ArrayRef, column: &str) -> Result<&'a T> {
    array
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| LakehouseError::Internal(format!("unexpected type of column {column}")))
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_expand_sorts_and_skips_dirs() {
        let root = temp_dir().join(format!("lakehouse-expand-{}", Uuid::new_v4()));
        fs::create_dir_all(root.join("b")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("b").join("x_1.csv"), "c\n1\n").unwrap();
        fs::write(root.join("a").join("x_2.csv"), "c\n2\n").unwrap();
        fs::create_dir_all(root.join("a").join("x_dir.csv")).unwrap();

        let paths = expand(&root.join("*").join("x_*.csv")).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("a/x_2.csv"));
        assert!(paths[1].ends_with("b/x_1.csv"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn test_union_with_mixed_nullability() -> anyhow::Result<()> {
        let engine = DataFusionEngine::new(None);
        let rows = engine
            .create_or_replace(
                "mixed",
                "SELECT 'a' AS g, 1 AS v UNION ALL SELECT CAST(NULL AS VARCHAR) AS g, 2 AS v",
            )
            .await?;
        assert_eq!(rows, 2);

        let batches = engine.query("SELECT COUNT(*) FROM mixed WHERE g IS NULL").await?;
        let nulls = batches[0]
            .column(0)
            .as_any()
            .downcast_ref::<arrow::array::Int64Array>()
            .unwrap();
        assert_eq!(nulls.value(0), 1);

        Ok(())
    }
}
