use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::Array;
use arrow::array::Float64Array;
use arrow::array::Int32Array;
use arrow::array::Int64Array;
use arrow::array::StringArray;
use arrow::record_batch::RecordBatch;
use common::config::Generation;
use common::config::Lakehouse;
use common::config::Partner;
use common::config::Universe;
use common::layout::Layout;
use datagen::generate_dimensions;
use datagen::generate_facts;
use lakehouse::error::LakehouseError;
use lakehouse::forecast::ForecastRequest;
use lakehouse::stages::gold;
use lakehouse::stages::silver;
use lakehouse::stages::Layer;
use lakehouse::DataFusionEngine;
use lakehouse::Engine;
use lakehouse::Pipeline;
use lakehouse::TrendForecaster;
use tracing_test::traced_test;
use uuid::Uuid;

fn tmp_root() -> PathBuf {
    temp_dir().join(format!("lakehouse-{}", Uuid::new_v4()))
}

fn small_universe() -> Universe {
    let defaults = Universe::default();
    Universe {
        partners: vec![
            Partner {
                name: "DreamWorld_Parks".to_string(),
                facilities: vec!["DW_Orlando".to_string(), "DW_Tokyo".to_string()],
            },
            Partner {
                name: "ToyLand_Adventures".to_string(),
                facilities: vec!["TL_London".to_string(), "TL_Paris".to_string()],
            },
        ],
        ips: vec!["RoboBuddies".to_string(), "DinoSquad".to_string()],
        markets: defaults.markets,
    }
}

fn single_i64(batches: &[RecordBatch]) -> i64 {
    batches[0]
        .column(0)
        .as_any()
        .downcast_ref::<Int64Array>()
        .unwrap()
        .value(0)
}

fn single_f64(batches: &[RecordBatch]) -> f64 {
    batches[0]
        .column(0)
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap()
        .value(0)
}

#[traced_test]
#[tokio::test]
async fn test_medallion_end_to_end() -> anyhow::Result<()> {
    let root = tmp_root();
    let layout = Layout::new(&root);
    let warehouse = root.join("warehouse");
    let universe = small_universe();
    let generation = Generation {
        months: vec![7],
        rows_per_file: 200,
        customers: 20,
        workers: 2,
        ..Generation::default()
    };
    generate_facts(&layout, &universe, &generation, |_| {})?;
    generate_dimensions(&layout, &universe, &generation)?;

    let engine = Arc::new(DataFusionEngine::new(Some(warehouse.clone())));
    let cfg = Lakehouse {
        warehouse_path: Some(warehouse.clone()),
        forecast_horizon_days: 5,
    };
    let pipeline = Pipeline::new(
        engine.clone(),
        Arc::new(TrendForecaster::new()),
        layout.clone(),
        &cfg,
    );
    let report = pipeline.run().await?;

    assert_eq!(report.layer(Layer::Bronze).count(), 8);
    assert_eq!(report.layer(Layer::Silver).count(), 5);
    assert_eq!(report.layer(Layer::Gold).count(), 7);
    assert_eq!(report.rows("bronze_ticket_sales"), Some(400));
    assert_eq!(report.rows("bronze_fnb_sales"), Some(400));
    assert_eq!(report.rows("silver_retail_sales"), Some(400));
    assert_eq!(report.rows("bronze_dim_facilities"), Some(4));
    assert_eq!(report.rows("bronze_dim_dates"), Some(184));
    assert_eq!(report.rows("silver_dim_campaigns"), Some(6));
    // both partners trade on the 28th, so each gets the full horizon
    assert_eq!(report.rows("gold_revenue_forecast"), Some(10));

    let files = engine
        .query("SELECT COUNT(DISTINCT source_file) FROM bronze_ticket_sales")
        .await?;
    assert_eq!(single_i64(&files), 2);
    let stamps = engine
        .query("SELECT COUNT(DISTINCT ingestion_timestamp) FROM bronze_fnb_sales")
        .await?;
    assert_eq!(single_i64(&stamps), 1);

    let unmatched = engine
        .query("SELECT COUNT(*) FROM silver_ticket_sales WHERE partner_name IS NULL")
        .await?;
    assert_eq!(single_i64(&unmatched), 0);

    let silver_total = engine
        .query(
            "SELECT CAST(SUM(total_amount) AS DOUBLE) FROM (
                SELECT total_amount FROM silver_ticket_sales
                UNION ALL SELECT total_amount FROM silver_fnb_sales
                UNION ALL SELECT total_amount FROM silver_retail_sales
            ) t",
        )
        .await?;
    let gold_total = engine
        .query("SELECT CAST(SUM(total_revenue) AS DOUBLE) FROM gold_daily_revenue")
        .await?;
    assert!((single_f64(&silver_total) - single_f64(&gold_total)).abs() < 0.01);

    let over = engine
        .query("SELECT COUNT(*) FROM gold_daily_revenue WHERE repeat_visitors > total_visitors")
        .await?;
    assert_eq!(single_i64(&over), 0);
    let repeat = engine
        .query("SELECT CAST(SUM(repeat_visitors) AS BIGINT) FROM gold_daily_revenue")
        .await?;
    assert!(single_i64(&repeat) > 0);

    let day_types = engine
        .query("SELECT DISTINCT day_of_week, day_type FROM gold_hourly_patterns")
        .await?;
    for batch in &day_types {
        let dow = batch.column(0).as_any().downcast_ref::<Int32Array>().unwrap();
        let kind = batch.column(1).as_any().downcast_ref::<StringArray>().unwrap();
        for row in 0..batch.num_rows() {
            let expected = if dow.value(row) == 1 || dow.value(row) == 7 {
                "Weekend"
            } else {
                "Weekday"
            };
            assert!((1..=7).contains(&dow.value(row)));
            assert_eq!(kind.value(row), expected);
        }
    }

    let last = engine
        .query("SELECT CAST(MAX(transaction_date) AS VARCHAR) FROM gold_revenue_forecast")
        .await?;
    let last = last[0].column(0).as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(last.value(0), "2025-08-02");

    assert!(warehouse.join("gold_revenue_forecast.parquet").exists());
    assert!(warehouse.join("bronze_ticket_sales.parquet").exists());

    fs::remove_dir_all(&root)?;
    Ok(())
}

#[tokio::test]
async fn test_no_files_matched() -> anyhow::Result<()> {
    let root = tmp_root();
    fs::create_dir_all(&root)?;
    let engine = DataFusionEngine::new(None);

    let res = engine
        .read_files("bronze_ticket_sales", &root.join("*").join("ticket_sales_*.csv"), true)
        .await;
    assert!(matches!(res, Err(LakehouseError::NoFilesMatched(_))));

    fs::remove_dir_all(&root)?;
    Ok(())
}

#[tokio::test]
async fn test_unknown_facility_keeps_row_with_nulls() -> anyhow::Result<()> {
    let root = tmp_root();
    fs::create_dir_all(&root)?;
    let sales = root.join("ticket_sales_07_2025.csv");
    fs::write(
        &sales,
        "transaction_id,transaction_date,facility_id,ip_name,ticket_type,quantity,unit_price,discount_pct,customer_id,is_repeat_visitor,visit_hour,channel,total_amount
TKT_Dre_7_000000,2025-07-01,DW_Orlando,RoboBuddies,Adult,2,50.0,10,CUST_000001,true,10,Online,90.0
TKT_Dre_7_000001,2025-07-02,XX_Nowhere,RoboBuddies,Child,1,30.0,0,CUST_000002,false,11,Online,30.0
",
    )?;
    let dim = root.join("dim_facilities.csv");
    fs::write(
        &dim,
        "facility_id,facility_name,partner_name,market,country,capacity,opened_date,experience_type
DW_Orlando,DW Orlando,DreamWorld_Parks,North_America,Orlando,12000,2018-03-01,Theme_Park
",
    )?;

    let engine = DataFusionEngine::new(None);
    engine.read_files("bronze_ticket_sales", &sales, true).await?;
    engine.read_files("bronze_dim_facilities", &dim, false).await?;
    let rows = engine
        .create_or_replace("silver_ticket_sales", silver::TICKET_SALES)
        .await?;
    assert_eq!(rows, 2);

    let batches = engine
        .query("SELECT facility_id, partner_name, market FROM silver_ticket_sales ORDER BY facility_id")
        .await?;
    let ids = batches[0].column(0).as_any().downcast_ref::<StringArray>().unwrap();
    let partners = batches[0].column(1).as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(ids.value(0), "DW_Orlando");
    assert_eq!(partners.value(0), "DreamWorld_Parks");
    assert_eq!(ids.value(1), "XX_Nowhere");
    assert!(partners.is_null(1));

    fs::remove_dir_all(&root)?;
    Ok(())
}

#[tokio::test]
async fn test_daily_revenue_joins_streams() -> anyhow::Result<()> {
    let engine = DataFusionEngine::new(None);
    engine
        .create_or_replace(
            "silver_ticket_sales",
            "SELECT CAST('2025-07-01' AS DATE) AS transaction_date, 'DW_Orlando' AS facility_id,
                'DW Orlando' AS facility_name, 'DreamWorld_Parks' AS partner_name, 'North_America' AS market,
                CAST(90.0 AS DOUBLE) AS total_amount, 3 AS quantity, true AS is_repeat_visitor
            UNION ALL
            SELECT CAST('2025-07-01' AS DATE), 'DW_Orlando', 'DW Orlando', 'DreamWorld_Parks', 'North_America',
                CAST(30.0 AS DOUBLE), 2, false",
        )
        .await?;
    engine
        .create_or_replace(
            "silver_fnb_sales",
            "SELECT CAST('2025-07-02' AS DATE) AS transaction_date, 'DW_Orlando' AS facility_id,
                'DW Orlando' AS facility_name, 'DreamWorld_Parks' AS partner_name, 'North_America' AS market,
                CAST(12.5 AS DOUBLE) AS total_amount",
        )
        .await?;
    engine
        .create_or_replace(
            "silver_retail_sales",
            "SELECT CAST('2025-07-01' AS DATE) AS transaction_date, 'DW_Orlando' AS facility_id,
                'DW Orlando' AS facility_name, 'DreamWorld_Parks' AS partner_name, 'North_America' AS market,
                CAST(20.0 AS DOUBLE) AS total_amount",
        )
        .await?;

    let rows = engine
        .create_or_replace("gold_daily_revenue", gold::DAILY_REVENUE)
        .await?;
    assert_eq!(rows, 2);

    let batches = engine
        .query(
            "SELECT CAST(total_visitors AS BIGINT), CAST(repeat_visitors AS BIGINT), CAST(total_revenue AS DOUBLE)
            FROM gold_daily_revenue ORDER BY transaction_date",
        )
        .await?;
    let visitors = batches[0].column(0).as_any().downcast_ref::<Int64Array>().unwrap();
    let repeat = batches[0].column(1).as_any().downcast_ref::<Int64Array>().unwrap();
    let total = batches[0].column(2).as_any().downcast_ref::<Float64Array>().unwrap();
    assert_eq!(visitors.value(0), 5);
    assert_eq!(repeat.value(0), 3);
    assert!((total.value(0) - 140.0).abs() < 1e-9);
    assert_eq!(visitors.value(1), 0);
    assert_eq!(repeat.value(1), 0);
    assert!((total.value(1) - 12.5).abs() < 1e-9);

    Ok(())
}

#[tokio::test]
async fn test_zero_visitors_yield_null_rates() -> anyhow::Result<()> {
    let engine = DataFusionEngine::new(None);
    engine
        .create_or_replace(
            "gold_daily_revenue",
            "SELECT 2025 AS year, 7 AS month, 'DreamWorld_Parks' AS partner_name, 'North_America' AS market,
                'DW_Orlando' AS facility_id, 0.0 AS ticket_revenue, 12.5 AS fnb_revenue, 0.0 AS retail_revenue,
                12.5 AS total_revenue, 0 AS total_visitors, 0 AS repeat_visitors
            UNION ALL
            SELECT 2025 AS year, 7 AS month, 'ToyLand_Adventures' AS partner_name, 'Europe' AS market,
                'TL_London' AS facility_id, 100.0 AS ticket_revenue, 0.0 AS fnb_revenue, 0.0 AS retail_revenue,
                100.0 AS total_revenue, 4 AS total_visitors, 1 AS repeat_visitors",
        )
        .await?;
    let rows = engine
        .create_or_replace(
            "gold_monthly_partner_performance",
            gold::MONTHLY_PARTNER_PERFORMANCE,
        )
        .await?;
    assert_eq!(rows, 2);

    let batches = engine
        .query(
            "SELECT per_capita_total, repeat_visit_rate FROM gold_monthly_partner_performance ORDER BY partner_name",
        )
        .await?;
    let per_capita = batches[0].column(0).as_any().downcast_ref::<Float64Array>().unwrap();
    let repeat = batches[0].column(1).as_any().downcast_ref::<Float64Array>().unwrap();
    assert!(per_capita.is_null(0));
    assert!(repeat.is_null(0));
    assert_eq!(per_capita.value(1), 25.0);
    assert_eq!(repeat.value(1), 25.0);

    Ok(())
}

#[tokio::test]
async fn test_forecast_per_group() -> anyhow::Result<()> {
    let engine = DataFusionEngine::new(None);
    engine
        .create_or_replace(
            "series",
            "SELECT CAST('2025-07-01' AS DATE) AS d, 'A' AS g, 10.0 AS v
            UNION ALL SELECT CAST('2025-07-02' AS DATE) AS d, 'A' AS g, 20.0 AS v
            UNION ALL SELECT CAST('2025-07-02' AS DATE) AS d, 'B' AS g, 5.0 AS v
            UNION ALL SELECT CAST('2025-07-02' AS DATE) AS d, CAST(NULL AS VARCHAR) AS g, 1.0 AS v",
        )
        .await?;

    let request = ForecastRequest {
        source: "series".to_string(),
        time_col: "d".to_string(),
        value_col: "v".to_string(),
        group_col: "g".to_string(),
        horizon_days: 3,
    };
    let rows = engine
        .forecast("series_forecast", &request, &TrendForecaster::new())
        .await?;
    assert_eq!(rows, 6);

    let batches = engine
        .query("SELECT g, v_forecast, v_upper, v_lower FROM series_forecast WHERE g = 'A' ORDER BY d")
        .await?;
    let values = batches[0].column(1).as_any().downcast_ref::<Float64Array>().unwrap();
    assert!((values.value(0) - 30.0).abs() < 1e-9);
    assert!((values.value(2) - 50.0).abs() < 1e-9);

    Ok(())
}
