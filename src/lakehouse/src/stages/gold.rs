use common::types::TABLE_GOLD_DAILY_REVENUE;
use common::types::TABLE_GOLD_DAILY_REVENUE_TS;
use common::types::TABLE_GOLD_FNB_ITEM_PERFORMANCE;
use common::types::TABLE_GOLD_HOURLY_PATTERNS;
use common::types::TABLE_GOLD_IP_PERFORMANCE;
use common::types::TABLE_GOLD_MONTHLY_PARTNER_PERFORMANCE;
use common::types::TABLE_GOLD_REVENUE_FORECAST;

use crate::forecast::ForecastRequest;
use crate::stages::Layer;
use crate::stages::Stage;
use crate::stages::Step;

/// Three revenue streams per (date, facility). A facility-day present in any stream yields a
/// row, absent streams count as zero.
pub const DAILY_REVENUE: &str = "
SELECT
    COALESCE(t.transaction_date, f.transaction_date, r.transaction_date) AS transaction_date,
    COALESCE(t.facility_id, f.facility_id, r.facility_id) AS facility_id,
    COALESCE(t.facility_name, f.facility_name, r.facility_name) AS facility_name,
    COALESCE(t.partner_name, f.partner_name, r.partner_name) AS partner_name,
    COALESCE(t.market, f.market, r.market) AS market,
    COALESCE(t.ticket_revenue, 0) AS ticket_revenue,
    COALESCE(t.ticket_transactions, 0) AS ticket_transactions,
    COALESCE(t.total_visitors, 0) AS total_visitors,
    COALESCE(t.repeat_visitors, 0) AS repeat_visitors,
    COALESCE(f.fnb_revenue, 0) AS fnb_revenue,
    COALESCE(f.fnb_transactions, 0) AS fnb_transactions,
    COALESCE(r.retail_revenue, 0) AS retail_revenue,
    COALESCE(r.retail_transactions, 0) AS retail_transactions,
    COALESCE(t.ticket_revenue, 0) + COALESCE(f.fnb_revenue, 0) + COALESCE(r.retail_revenue, 0) AS total_revenue,
    CAST(date_part('year', COALESCE(t.transaction_date, f.transaction_date, r.transaction_date)) AS INT) AS year,
    CAST(date_part('month', COALESCE(t.transaction_date, f.transaction_date, r.transaction_date)) AS INT) AS month
FROM (
    SELECT
        transaction_date, facility_id, facility_name, partner_name, market,
        SUM(total_amount) AS ticket_revenue,
        COUNT(*) AS ticket_transactions,
        SUM(quantity) AS total_visitors,
        SUM(repeat_quantity) AS repeat_visitors
    FROM (
        SELECT *, CASE WHEN is_repeat_visitor THEN quantity ELSE 0 END AS repeat_quantity
        FROM silver_ticket_sales
    ) s
    GROUP BY transaction_date, facility_id, facility_name, partner_name, market
) t
FULL OUTER JOIN (
    SELECT
        transaction_date, facility_id, facility_name, partner_name, market,
        SUM(total_amount) AS fnb_revenue,
        COUNT(*) AS fnb_transactions
    FROM silver_fnb_sales
    GROUP BY transaction_date, facility_id, facility_name, partner_name, market
) f ON t.transaction_date = f.transaction_date AND t.facility_id = f.facility_id
FULL OUTER JOIN (
    SELECT
        transaction_date, facility_id, facility_name, partner_name, market,
        SUM(total_amount) AS retail_revenue,
        COUNT(*) AS retail_transactions
    FROM silver_retail_sales
    GROUP BY transaction_date, facility_id, facility_name, partner_name, market
) r ON COALESCE(t.transaction_date, f.transaction_date) = r.transaction_date
    AND COALESCE(t.facility_id, f.facility_id) = r.facility_id
";

/// Rates and per-capita metrics are null when a group had no visitors.
pub const MONTHLY_PARTNER_PERFORMANCE: &str = "
SELECT
    year,
    month,
    partner_name,
    market,
    SUM(ticket_revenue) AS ticket_revenue,
    SUM(fnb_revenue) AS fnb_revenue,
    SUM(retail_revenue) AS retail_revenue,
    SUM(total_revenue) AS total_revenue,
    SUM(total_visitors) AS total_visitors,
    SUM(repeat_visitors) AS repeat_visitors,
    ROUND(CAST(SUM(repeat_visitors) AS DOUBLE) * 100.0 / NULLIF(SUM(total_visitors), 0), 2) AS repeat_visit_rate,
    ROUND(CAST(SUM(total_revenue) AS DOUBLE) / NULLIF(SUM(total_visitors), 0), 2) AS per_capita_total,
    ROUND(CAST(SUM(fnb_revenue) AS DOUBLE) / NULLIF(SUM(total_visitors), 0), 2) AS per_capita_fnb,
    ROUND(CAST(SUM(retail_revenue) AS DOUBLE) / NULLIF(SUM(total_visitors), 0), 2) AS per_capita_retail,
    COUNT(DISTINCT facility_id) AS facility_count
FROM gold_daily_revenue
GROUP BY year, month, partner_name, market
ORDER BY year, month, partner_name
";

pub const IP_PERFORMANCE: &str = "
SELECT
    ip_name,
    market,
    year,
    month,
    SUM(total_amount) AS retail_revenue,
    COUNT(*) AS transactions,
    SUM(quantity) AS units_sold,
    ROUND(AVG(CAST(unit_price AS DOUBLE)), 2) AS avg_unit_price,
    COUNT(DISTINCT facility_id) AS facilities_with_sales
FROM silver_retail_sales
GROUP BY ip_name, market, year, month
ORDER BY year, month, retail_revenue DESC
";

pub const FNB_ITEM_PERFORMANCE: &str = "
SELECT
    item_name,
    item_category,
    market,
    year,
    month,
    SUM(total_amount) AS revenue,
    COUNT(*) AS transactions,
    SUM(quantity) AS units_sold,
    ROUND(AVG(CAST(unit_price AS DOUBLE)), 2) AS avg_price,
    COUNT(DISTINCT facility_id) AS facilities_with_sales
FROM silver_fnb_sales
GROUP BY item_name, item_category, market, year, month
ORDER BY year, month, revenue DESC
";

/// day_of_week runs from 1 (Sunday) to 7 (Saturday).
pub const HOURLY_PATTERNS: &str = "
SELECT
    facility_id,
    facility_name,
    partner_name,
    market,
    visit_hour,
    day_of_week,
    CASE WHEN day_of_week IN (1, 7) THEN 'Weekend' ELSE 'Weekday' END AS day_type,
    year,
    month,
    COUNT(*) AS transactions,
    SUM(quantity) AS visitors,
    SUM(total_amount) AS revenue
FROM (
    SELECT
        *,
        CAST(date_part('dow', transaction_date) + 1 AS INT) AS day_of_week
    FROM silver_ticket_sales
) t
GROUP BY facility_id, facility_name, partner_name, market, visit_hour, day_of_week, year, month
ORDER BY facility_id, visit_hour
";

pub const DAILY_REVENUE_TS: &str = "
SELECT
    transaction_date,
    partner_name,
    SUM(total_revenue) AS total_revenue
FROM gold_daily_revenue
GROUP BY transaction_date, partner_name
ORDER BY partner_name, transaction_date
";

pub fn revenue_forecast_request(horizon_days: u32) -> ForecastRequest {
    ForecastRequest {
        source: TABLE_GOLD_DAILY_REVENUE_TS.to_string(),
        time_col: "transaction_date".to_string(),
        value_col: "total_revenue".to_string(),
        group_col: "partner_name".to_string(),
        horizon_days,
    }
}

/// Business aggregates and the per-partner revenue forecast.
pub fn stage(horizon_days: u32) -> Stage {
    let mut steps: Vec<Step> = [
        (TABLE_GOLD_DAILY_REVENUE, DAILY_REVENUE),
        (TABLE_GOLD_MONTHLY_PARTNER_PERFORMANCE, MONTHLY_PARTNER_PERFORMANCE),
        (TABLE_GOLD_IP_PERFORMANCE, IP_PERFORMANCE),
        (TABLE_GOLD_FNB_ITEM_PERFORMANCE, FNB_ITEM_PERFORMANCE),
        (TABLE_GOLD_HOURLY_PATTERNS, HOURLY_PATTERNS),
        (TABLE_GOLD_DAILY_REVENUE_TS, DAILY_REVENUE_TS),
    ]
    .into_iter()
    .map(|(table, sql)| Step::Sql { table, sql })
    .collect();
    steps.push(Step::Forecast {
        table: TABLE_GOLD_REVENUE_FORECAST,
        request: revenue_forecast_request(horizon_days),
    });

    Stage {
        layer: Layer::Gold,
        steps,
    }
}
