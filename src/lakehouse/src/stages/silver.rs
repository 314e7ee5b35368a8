use common::types::TABLE_SILVER_DIM_CAMPAIGNS;
use common::types::TABLE_SILVER_DIM_FACILITIES;
use common::types::TABLE_SILVER_FNB_SALES;
use common::types::TABLE_SILVER_RETAIL_SALES;
use common::types::TABLE_SILVER_TICKET_SALES;

use crate::stages::Layer;
use crate::stages::Stage;
use crate::stages::Step;

// Facts keep every row: a facility missing from the dimension leaves the enrichment columns null.

pub const TICKET_SALES: &str = "
SELECT
    t.transaction_id,
    CAST(t.transaction_date AS DATE) AS transaction_date,
    t.facility_id,
    f.facility_name,
    f.partner_name,
    f.market,
    f.experience_type,
    t.ip_name,
    t.ticket_type,
    CAST(t.quantity AS INT) AS quantity,
    CAST(t.unit_price AS DECIMAL(10, 2)) AS unit_price,
    CAST(t.discount_pct AS INT) AS discount_pct,
    CAST(t.total_amount AS DECIMAL(10, 2)) AS total_amount,
    t.customer_id,
    CAST(t.is_repeat_visitor AS BOOLEAN) AS is_repeat_visitor,
    CAST(t.visit_hour AS INT) AS visit_hour,
    t.channel,
    CAST(date_part('year', CAST(t.transaction_date AS DATE)) AS INT) AS year,
    CAST(date_part('month', CAST(t.transaction_date AS DATE)) AS INT) AS month,
    CAST(date_part('quarter', CAST(t.transaction_date AS DATE)) AS INT) AS quarter
FROM bronze_ticket_sales t
LEFT JOIN bronze_dim_facilities f ON t.facility_id = f.facility_id
";

pub const FNB_SALES: &str = "
SELECT
    t.transaction_id,
    CAST(t.transaction_date AS DATE) AS transaction_date,
    t.facility_id,
    f.facility_name,
    f.partner_name,
    f.market,
    t.item_name,
    t.item_category,
    CAST(t.unit_price AS DECIMAL(10, 2)) AS unit_price,
    CAST(t.quantity AS INT) AS quantity,
    CAST(t.total_amount AS DECIMAL(10, 2)) AS total_amount,
    t.customer_id,
    t.outlet_id,
    t.payment_method,
    CAST(t.transaction_hour AS INT) AS transaction_hour,
    CAST(date_part('year', CAST(t.transaction_date AS DATE)) AS INT) AS year,
    CAST(date_part('month', CAST(t.transaction_date AS DATE)) AS INT) AS month
FROM bronze_fnb_sales t
LEFT JOIN bronze_dim_facilities f ON t.facility_id = f.facility_id
";

pub const RETAIL_SALES: &str = "
SELECT
    t.transaction_id,
    CAST(t.transaction_date AS DATE) AS transaction_date,
    t.facility_id,
    f.facility_name,
    f.partner_name,
    f.market,
    t.ip_name,
    t.product_name,
    t.product_category,
    CAST(t.unit_price AS DECIMAL(10, 2)) AS unit_price,
    CAST(t.quantity AS INT) AS quantity,
    CAST(t.total_amount AS DECIMAL(10, 2)) AS total_amount,
    t.customer_id,
    t.store_id,
    CAST(t.is_online AS BOOLEAN) AS is_online,
    CAST(date_part('year', CAST(t.transaction_date AS DATE)) AS INT) AS year,
    CAST(date_part('month', CAST(t.transaction_date AS DATE)) AS INT) AS month
FROM bronze_retail_sales t
LEFT JOIN bronze_dim_facilities f ON t.facility_id = f.facility_id
";

pub const DIM_FACILITIES: &str = "
SELECT
    facility_id,
    facility_name,
    partner_name,
    market,
    country,
    CAST(capacity AS INT) AS capacity,
    CAST(opened_date AS DATE) AS opened_date,
    experience_type
FROM bronze_dim_facilities
";

pub const DIM_CAMPAIGNS: &str = "
SELECT
    campaign_id,
    campaign_name,
    CAST(start_date AS DATE) AS start_date,
    CAST(end_date AS DATE) AS end_date,
    CAST(budget_usd AS INT) AS budget_usd,
    channel,
    target_demographic,
    CAST(is_active AS BOOLEAN) AS is_active
FROM bronze_dim_campaigns
";

/// Typed and enriched with facility attributes and calendar columns.
pub fn stage() -> Stage {
    let steps = [
        (TABLE_SILVER_TICKET_SALES, TICKET_SALES),
        (TABLE_SILVER_FNB_SALES, FNB_SALES),
        (TABLE_SILVER_RETAIL_SALES, RETAIL_SALES),
        (TABLE_SILVER_DIM_FACILITIES, DIM_FACILITIES),
        (TABLE_SILVER_DIM_CAMPAIGNS, DIM_CAMPAIGNS),
    ]
    .into_iter()
    .map(|(table, sql)| Step::Sql { table, sql })
    .collect();

    Stage {
        layer: Layer::Silver,
        steps,
    }
}
