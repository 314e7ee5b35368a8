pub const DECIMAL_SCALE: u32 = 2;

/// Sentinel for values that can't be derived from a facility identifier.
pub const UNKNOWN: &str = "Unknown";

pub const DIR_PARTNERS: &str = "partners";
pub const DIR_DIMENSIONS: &str = "dimensions";
pub const DIR_DOCUMENTATION: &str = "documentation";

pub const DIM_FACILITIES: &str = "dim_facilities";
pub const DIM_CAMPAIGNS: &str = "dim_campaigns";
pub const DIM_CUSTOMERS: &str = "dim_customers";
pub const DIM_DATES: &str = "dim_dates";
pub const DIM_PRODUCTS: &str = "dim_products";

pub const COLUMN_SOURCE_FILE: &str = "source_file";
pub const COLUMN_INGESTION_TIMESTAMP: &str = "ingestion_timestamp";

pub const TABLE_BRONZE_TICKET_SALES: &str = "bronze_ticket_sales";
pub const TABLE_BRONZE_FNB_SALES: &str = "bronze_fnb_sales";
pub const TABLE_BRONZE_RETAIL_SALES: &str = "bronze_retail_sales";
pub const TABLE_BRONZE_DIM_FACILITIES: &str = "bronze_dim_facilities";
pub const TABLE_BRONZE_DIM_CAMPAIGNS: &str = "bronze_dim_campaigns";
pub const TABLE_BRONZE_DIM_CUSTOMERS: &str = "bronze_dim_customers";
pub const TABLE_BRONZE_DIM_DATES: &str = "bronze_dim_dates";
pub const TABLE_BRONZE_DIM_PRODUCTS: &str = "bronze_dim_products";

pub const TABLE_SILVER_TICKET_SALES: &str = "silver_ticket_sales";
pub const TABLE_SILVER_FNB_SALES: &str = "silver_fnb_sales";
pub const TABLE_SILVER_RETAIL_SALES: &str = "silver_retail_sales";
pub const TABLE_SILVER_DIM_FACILITIES: &str = "silver_dim_facilities";
pub const TABLE_SILVER_DIM_CAMPAIGNS: &str = "silver_dim_campaigns";

pub const TABLE_GOLD_DAILY_REVENUE: &str = "gold_daily_revenue";
pub const TABLE_GOLD_MONTHLY_PARTNER_PERFORMANCE: &str = "gold_monthly_partner_performance";
pub const TABLE_GOLD_IP_PERFORMANCE: &str = "gold_ip_performance";
pub const TABLE_GOLD_FNB_ITEM_PERFORMANCE: &str = "gold_fnb_item_performance";
pub const TABLE_GOLD_HOURLY_PATTERNS: &str = "gold_hourly_patterns";
pub const TABLE_GOLD_DAILY_REVENUE_TS: &str = "gold_daily_revenue_ts";
pub const TABLE_GOLD_REVENUE_FORECAST: &str = "gold_revenue_forecast";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    enum_iterator::Sequence,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum SalesKind {
    Ticket,
    Fnb,
    Retail,
}

impl SalesKind {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SalesKind::Ticket => "TKT",
            SalesKind::Fnb => "FNB",
            SalesKind::Retail => "RTL",
        }
    }
}
