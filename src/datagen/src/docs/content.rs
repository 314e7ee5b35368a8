//! Static text of the business documentation set.

pub enum Block {
    Section {
        title: String,
        body: String,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        /// Relative column widths.
        widths: Vec<u32>,
    },
}

pub struct Document {
    pub file_name: &'static str,
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

fn section(title: &str, body: &str) -> Block {
    Block::Section {
        title: title.to_string(),
        body: body.trim_matches('\n').to_string(),
    }
}

pub fn documents() -> Vec<Document> {
    vec![
        business_glossary(),
        kpi_definitions(),
        data_dictionary(),
        analysis_guidelines(),
    ]
}

pub fn business_glossary() -> Document {
    let terms = [
        (
            "Ticket Revenue",
            "Total revenue generated from admission tickets sold across all facilities. Includes single-day tickets, multi-day passes, annual passes, and VIP experiences. Calculated as quantity x unit price after discounts.",
        ),
        (
            "F&B Revenue (Food & Beverage)",
            "Revenue from all food and beverage sales within facilities. Includes restaurants, quick-service outlets, snack carts, and beverage stations. Key metric for per-capita spending analysis.",
        ),
        (
            "Retail Revenue",
            "Revenue from merchandise sales including toys, apparel, accessories, and collectibles. Tracked by IP (Intellectual Property) for licensing performance analysis.",
        ),
        (
            "Per Capita Spending",
            "Average spending per visitor calculated as (Ticket + F&B + Retail Revenue) / Total Visitors. Critical metric for facility performance comparison.",
        ),
        (
            "IP (Intellectual Property)",
            "Licensed character brands and franchises (e.g., RoboBuddies, MagicPonies). Each IP has associated merchandise, themed areas, and attractions.",
        ),
        (
            "Facility",
            "A physical entertainment location operated by a partner, such as a theme park, an indoor center or a hybrid venue. Identified by a facility id that encodes the partner and the city.",
        ),
        (
            "Licensee/Partner",
            "Third-party operators licensed to operate entertainment facilities featuring company IPs. Partners submit monthly performance data.",
        ),
        (
            "Repeat Visitor Rate",
            "Percentage of visitors who have visited the same facility within the past 12 months. Indicator of customer loyalty and experience quality.",
        ),
        (
            "Conversion Rate",
            "Percentage of visitors who make a purchase (F&B or Retail). Calculated separately for each revenue stream.",
        ),
        (
            "Peak Hours",
            "Time periods with highest visitor attendance, typically 11am-2pm and 4pm-7pm. Used for staffing and inventory planning.",
        ),
        (
            "Market",
            "Geographic region for facility grouping: North America, Europe, Asia Pacific, Latin America. Used for regional performance comparison.",
        ),
        (
            "YoY (Year over Year)",
            "Comparison of current period metrics against the same period in the previous year. Primary method for growth analysis.",
        ),
        (
            "Like-for-Like (LFL)",
            "Comparison of facilities that have been operating for at least 12 months, excluding newly opened locations for fair comparison.",
        ),
    ];

    Document {
        file_name: "business_glossary.pdf",
        title: "Business Glossary & Definitions",
        blocks: terms.iter().map(|(t, d)| section(t, d)).collect(),
    }
}

pub fn kpi_definitions() -> Document {
    let kpis = [
        ("Total Revenue", "SUM(ticket_revenue + fnb_revenue + retail_revenue)", "Higher is better", "$XXM"),
        ("Total Attendance", "COUNT(DISTINCT visitor_id)", "Track vs capacity", "X.XM visitors"),
        ("Per Capita Total", "Total Revenue / Total Attendance", "> $50 target", "$XX.XX"),
        ("Per Capita F&B", "F&B Revenue / Total Attendance", "> $12 target", "$XX.XX"),
        ("Per Capita Retail", "Retail Revenue / Total Attendance", "> $8 target", "$XX.XX"),
        ("Ticket Yield", "Ticket Revenue / Total Attendance", "Track pricing power", "$XX.XX"),
        ("Repeat Visit Rate", "(Repeat Visitors / Total Visitors) x 100", "> 30% target", "XX%"),
        ("Conversion Rate F&B", "(F&B Transactions / Attendance) x 100", "> 60% target", "XX%"),
        ("Conversion Rate Retail", "(Retail Transactions / Attendance) x 100", "> 25% target", "XX%"),
        ("IP Revenue Share", "(IP Revenue / Total Retail) x 100", "Track IP performance", "XX%"),
    ];

    Document {
        file_name: "kpi_definitions.pdf",
        title: "Key Performance Indicators (KPIs)",
        blocks: vec![
            Block::Table {
                header: ["KPI Name", "Formula", "Target", "Format"]
                    .iter()
                    .map(|h| h.to_string())
                    .collect(),
                rows: kpis
                    .iter()
                    .map(|(name, formula, target, format)| {
                        vec![
                            name.to_string(),
                            formula.to_string(),
                            target.to_string(),
                            format.to_string(),
                        ]
                    })
                    .collect(),
                widths: vec![50, 70, 40, 30],
            },
            section("KPI Reporting Frequency", "
Daily: Attendance, Revenue totals, Per capita metrics
Weekly: Conversion rates, IP performance, Peak hour analysis
Monthly: YoY comparisons, Partner performance, Forecast accuracy
Quarterly: Market comparisons, Strategic KPIs, Executive dashboard
"),
        ],
    }
}

pub fn data_dictionary() -> Document {
    Document {
        file_name: "data_dictionary.pdf",
        title: "Data Dictionary",
        blocks: vec![
            section("Table: ticket_sales", "
Source: Partner monthly uploads
Grain: One row per ticket transaction
Refresh: Monthly batch

Columns:
- transaction_id (STRING): Unique identifier for ticket purchase
- transaction_date (DATE): Date of purchase
- facility_id (STRING): Facility where ticket was sold
- ip_name (STRING): Associated IP/franchise
- ticket_type (STRING): Adult, Child, Senior, Family_Pack, VIP, Annual_Pass
- quantity (INT): Number of tickets in transaction
- unit_price (DECIMAL): Price per ticket before discount
- discount_pct (INT): Discount percentage applied
- total_amount (DECIMAL): Final transaction amount
- customer_id (STRING): Customer identifier
- is_repeat_visitor (BOOLEAN): Whether customer visited before
- visit_hour (INT): Hour of day (9-20)
- channel (STRING): Purchase channel
"),
            section("Table: fnb_sales", "
Source: Partner monthly uploads
Grain: One row per F&B transaction
Refresh: Monthly batch

Columns:
- transaction_id (STRING): Unique identifier
- transaction_date (DATE): Date of purchase
- facility_id (STRING): Facility location
- item_name (STRING): Product name
- item_category (STRING): Main, Snack, Beverage, Dessert
- unit_price (DECIMAL): Item price
- quantity (INT): Quantity purchased
- total_amount (DECIMAL): Transaction total
- customer_id (STRING): Customer identifier
- outlet_id (STRING): F&B outlet identifier
- payment_method (STRING): Payment type
- transaction_hour (INT): Hour of purchase
"),
            section("Table: retail_sales", "
Source: Partner monthly uploads
Grain: One row per retail transaction
Refresh: Monthly batch

Columns:
- transaction_id (STRING): Unique identifier
- transaction_date (DATE): Date of purchase
- facility_id (STRING): Facility location
- ip_name (STRING): Associated IP/franchise
- product_name (STRING): Merchandise item name
- product_category (STRING): Toys, Apparel, Accessories, etc.
- unit_price (DECIMAL): Product price
- quantity (INT): Quantity purchased
- total_amount (DECIMAL): Transaction total
- customer_id (STRING): Customer identifier
- store_id (STRING): Retail store identifier
- is_online (BOOLEAN): Online vs in-store purchase
"),
        ],
    }
}

pub fn analysis_guidelines() -> Document {
    Document {
        file_name: "analysis_guidelines.pdf",
        title: "Analysis Guidelines & Best Practices",
        blocks: vec![
            section("1. Period Comparisons", "
When comparing performance across time periods:

Prior Year (PY): Compare current month/quarter to same period last year
- Use for: Seasonal businesses, YoY growth tracking
- Consideration: Account for calendar shifts (holidays, weekends)

Prior Month (PM): Compare to immediately preceding month
- Use for: Trend identification, short-term performance
- Consideration: Seasonal adjustments may be needed

Prior Quarter (PQ): Compare to previous quarter
- Use for: Quarterly business reviews, medium-term trends
- Consideration: Q4 vs Q1 comparisons need holiday context
"),
            section("2. Like-for-Like Analysis", "
For fair facility comparisons:

Same Market: Compare facilities in the same geographic market first
- North America facilities compared to North America peers
- Controls for economic conditions and seasonality

Similar Experience Type: Group by Theme_Park, Indoor_Center, or Hybrid
- Accounts for different operating models and cost structures

Maturity: Only compare facilities open 12+ months
- New facilities have ramp-up period affecting metrics
"),
            section("3. IP Performance Analysis", "
When analyzing Intellectual Property performance:

Revenue Attribution: Track retail sales by IP
- Top performers indicate licensing opportunities
- Underperformers may need marketing support

Cross-Facility Comparison: Same IP across different markets
- Identifies regional preferences
- Informs localization decisions

Product Mix: Analyze which product categories perform best per IP
- Toys vs Apparel vs Accessories breakdown
- Guides inventory and merchandising decisions
"),
            section("4. Peak Time Analysis", "
Understanding visitor patterns:

Daily Peaks: Typically 11am-2pm (lunch) and 4pm-7pm (after work/school)
- Staff scheduling optimization
- F&B inventory planning

Weekly Peaks: Weekends significantly higher than weekdays
- Pricing strategies (dynamic pricing)
- Special event scheduling

Seasonal Peaks: School holidays, summer, winter break
- Capacity management
- Marketing campaign timing
"),
        ],
    }
}
