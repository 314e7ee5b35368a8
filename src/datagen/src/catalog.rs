//! Fixed value domains of the synthetic entertainment dataset. Prices are in cents.

pub const TICKET_TYPES: &[(&str, f64)] = &[
    ("Adult", 0.30),
    ("Child", 0.35),
    ("Senior", 0.10),
    ("Family_Pack", 0.15),
    ("VIP", 0.05),
    ("Annual_Pass", 0.05),
];
pub const TICKET_DISCOUNTS: &[(u32, f64)] = &[
    (0, 0.40),
    (5, 0.20),
    (10, 0.15),
    (15, 0.10),
    (20, 0.10),
    (25, 0.05),
];
pub const TICKET_CHANNELS: &[(&str, f64)] = &[
    ("Online", 0.45),
    ("Box_Office", 0.25),
    ("Mobile_App", 0.20),
    ("Partner_Site", 0.10),
];
pub const TICKET_QUANTITY: (u32, u32) = (1, 5);
pub const TICKET_PRICE_CENTS: (i64, i64) = (2_500, 15_000);
pub const TICKET_REPEAT_VISITOR_P: f64 = 0.35;
pub const TICKET_VISIT_HOURS: (u32, u32) = (9, 20);

pub const FNB_ITEMS: &[(&str, i64)] = &[
    ("Burger_Combo", 1299),
    ("Pizza_Slice", 699),
    ("Hot_Dog", 599),
    ("Chicken_Nuggets", 899),
    ("Ice_Cream", 499),
    ("Cotton_Candy", 399),
    ("Popcorn_Large", 799),
    ("Soda_Large", 399),
    ("Churros", 599),
    ("Pretzel", 499),
    ("Nachos", 999),
    ("Funnel_Cake", 899),
    ("Frozen_Lemonade", 599),
    ("Turkey_Leg", 1499),
    ("Fruit_Cup", 699),
];
pub const FNB_CATEGORIES: &[(&str, f64)] = &[
    ("Main", 0.30),
    ("Snack", 0.25),
    ("Beverage", 0.25),
    ("Dessert", 0.20),
];
pub const FNB_PAYMENT_METHODS: &[(&str, f64)] = &[
    ("Credit_Card", 0.40),
    ("Debit_Card", 0.25),
    ("Cash", 0.15),
    ("Mobile_Pay", 0.20),
];
pub const FNB_QUANTITY: (u32, u32) = (1, 4);
pub const FNB_OUTLETS: (u32, u32) = (1, 49);
pub const FNB_HOURS: (u32, u32) = (10, 21);

pub const RETAIL_ITEMS: &[(&str, i64)] = &[
    ("Plush_Toy_Small", 1499),
    ("Plush_Toy_Large", 2999),
    ("Action_Figure", 1999),
    ("T_Shirt_Kids", 2499),
    ("T_Shirt_Adult", 2999),
    ("Cap_Hat", 1999),
    ("Keychain", 999),
    ("Mug", 1499),
    ("Poster", 1299),
    ("Board_Game", 3499),
    ("Puzzle", 1999),
    ("Backpack", 3999),
    ("Water_Bottle", 1699),
    ("Lunchbox", 2299),
    ("Blanket", 4499),
];
pub const RETAIL_CATEGORIES: &[&str] = &["Toys", "Apparel", "Accessories", "Collectibles", "Home"];
pub const RETAIL_QUANTITY: (u32, u32) = (1, 3);
pub const RETAIL_STORES: (u32, u32) = (1, 29);
pub const RETAIL_ONLINE_P: f64 = 0.20;

/// Number of days sampled per month, counted from the 1st. Days 29-31 never occur.
pub const DAYS_PER_MONTH: u32 = 28;

pub const EXPERIENCE_TYPES: &[&str] = &["Theme_Park", "Indoor_Center", "Hybrid"];
pub const FACILITY_CAPACITY: (u32, u32) = (5_000, 25_000);
pub const FACILITY_OPENED_YEARS: (u32, u32) = (15, 23);
pub const FACILITY_OPENED_MONTHS: (u32, u32) = (1, 9);

pub const CAMPAIGN_NAMES: &[&str] = &[
    "Summer_Splash",
    "Back_to_School",
    "Halloween_Spooktacular",
    "Holiday_Magic",
    "Spring_Break_Blast",
    "Birthday_Bonanza",
];
pub const CAMPAIGN_DAYS: i64 = 30;
pub const CAMPAIGN_BUDGET: (u32, u32) = (100_000, 500_000);
pub const CAMPAIGN_CHANNELS: &[&str] = &["TV", "Digital", "Social", "Print", "Multi-Channel"];
pub const CAMPAIGN_DEMOGRAPHICS: &[&str] = &["Families", "Kids_5-12", "Teens", "All_Ages"];

// (name, category, ip)
pub const PRODUCTS: &[(&str, &str, &str)] = &[
    ("Plush_Toy_Small", "Toys", "RoboBuddies"),
    ("Plush_Toy_Large", "Toys", "MagicPonies"),
    ("Action_Figure", "Toys", "SpaceRangers"),
    ("T_Shirt_Kids", "Apparel", "DinoSquad"),
    ("T_Shirt_Adult", "Apparel", "SuperBlocks"),
    ("Cap_Hat", "Accessories", "ActionHeroes"),
    ("Keychain", "Accessories", "FairyKingdom"),
    ("Mug", "Home", "RoboBuddies"),
    ("Board_Game", "Toys", "SpaceRangers"),
    ("Backpack", "Accessories", "DinoSquad"),
];
pub const PRODUCT_BASE_PRICE_CENTS: (i64, i64) = (999, 4_999);
pub const PRODUCT_COST_CENTS: (i64, i64) = (399, 1_999);
pub const PRODUCT_SUPPLIERS: &[&str] = &["ToyMaster_Inc", "GlobalGoods", "QualityPlush", "ApparelPro"];
pub const PRODUCT_LAUNCH_DATE: (i32, u32, u32) = (2024, 1, 15);

pub const CUSTOMER_SEGMENTS: &[&str] = &[
    "Frequent_Visitor",
    "Annual_Pass",
    "Occasional",
    "First_Time",
    "VIP",
];
pub const CUSTOMER_AGE_GROUPS: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55+"];
pub const CUSTOMER_FAMILY_SIZE: (u32, u32) = (1, 6);
pub const CUSTOMER_SIGNUP_DAYS_BEFORE: (i64, i64) = (30, 730);
pub const CUSTOMER_LOYALTY_TIERS: &[&str] = &["Bronze", "Silver", "Gold", "Platinum"];

pub const HOLIDAYS: &[(u32, u32)] = &[(12, 24), (12, 25), (12, 31)];
