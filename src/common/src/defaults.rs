use chrono::NaiveDate;
use lazy_static::lazy_static;

pub const YEAR: i32 = 2025;
pub const MONTHS: [u32; 6] = [7, 8, 9, 10, 11, 12];
pub const ROWS_PER_FILE: usize = 170_000;
pub const CUSTOMER_UNIVERSE: u32 = 500_000;
pub const CUSTOMERS: usize = 10_000;
pub const ACTIVE_CAMPAIGNS: usize = 3;
pub const FORECAST_HORIZON_DAYS: u32 = 30;

pub const PARTNERS: &[(&str, &[&str])] = &[
    ("DreamWorld_Parks", &["DW_Orlando", "DW_California", "DW_Tokyo"]),
    ("FunZone_Entertainment", &["FZ_NewYork", "FZ_Chicago", "FZ_Miami"]),
    ("ToyLand_Adventures", &["TL_London", "TL_Paris", "TL_Berlin"]),
    ("PlayNation_Centers", &["PN_Sydney", "PN_Melbourne", "PN_Brisbane"]),
    ("KidVenture_Group", &["KV_Toronto", "KV_Vancouver", "KV_Montreal"]),
];

pub const IPS: &[&str] = &[
    "RoboBuddies",
    "MagicPonies",
    "SpaceRangers",
    "DinoSquad",
    "FairyKingdom",
    "SuperBlocks",
    "ActionHeroes",
];

// market -> facility name fragments
pub const MARKETS: &[(&str, &[&str])] = &[
    ("North_America", &[
        "Orlando",
        "California",
        "NewYork",
        "Chicago",
        "Miami",
        "Toronto",
        "Vancouver",
        "Montreal",
    ]),
    ("Europe", &["London", "Paris", "Berlin"]),
    ("Asia_Pacific", &["Tokyo", "Sydney", "Melbourne", "Brisbane"]),
    ("Latin_America", &["MexicoCity", "SaoPaulo", "BuenosAires"]),
];

lazy_static! {
    pub static ref START_DATE: NaiveDate = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    pub static ref END_DATE: NaiveDate = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
}
