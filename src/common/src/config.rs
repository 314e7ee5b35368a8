use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::level_filters::LevelFilter;

use crate::defaults;
use crate::error::CommonError;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Partner {
    pub name: String,
    pub facilities: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Market {
    pub name: String,
    /// Facility name fragments that place a facility in this market.
    pub locations: Vec<String>,
}

/// The closed world the generators sample from.
#[derive(Debug, Clone)]
pub struct Universe {
    pub partners: Vec<Partner>,
    pub ips: Vec<String>,
    pub markets: Vec<Market>,
}

impl Universe {
    pub fn partner(&self, name: &str) -> Option<&Partner> {
        self.partners.iter().find(|p| p.name == name)
    }

    pub fn market_names(&self) -> Vec<String> {
        self.markets.iter().map(|m| m.name.clone()).collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.partners.is_empty() {
            return Err(CommonError::BadConfig("at least one partner is required".to_string()));
        }
        if self.ips.is_empty() {
            return Err(CommonError::BadConfig("at least one IP is required".to_string()));
        }
        if self.markets.is_empty() {
            return Err(CommonError::BadConfig("at least one market is required".to_string()));
        }

        let mut names = HashSet::new();
        let mut seen = HashSet::new();
        for partner in &self.partners {
            if !names.insert(partner.name.as_str()) {
                return Err(CommonError::BadConfig(format!(
                    "partner {} is listed more than once",
                    partner.name
                )));
            }
            if partner.facilities.is_empty() {
                return Err(CommonError::BadConfig(format!(
                    "partner {} has no facilities",
                    partner.name
                )));
            }
            for facility in &partner.facilities {
                if !seen.insert(facility.as_str()) {
                    return Err(CommonError::BadConfig(format!(
                        "facility {facility} belongs to more than one partner"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for Universe {
    fn default() -> Self {
        Universe {
            partners: defaults::PARTNERS
                .iter()
                .map(|(name, facilities)| Partner {
                    name: name.to_string(),
                    facilities: facilities.iter().map(|f| f.to_string()).collect(),
                })
                .collect(),
            ips: defaults::IPS.iter().map(|v| v.to_string()).collect(),
            markets: defaults::MARKETS
                .iter()
                .map(|(name, locations)| Market {
                    name: name.to_string(),
                    locations: locations.iter().map(|l| l.to_string()).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub year: i32,
    pub months: Vec<u32>,
    pub rows_per_file: usize,
    /// Customer ids on transactions are drawn from `1..customer_universe`.
    pub customer_universe: u32,
    /// Rows in the customer dimension.
    pub customers: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active_campaigns: usize,
    pub workers: usize,
}

impl Generation {
    pub fn validate(&self) -> Result<()> {
        if self.months.is_empty() {
            return Err(CommonError::BadConfig("no months to generate".to_string()));
        }
        if let Some(m) = self.months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(CommonError::BadConfig(format!("invalid month {m}")));
        }
        let mut months = HashSet::new();
        if let Some(m) = self.months.iter().find(|m| !months.insert(**m)) {
            return Err(CommonError::BadConfig(format!("month {m} is listed more than once")));
        }
        if self.rows_per_file == 0 {
            return Err(CommonError::BadConfig("rows per file must be positive".to_string()));
        }
        if self.customer_universe < 2 {
            return Err(CommonError::BadConfig(
                "customer universe must hold at least one id".to_string(),
            ));
        }
        if self.start_date > self.end_date {
            return Err(CommonError::BadConfig(format!(
                "start date {} is after end date {}",
                self.start_date, self.end_date
            )));
        }
        if self.workers == 0 {
            return Err(CommonError::BadConfig("at least one worker is required".to_string()));
        }

        Ok(())
    }
}

impl Default for Generation {
    fn default() -> Self {
        Generation {
            year: defaults::YEAR,
            months: defaults::MONTHS.to_vec(),
            rows_per_file: defaults::ROWS_PER_FILE,
            customer_universe: defaults::CUSTOMER_UNIVERSE,
            customers: defaults::CUSTOMERS,
            start_date: *defaults::START_DATE,
            end_date: *defaults::END_DATE,
            active_campaigns: defaults::ACTIVE_CAMPAIGNS,
            workers: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Volume {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Lakehouse {
    pub warehouse_path: Option<PathBuf>,
    pub forecast_horizon_days: u32,
}

impl Default for Lakehouse {
    fn default() -> Self {
        Lakehouse {
            warehouse_path: None,
            forecast_horizon_days: defaults::FORECAST_HORIZON_DAYS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub volume: Volume,
    pub generation: Generation,
    pub universe: Universe,
    pub lakehouse: Lakehouse,
    pub log: Log,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.universe.validate()?;
        self.generation.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            volume: Volume {
                path: PathBuf::from("raw_files"),
            },
            generation: Generation::default(),
            universe: Universe::default(),
            lakehouse: Lakehouse::default(),
            log: Log {
                level: LevelFilter::INFO,
            },
        }
    }
}
