use std::path::Path;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Volume {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Generation {
    pub year: i32,
    pub months: Vec<u32>,
    pub rows_per_file: usize,
    pub customer_universe: u32,
    pub customers: usize,
    pub start_date: String,
    pub end_date: String,
    pub active_campaigns: usize,
    /// Defaults to the number of CPUs.
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Partner {
    pub name: String,
    pub facilities: Vec<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Market {
    pub name: String,
    pub locations: Vec<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Universe {
    pub partners: Vec<Partner>,
    pub ips: Vec<String>,
    pub markets: Vec<Market>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Lakehouse {
    pub warehouse_path: Option<PathBuf>,
    pub forecast_horizon_days: u32,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Log {
    pub level: LogLevel,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub volume: Volume,
    pub generation: Generation,
    /// The built-in universe is used when omitted.
    pub universe: Option<Universe>,
    pub lakehouse: Lakehouse,
    pub log: Log,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

impl TryInto<common::config::Config> for Config {
    type Error = crate::error::Error;

    fn try_into(self) -> std::result::Result<common::config::Config, Self::Error> {
        let universe = match self.universe {
            Some(universe) => common::config::Universe {
                partners: universe
                    .partners
                    .into_iter()
                    .map(|p| common::config::Partner {
                        name: p.name,
                        facilities: p.facilities,
                    })
                    .collect(),
                ips: universe.ips,
                markets: universe
                    .markets
                    .into_iter()
                    .map(|m| common::config::Market {
                        name: m.name,
                        locations: m.locations,
                    })
                    .collect(),
            },
            None => common::config::Universe::default(),
        };

        let cfg = common::config::Config {
            volume: common::config::Volume {
                path: self.volume.path,
            },
            generation: common::config::Generation {
                year: self.generation.year,
                months: self.generation.months,
                rows_per_file: self.generation.rows_per_file,
                customer_universe: self.generation.customer_universe,
                customers: self.generation.customers,
                start_date: parse_date(&self.generation.start_date)?,
                end_date: parse_date(&self.generation.end_date)?,
                active_campaigns: self.generation.active_campaigns,
                workers: self.generation.workers.unwrap_or_else(num_cpus::get),
            },
            universe,
            lakehouse: common::config::Lakehouse {
                warehouse_path: self.lakehouse.warehouse_path,
                forecast_horizon_days: self.lakehouse.forecast_horizon_days,
            },
            log: common::config::Log {
                level: self.log.level.into(),
            },
        };
        cfg.validate()?;

        Ok(cfg)
    }
}

/// Reads a config file in any format the `config` crate recognizes by extension.
pub fn load(path: &Path) -> Result<common::config::Config> {
    let raw: Config = ::config::Config::builder()
        .add_source(::config::File::from(path.to_path_buf()))
        .build()?
        .try_deserialize()?;

    raw.try_into()
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use ::config::FileFormat;

    use super::*;
    use crate::error::Error;

    const MINIMAL: &str = r#"
[volume]
path = "/tmp/raw_files"

[generation]
year = 2025
months = [7, 8]
rows_per_file = 1000
customer_universe = 500000
customers = 100
start_date = "2025-07-01"
end_date = "2025-12-31"
active_campaigns = 3
workers = 4

[lakehouse]
forecast_horizon_days = 30

[log]
level = "debug"
"#;

    fn parse(s: &str) -> Config {
        ::config::Config::builder()
            .add_source(::config::File::from_str(s, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_minimal_config() {
        let raw = parse(MINIMAL);
        assert!(raw.universe.is_none());

        let cfg: common::config::Config = raw.try_into().unwrap();
        assert_eq!(cfg.generation.months, vec![7, 8]);
        assert_eq!(cfg.generation.workers, 4);
        assert_eq!(
            cfg.generation.start_date,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
        assert_eq!(cfg.universe.partners.len(), 5);
        assert_eq!(cfg.lakehouse.warehouse_path, None);
        assert_eq!(cfg.log.level, LevelFilter::DEBUG);
    }

    #[test]
    fn test_custom_universe() {
        let s = format!(
            "{MINIMAL}
[universe]
ips = [\"RoboBuddies\"]

[[universe.partners]]
name = \"Solo_Partner\"
facilities = [\"SP_Lima\"]

[[universe.markets]]
name = \"Latin_America\"
locations = [\"Lima\"]
"
        );
        let cfg: common::config::Config = parse(&s).try_into().unwrap();
        assert_eq!(cfg.universe.partners[0].facilities, vec!["SP_Lima"]);
        assert_eq!(cfg.universe.market_names(), vec!["Latin_America"]);
    }

    #[test]
    fn test_bad_date() {
        let raw = parse(&MINIMAL.replace("2025-12-31", "2025-13-01"));
        let res: Result<common::config::Config> = raw.try_into();
        assert!(matches!(res, Err(Error::DateParse(_))));
    }

    #[test]
    fn test_invalid_generation() {
        let raw = parse(&MINIMAL.replace("months = [7, 8]", "months = [0]"));
        let res: Result<common::config::Config> = raw.try_into();
        assert!(matches!(res, Err(Error::Common(_))));
    }
}
