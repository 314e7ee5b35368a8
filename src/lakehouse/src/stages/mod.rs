use std::path::PathBuf;

use crate::forecast::ForecastRequest;

pub mod bronze;
pub mod gold;
pub mod silver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Layer {
    Bronze,
    Silver,
    Gold,
}

/// One table-producing statement.
#[derive(Debug, Clone)]
pub enum Step {
    ReadFiles {
        table: &'static str,
        pattern: PathBuf,
        provenance: bool,
    },
    Sql {
        table: &'static str,
        sql: &'static str,
    },
    Forecast {
        table: &'static str,
        request: ForecastRequest,
    },
}

impl Step {
    pub fn table(&self) -> &'static str {
        match self {
            Step::ReadFiles { table, .. }
            | Step::Sql { table, .. }
            | Step::Forecast { table, .. } => *table,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage {
    pub layer: Layer,
    pub steps: Vec<Step>,
}
