use std::result;

use common::error::CommonError;
use datagen::error::DatagenError;
use lakehouse::error::LakehouseError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("Common: {0:?}")]
    Common(#[from] CommonError),
    #[error("Datagen: {0:?}")]
    Datagen(#[from] DatagenError),
    #[error("Lakehouse: {0:?}")]
    Lakehouse(#[from] LakehouseError),
    #[error("Config: {0:?}")]
    Config(#[from] ::config::ConfigError),
    #[error("DateParse: {0:?}")]
    DateParse(#[from] chrono::ParseError),
    #[error("Arrow: {0:?}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("ProgressTemplate: {0:?}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
}
