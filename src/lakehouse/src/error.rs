use std::io;
use std::result;

use arrow::error::ArrowError;
use datafusion::error::DataFusionError;
use datafusion::parquet::errors::ParquetError;
use thiserror::Error;

pub type Result<T> = result::Result<T, LakehouseError>;

#[derive(Error, Debug)]
pub enum LakehouseError {
    #[error("internal {0:?}")]
    Internal(String),
    #[error("no files matched {0:?}")]
    NoFilesMatched(String),
    #[error("pattern {0:?}")]
    Pattern(#[from] glob::PatternError),
    #[error("glob {0:?}")]
    Glob(#[from] glob::GlobError),
    #[error("datafusion {0:?}")]
    DataFusion(#[from] DataFusionError),
    #[error("arrow {0:?}")]
    Arrow(#[from] ArrowError),
    #[error("parquet {0:?}")]
    Parquet(#[from] ParquetError),
    #[error("io {0:?}")]
    StdIO(#[from] io::Error),
}
