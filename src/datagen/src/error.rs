use std::result;

use common::error::CommonError;
use thiserror::Error;

pub type Result<T> = result::Result<T, DatagenError>;

#[derive(Error, Debug)]
pub enum DatagenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("PdfError: {0:?}")]
    PdfError(#[from] lopdf::Error),
    #[error("CommonError: {0:?}")]
    CommonError(#[from] CommonError),
    #[error("UnknownPartner: {0:?}")]
    UnknownPartner(String),
}
