pub mod config;
pub mod defaults;
pub mod error;
pub mod layout;
pub mod types;

pub use types::SalesKind;
pub use types::DECIMAL_SCALE;
pub use types::UNKNOWN;
