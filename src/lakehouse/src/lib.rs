pub mod engine;
pub mod error;
pub mod forecast;
pub mod pipeline;
pub mod stages;

pub use engine::DataFusionEngine;
pub use engine::Engine;
pub use forecast::Forecaster;
pub use forecast::TrendForecaster;
pub use pipeline::Pipeline;
pub use pipeline::PipelineReport;
