pub mod aggregator;
pub mod etl;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod stages;

pub use crate::domain::model::{AggregatedCustomer, CustomerRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
