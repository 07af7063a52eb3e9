pub mod customs;
pub mod engine;
pub mod estimate;
pub mod pipeline;
pub mod rates;
pub mod resolver;
pub mod shipping;

pub use crate::domain::model::{
    CategoryId, CategorySpec, CostEstimate, CustomsCharges, CustomsRate, EstimateReport,
};
pub use crate::domain::ports::{
    CategoryClassifier, ConfigProvider, Pipeline, ProductIdentifier, Storage,
};
pub use crate::utils::error::Result;
