pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use adapters::{NamedProduct, TitleScraper};
pub use config::toml_config::EstimatorConfig;
pub use core::{
    customs::calc_customs,
    engine::EstimateEngine,
    estimate::{build_estimate, render_invoice, Estimator},
    pipeline::EstimatePipeline,
    rates::RateTable,
    resolver::{resolve, CategoryResolver, KeywordClassifier},
    shipping::{calc_shipping, ShippingPolicy},
};
pub use domain::model::{CategoryId, CategorySpec, CostEstimate, CustomsCharges, CustomsRate};
pub use utils::error::{EstimateError, Result};
