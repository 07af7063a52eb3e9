use crate::domain::model::{CategoryId, CostEstimate};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Maps free text to a category. Swappable without touching the cost logic.
pub trait CategoryClassifier: Send + Sync {
    fn classify(&self, name: &str) -> CategoryId;
}

/// Produces a free-text product name from some outside source (a web page, user input).
#[async_trait]
pub trait ProductIdentifier: Send + Sync {
    async fn identify(&self) -> Result<String>;

    /// Short description of where the name comes from, used in logs and errors.
    fn source_ref(&self) -> String;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn declared_value(&self) -> f64;
    fn output_path(&self) -> Option<&str>;
    fn output_formats(&self) -> &[String];
    fn filename_template(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn identify(&self) -> Result<String>;
    async fn estimate(&self, product_name: String) -> Result<CostEstimate>;
    async fn deliver(&self, estimate: &CostEstimate) -> Result<Vec<String>>;
}
