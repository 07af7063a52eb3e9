use crate::core::estimate::Estimator;
use crate::core::{ConfigProvider, CostEstimate, Pipeline, ProductIdentifier, Storage};
use crate::utils::error::{EstimateError, Result};

pub const SUPPORTED_FORMATS: [&str; 3] = ["txt", "json", "csv"];

/// identify → estimate → deliver, with the invoice written through `Storage`.
pub struct EstimatePipeline<I: ProductIdentifier, S: Storage, C: ConfigProvider> {
    identifier: I,
    storage: S,
    config: C,
    estimator: Estimator,
}

impl<I: ProductIdentifier, S: Storage, C: ConfigProvider> EstimatePipeline<I, S, C> {
    pub fn new(identifier: I, storage: S, config: C) -> Self {
        Self::with_estimator(identifier, storage, config, Estimator::default())
    }

    pub fn with_estimator(identifier: I, storage: S, config: C, estimator: Estimator) -> Self {
        Self {
            identifier,
            storage,
            config,
            estimator,
        }
    }

    fn file_stem(&self, estimate: &CostEstimate) -> String {
        self.config
            .filename_template()
            .replace(
                "{timestamp}",
                &chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string(),
            )
            .replace("{category}", estimate.category().keyword())
    }
}

fn render_csv(estimate: &CostEstimate) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(estimate)?;
    writer
        .into_inner()
        .map_err(|e| EstimateError::IoError(e.into_error()))
}

fn render_format(format: &str, estimate: &CostEstimate) -> Result<Vec<u8>> {
    match format {
        "txt" => Ok(estimate.invoice().into_bytes()),
        "json" => Ok(serde_json::to_vec_pretty(estimate)?),
        "csv" => render_csv(estimate),
        other => Err(EstimateError::InvalidConfigValueError {
            field: "output.formats".to_string(),
            value: other.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                SUPPORTED_FORMATS.join(", ")
            ),
        }),
    }
}

#[async_trait::async_trait]
impl<I: ProductIdentifier, S: Storage, C: ConfigProvider> Pipeline for EstimatePipeline<I, S, C> {
    async fn identify(&self) -> Result<String> {
        tracing::debug!("Identifying product from {}", self.identifier.source_ref());
        self.identifier.identify().await
    }

    async fn estimate(&self, product_name: String) -> Result<CostEstimate> {
        self.estimator
            .estimate_for(&product_name, self.config.declared_value())
    }

    async fn deliver(&self, estimate: &CostEstimate) -> Result<Vec<String>> {
        let Some(output_path) = self.config.output_path() else {
            tracing::debug!("No output path configured, skipping invoice files");
            return Ok(Vec::new());
        };

        let stem = self.file_stem(estimate);
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let data = render_format(format, estimate)?;
            let filename = format!("{}.{}", stem, format);

            tracing::debug!("Writing {} ({} bytes) to storage", filename, data.len());
            self.storage.write_file(&filename, &data).await?;
            written.push(format!("{}/{}", output_path, filename));
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CategoryId;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        declared_value: f64,
        output_path: Option<String>,
        formats: Vec<String>,
        filename: String,
    }

    impl MockConfig {
        fn new(declared_value: f64, formats: &[&str]) -> Self {
            Self {
                declared_value,
                output_path: Some("test_output".to_string()),
                formats: formats.iter().map(|f| f.to_string()).collect(),
                filename: "invoice".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn declared_value(&self) -> f64 {
            self.declared_value
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn filename_template(&self) -> &str {
            &self.filename
        }
    }

    struct FixedName(&'static str);

    #[async_trait::async_trait]
    impl ProductIdentifier for FixedName {
        async fn identify(&self) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn source_ref(&self) -> String {
            "fixed".to_string()
        }
    }

    #[tokio::test]
    async fn test_estimate_uses_declared_value_from_config() {
        let pipeline = EstimatePipeline::new(
            FixedName("electronics case"),
            MockStorage::new(),
            MockConfig::new(100.0, &["txt"]),
        );

        let name = pipeline.identify().await.unwrap();
        let estimate = pipeline.estimate(name).await.unwrap();

        assert_eq!(estimate.category(), CategoryId::Electronics);
        assert_eq!(estimate.declared_value(), 100.0);
        assert!((estimate.duty() - 7.0).abs() < 1e-9);
        assert_eq!(estimate.shipping_cost(), 50.0);
    }

    #[tokio::test]
    async fn test_deliver_writes_all_formats() {
        let storage = MockStorage::new();
        let pipeline = EstimatePipeline::new(
            FixedName("mug"),
            storage.clone(),
            MockConfig::new(20.0, &["txt", "json", "csv"]),
        );

        let estimate = pipeline.estimate("mug".to_string()).await.unwrap();
        let written = pipeline.deliver(&estimate).await.unwrap();

        assert_eq!(
            written,
            vec![
                "test_output/invoice.txt",
                "test_output/invoice.json",
                "test_output/invoice.csv"
            ]
        );

        let txt = storage.get_file("invoice.txt").await.unwrap();
        assert_eq!(String::from_utf8(txt).unwrap(), estimate.invoice());

        let json: serde_json::Value =
            serde_json::from_slice(&storage.get_file("invoice.json").await.unwrap()).unwrap();
        assert_eq!(json["category"], "general");
        assert_eq!(json["product_name"], "mug");

        let csv_text = String::from_utf8(storage.get_file("invoice.csv").await.unwrap()).unwrap();
        let mut lines = csv_text.lines();
        assert_eq!(
            lines.next(),
            Some("product_name,category,weight_kg,volume_cbft,declared_value,shipping_cost,duty,sales_tax,total")
        );
        assert!(lines.next().unwrap().starts_with("mug,general,1.0,0.2,20.0,50.0,"));
    }

    #[tokio::test]
    async fn test_deliver_without_output_path_writes_nothing() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new(20.0, &["txt"]);
        config.output_path = None;
        let pipeline = EstimatePipeline::new(FixedName("mug"), storage.clone(), config);

        let estimate = pipeline.estimate("mug".to_string()).await.unwrap();
        let written = pipeline.deliver(&estimate).await.unwrap();

        assert!(written.is_empty());
        assert!(storage.files.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_filename_template_category_placeholder() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new(0.0, &["txt"]);
        config.filename = "quote-{category}".to_string();
        let pipeline = EstimatePipeline::new(FixedName("x"), storage.clone(), config);

        let estimate = pipeline.estimate("garden tools".to_string()).await.unwrap();
        pipeline.deliver(&estimate).await.unwrap();

        assert!(storage.get_file("quote-tools.txt").await.is_some());
    }

    #[tokio::test]
    async fn test_unknown_format_fails() {
        let pipeline = EstimatePipeline::new(
            FixedName("mug"),
            MockStorage::new(),
            MockConfig::new(0.0, &["pdf"]),
        );
        let estimate = pipeline.estimate("mug".to_string()).await.unwrap();
        let result = pipeline.deliver(&estimate).await;
        assert!(matches!(
            result,
            Err(EstimateError::InvalidConfigValueError { .. })
        ));
    }
}
