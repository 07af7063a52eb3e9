use crate::core::estimate::Estimator;
use crate::core::pipeline::SUPPORTED_FORMATS;
use crate::core::rates::{CategoryRates, RateTable};
use crate::core::shipping::ShippingPolicy;
use crate::domain::model::CategoryId;
use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default)]
    pub shipping: ShippingPolicy,
    /// Keyed by category name (`electronics`, `clothing`, `tools`, `general`).
    #[serde(default)]
    pub categories: HashMap<String, CategoryOverride>,
    #[serde(default)]
    pub identifier: IdentifierConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Per-category overrides; unset fields keep the built-in value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryOverride {
    pub weight_kg: Option<f64>,
    pub volume_cbft: Option<f64>,
    pub duty_rate: Option<f64>,
    pub sales_tax_rate: Option<f64>,
}

impl CategoryOverride {
    fn apply(&self, rates: &mut CategoryRates) {
        if let Some(v) = self.weight_kg {
            rates.weight_kg = v;
        }
        if let Some(v) = self.volume_cbft {
            rates.volume_cbft = v;
        }
        if let Some(v) = self.duty_rate {
            rates.duty_rate = v;
        }
        if let Some(v) = self.sales_tax_rate {
            rates.sales_tax_rate = v;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentifierConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
    pub filename: Option<String>,
}

impl EstimatorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EstimateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER_AGENT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn rate_table(&self) -> RateTable {
        let mut table = RateTable::DEFAULT;
        for (name, overrides) in &self.categories {
            // 未知類別在 validate_config 中回報
            if let Some(category) = CategoryId::parse(name) {
                overrides.apply(table.rates_mut(category));
            }
        }
        table
    }

    pub fn estimator(&self) -> Estimator {
        Estimator::new(self.rate_table(), self.shipping)
    }

    pub fn validate_config(&self) -> Result<()> {
        for name in self.categories.keys() {
            if CategoryId::parse(name).is_none() {
                return Err(EstimateError::InvalidConfigValueError {
                    field: "categories".to_string(),
                    value: name.clone(),
                    reason: "Unknown category. Valid categories: electronics, clothing, tools, general"
                        .to_string(),
                });
            }
        }
        self.rate_table().validate()?;
        self.shipping.validate()?;

        if let Some(timeout) = self.identifier.timeout_seconds {
            validation::validate_positive_number("identifier.timeout_seconds", timeout, 1)?;
        }

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        if let Some(filename) = &self.output.filename {
            validation::validate_non_empty_string("output.filename", filename)?;
        }

        if let Some(formats) = &self.output.formats {
            validate_formats("output.formats", formats)?;
        }

        Ok(())
    }
}

pub fn validate_formats(field_name: &str, formats: &[String]) -> Result<()> {
    for format in formats {
        if !SUPPORTED_FORMATS.contains(&format.as_str()) {
            return Err(EstimateError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

impl Validate for EstimatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
