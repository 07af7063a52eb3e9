use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of product categories.
///
/// The declared order of [`CategoryId::ALL`] is the order keyword matching walks;
/// `General` comes last because it is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Electronics,
    Clothing,
    Tools,
    General,
}

impl CategoryId {
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Electronics,
        CategoryId::Clothing,
        CategoryId::Tools,
        CategoryId::General,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            CategoryId::Electronics => "electronics",
            CategoryId::Clothing => "clothing",
            CategoryId::Tools => "tools",
            CategoryId::General => "general",
        }
    }

    /// Exact, case-insensitive name lookup.
    pub fn parse(name: &str) -> Option<CategoryId> {
        let normalized = name.trim().to_lowercase();
        CategoryId::ALL
            .into_iter()
            .find(|category| category.keyword() == normalized)
    }

    /// Like [`CategoryId::parse`], but unknown names map to `General`.
    pub fn from_name(name: &str) -> CategoryId {
        CategoryId::parse(name).unwrap_or_else(|| {
            tracing::debug!("Unknown category '{}', using general", name);
            CategoryId::General
        })
    }
}

impl From<&str> for CategoryId {
    fn from(name: &str) -> Self {
        CategoryId::from_name(name)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategorySpec {
    pub category: CategoryId,
    pub weight_kg: f64,
    pub volume_cbft: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CustomsRate {
    pub category: CategoryId,
    pub duty_rate: f64,
    pub sales_tax_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CustomsCharges {
    pub duty: f64,
    pub sales_tax: f64,
}

/// One cost breakdown. Built only by the estimator, read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    product_name: String,
    category: CategoryId,
    weight_kg: f64,
    volume_cbft: f64,
    declared_value: f64,
    shipping_cost: f64,
    duty: f64,
    sales_tax: f64,
    total: f64,
}

impl CostEstimate {
    pub(crate) fn new(
        product_name: String,
        spec: CategorySpec,
        declared_value: f64,
        shipping_cost: f64,
        charges: CustomsCharges,
    ) -> Self {
        Self {
            product_name,
            category: spec.category,
            weight_kg: spec.weight_kg,
            volume_cbft: spec.volume_cbft,
            declared_value,
            shipping_cost,
            duty: charges.duty,
            sales_tax: charges.sales_tax,
            total: shipping_cost + charges.duty + charges.sales_tax,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn volume_cbft(&self) -> f64 {
        self.volume_cbft
    }

    pub fn declared_value(&self) -> f64 {
        self.declared_value
    }

    pub fn shipping_cost(&self) -> f64 {
        self.shipping_cost
    }

    pub fn duty(&self) -> f64 {
        self.duty
    }

    pub fn sales_tax(&self) -> f64 {
        self.sales_tax
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// What one engine run hands back to the caller.
#[derive(Debug, Clone)]
pub struct EstimateReport {
    pub estimate: CostEstimate,
    pub invoice: String,
    pub written_files: Vec<String>,
}
