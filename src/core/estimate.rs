use crate::core::rates::RateTable;
use crate::core::resolver::{CategoryResolver, KeywordClassifier};
use crate::core::shipping::ShippingPolicy;
use crate::domain::model::{CategoryId, CategorySpec, CostEstimate};
use crate::domain::ports::CategoryClassifier;
use crate::utils::error::Result;
use std::fmt::Write;

/// Resolver, shipping policy and customs tables composed into one calculator.
pub struct Estimator<C: CategoryClassifier = KeywordClassifier> {
    resolver: CategoryResolver<C>,
    policy: ShippingPolicy,
}

impl Estimator<KeywordClassifier> {
    pub fn new(table: RateTable, policy: ShippingPolicy) -> Self {
        Self::with_classifier(KeywordClassifier, table, policy)
    }
}

impl Default for Estimator<KeywordClassifier> {
    fn default() -> Self {
        Self::new(RateTable::DEFAULT, ShippingPolicy::DEFAULT)
    }
}

impl<C: CategoryClassifier> Estimator<C> {
    pub fn with_classifier(classifier: C, table: RateTable, policy: ShippingPolicy) -> Self {
        Self {
            resolver: CategoryResolver::with_classifier(classifier, table),
            policy,
        }
    }

    pub fn resolve(&self, product_name: &str) -> (CategoryId, CategorySpec) {
        self.resolver.resolve(product_name)
    }

    /// All-or-nothing: any invalid input fails the whole estimate.
    pub fn build_estimate(
        &self,
        product_name: &str,
        category: CategoryId,
        weight_kg: f64,
        volume_cbft: f64,
        declared_value: f64,
    ) -> Result<CostEstimate> {
        let shipping_cost = self.policy.cost(weight_kg, volume_cbft)?;
        let charges = self.resolver.table().customs(declared_value, category)?;

        let spec = CategorySpec {
            category,
            weight_kg,
            volume_cbft,
        };
        let estimate = CostEstimate::new(
            product_name.to_string(),
            spec,
            declared_value,
            shipping_cost,
            charges,
        );

        tracing::debug!(
            "Estimate for '{}': shipping={:.2} duty={:.2} ob_tax={:.2} total={:.2}",
            product_name,
            estimate.shipping_cost(),
            estimate.duty(),
            estimate.sales_tax(),
            estimate.total()
        );
        Ok(estimate)
    }

    /// Resolve the category, then build the estimate from its spec.
    pub fn estimate_for(&self, product_name: &str, declared_value: f64) -> Result<CostEstimate> {
        let (category, spec) = self.resolve(product_name);
        self.build_estimate(
            product_name,
            category,
            spec.weight_kg,
            spec.volume_cbft,
            declared_value,
        )
    }
}

/// Build an estimate with the built-in tables and shipping policy.
pub fn build_estimate(
    product_name: &str,
    category: CategoryId,
    weight_kg: f64,
    volume_cbft: f64,
    declared_value: f64,
) -> Result<CostEstimate> {
    Estimator::default().build_estimate(product_name, category, weight_kg, volume_cbft, declared_value)
}

fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn render_invoice(estimate: &CostEstimate) -> String {
    let mut out = String::new();
    // 寫入 String 不會失敗
    let _ = writeln!(out, "Product: {}", estimate.product_name());
    let _ = writeln!(out, "Category: {}", estimate.category());
    let _ = writeln!(
        out,
        "Weight: {} kg • Volume: {} cbft",
        format_quantity(estimate.weight_kg()),
        format_quantity(estimate.volume_cbft())
    );
    let _ = writeln!(out, "Declared Value: ${:.2}", estimate.declared_value());
    let _ = writeln!(out, "Shipping: ${:.2}", estimate.shipping_cost());
    let _ = writeln!(out, "Duty: ${:.2}", estimate.duty());
    let _ = writeln!(out, "OB Tax: ${:.2}", estimate.sales_tax());
    let _ = writeln!(out, "Total: ${:.2}", estimate.total());
    out
}

impl CostEstimate {
    pub fn invoice(&self) -> String {
        render_invoice(self)
    }
}
