use crate::core::rates::RateTable;
use crate::domain::model::{CategoryId, CustomsCharges};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative;

impl RateTable {
    /// Duty on the declared value, then sales tax on the duty-inclusive value.
    pub fn customs(&self, declared_value: f64, category: CategoryId) -> Result<CustomsCharges> {
        let declared_value = validate_non_negative("declared_value", declared_value)?;
        let rate = self.customs_rate(category);

        let duty = declared_value * rate.duty_rate;
        // OB 稅基包含關稅
        let sales_tax = (declared_value + duty) * rate.sales_tax_rate;

        Ok(CustomsCharges { duty, sales_tax })
    }
}

/// Customs charges under the built-in rate table.
///
/// `category` may be a [`CategoryId`] or a category name; unknown names use the general rate.
pub fn calc_customs(declared_value: f64, category: impl Into<CategoryId>) -> Result<CustomsCharges> {
    RateTable::DEFAULT.customs(declared_value, category.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EstimateError;

    #[test]
    fn test_tax_is_charged_on_duty_inclusive_value() {
        let charges = calc_customs(1000.0, "tools").unwrap();
        assert!((charges.duty - 150.0).abs() < 1e-9);
        assert!((charges.sales_tax - 69.0).abs() < 1e-9);
    }

    #[test]
    fn test_electronics_rates() {
        let charges = calc_customs(200.0, CategoryId::Electronics).unwrap();
        assert!((charges.duty - 14.0).abs() < 1e-9);
        assert!((charges.sales_tax - 12.84).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_category_name_uses_general_rate() {
        let unknown = calc_customs(500.0, "furniture").unwrap();
        let general = calc_customs(500.0, CategoryId::General).unwrap();
        assert_eq!(unknown, general);
        assert!((general.duty - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_declared_value_has_no_charges() {
        let charges = calc_customs(0.0, "clothing").unwrap();
        assert_eq!(charges.duty, 0.0);
        assert_eq!(charges.sales_tax, 0.0);
    }

    #[test]
    fn test_negative_declared_value_is_rejected() {
        let result = calc_customs(-5.0, "general");
        assert!(matches!(result, Err(EstimateError::InvalidInput { ref field, .. }) if field == "declared_value"));
    }

    #[test]
    fn test_custom_table_rates_apply() {
        let mut table = RateTable::DEFAULT;
        table.general.duty_rate = 0.0;
        table.general.sales_tax_rate = 0.1;
        let charges = table.customs(100.0, CategoryId::General).unwrap();
        assert_eq!(charges.duty, 0.0);
        assert!((charges.sales_tax - 10.0).abs() < 1e-9);
    }
}
