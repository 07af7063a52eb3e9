use crate::domain::model::{CategoryId, CategorySpec, CustomsRate};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative_setting, validate_range};
use serde::{Deserialize, Serialize};

/// Physical spec and customs rates for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryRates {
    pub weight_kg: f64,
    pub volume_cbft: f64,
    pub duty_rate: f64,
    pub sales_tax_rate: f64,
}

/// Static per-category tables. One named field per category, so every lookup is total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub electronics: CategoryRates,
    pub clothing: CategoryRates,
    pub tools: CategoryRates,
    pub general: CategoryRates,
}

impl RateTable {
    pub const DEFAULT: RateTable = RateTable {
        electronics: CategoryRates {
            weight_kg: 2.5,
            volume_cbft: 0.4,
            duty_rate: 0.07,
            sales_tax_rate: 0.06,
        },
        clothing: CategoryRates {
            weight_kg: 1.0,
            volume_cbft: 0.25,
            duty_rate: 0.10,
            sales_tax_rate: 0.06,
        },
        tools: CategoryRates {
            weight_kg: 3.0,
            volume_cbft: 0.6,
            duty_rate: 0.15,
            sales_tax_rate: 0.06,
        },
        general: CategoryRates {
            weight_kg: 1.0,
            volume_cbft: 0.2,
            duty_rate: 0.06,
            sales_tax_rate: 0.06,
        },
    };

    pub fn rates(&self, category: CategoryId) -> &CategoryRates {
        match category {
            CategoryId::Electronics => &self.electronics,
            CategoryId::Clothing => &self.clothing,
            CategoryId::Tools => &self.tools,
            CategoryId::General => &self.general,
        }
    }

    pub(crate) fn rates_mut(&mut self, category: CategoryId) -> &mut CategoryRates {
        match category {
            CategoryId::Electronics => &mut self.electronics,
            CategoryId::Clothing => &mut self.clothing,
            CategoryId::Tools => &mut self.tools,
            CategoryId::General => &mut self.general,
        }
    }

    pub fn spec(&self, category: CategoryId) -> CategorySpec {
        let rates = self.rates(category);
        CategorySpec {
            category,
            weight_kg: rates.weight_kg,
            volume_cbft: rates.volume_cbft,
        }
    }

    pub fn customs_rate(&self, category: CategoryId) -> CustomsRate {
        let rates = self.rates(category);
        CustomsRate {
            category,
            duty_rate: rates.duty_rate,
            sales_tax_rate: rates.sales_tax_rate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for category in CategoryId::ALL {
            let rates = self.rates(category);
            let field = |name: &str| format!("categories.{}.{}", category, name);
            validate_non_negative_setting(&field("weight_kg"), rates.weight_kg)?;
            validate_non_negative_setting(&field("volume_cbft"), rates.volume_cbft)?;
            validate_range(&field("duty_rate"), rates.duty_rate, 0.0, 1.0)?;
            validate_range(&field("sales_tax_rate"), rates.sales_tax_rate, 0.0, 1.0)?;
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
