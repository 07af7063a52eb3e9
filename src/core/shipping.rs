use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::{validate_non_negative, validate_non_negative_setting};
use serde::{Deserialize, Serialize};

/// Tiered shipping price: the larger of the weight charge and the volume charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingPolicy {
    pub per_kg_rate: f64,
    pub base_volume_limit: f64,
    pub base_volume_charge: f64,
    pub mid_volume_limit: f64,
    pub mid_volume_charge: f64,
    pub excess_rate_per_cbft: f64,
}

impl ShippingPolicy {
    pub const DEFAULT: ShippingPolicy = ShippingPolicy {
        per_kg_rate: 10.0,
        base_volume_limit: 6.0,
        base_volume_charge: 50.0,
        mid_volume_limit: 10.0,
        mid_volume_charge: 100.0,
        excess_rate_per_cbft: 6.0,
    };

    pub fn weight_cost(&self, weight_kg: f64) -> f64 {
        weight_kg * self.per_kg_rate
    }

    pub fn volume_cost(&self, volume_cbft: f64) -> f64 {
        if volume_cbft <= self.base_volume_limit {
            self.base_volume_charge
        } else if volume_cbft <= self.mid_volume_limit {
            self.mid_volume_charge
        } else {
            self.mid_volume_charge + (volume_cbft - self.mid_volume_limit) * self.excess_rate_per_cbft
        }
    }

    /// Unrounded cost; rounding belongs to presentation.
    pub fn cost(&self, weight_kg: f64, volume_cbft: f64) -> Result<f64> {
        let weight_kg = validate_non_negative("weight_kg", weight_kg)?;
        let volume_cbft = validate_non_negative("volume_cbft", volume_cbft)?;

        let weight_cost = self.weight_cost(weight_kg);
        let volume_cost = self.volume_cost(volume_cbft);
        tracing::debug!(weight_cost, volume_cost, "Shipping components");

        Ok(weight_cost.max(volume_cost))
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("shipping.per_kg_rate", self.per_kg_rate),
            ("shipping.base_volume_limit", self.base_volume_limit),
            ("shipping.base_volume_charge", self.base_volume_charge),
            ("shipping.mid_volume_limit", self.mid_volume_limit),
            ("shipping.mid_volume_charge", self.mid_volume_charge),
            ("shipping.excess_rate_per_cbft", self.excess_rate_per_cbft),
        ];
        for (field, value) in fields {
            validate_non_negative_setting(field, value)?;
        }

        if self.mid_volume_limit < self.base_volume_limit {
            return Err(EstimateError::ConfigValidationError {
                field: "shipping.mid_volume_limit".to_string(),
                message: format!(
                    "must not be below base_volume_limit ({})",
                    self.base_volume_limit
                ),
            });
        }
        Ok(())
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shipping cost under the built-in policy.
pub fn calc_shipping(weight_kg: f64, volume_cbft: f64) -> Result<f64> {
    ShippingPolicy::DEFAULT.cost(weight_kg, volume_cbft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_tier_boundaries() {
        assert_eq!(calc_shipping(0.0, 6.0).unwrap(), 50.0);
        assert_eq!(calc_shipping(0.0, 6.5).unwrap(), 100.0);
        assert_eq!(calc_shipping(0.0, 10.0).unwrap(), 100.0);
        assert_eq!(calc_shipping(0.0, 11.0).unwrap(), 106.0);
        assert_eq!(calc_shipping(0.0, 0.0).unwrap(), 50.0);
    }

    #[test]
    fn test_weight_dominates_when_heavier() {
        assert_eq!(calc_shipping(10.0, 0.0).unwrap(), 100.0);
        assert_eq!(calc_shipping(12.0, 8.0).unwrap(), 120.0);
        // 3kg → 30 < 50 flat minimum
        assert_eq!(calc_shipping(3.0, 0.6).unwrap(), 50.0);
    }

    #[test]
    fn test_negative_inputs_are_rejected() {
        let err = calc_shipping(-1.0, 5.0).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { ref field, .. } if field == "weight_kg"));

        let err = calc_shipping(1.0, -0.5).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { ref field, .. } if field == "volume_cbft"));
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        assert!(calc_shipping(f64::NAN, 1.0).is_err());
        assert!(calc_shipping(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_rejects_descending_limits() {
        let policy = ShippingPolicy {
            base_volume_limit: 12.0,
            ..ShippingPolicy::DEFAULT
        };
        assert!(policy.validate().is_err());
        assert!(ShippingPolicy::default().validate().is_ok());
    }
}
