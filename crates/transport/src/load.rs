use serde::{Deserialize, Serialize};

use minehaul_core::{DomainError, DomainResult, ValueObject};

/// A single shipment's cargo: mineral type, humidity, validated weight.
///
/// Owned exclusively by its transport operation. Mineral type and
/// humidity are fixed for the load's lifetime; only the weight can be
/// corrected, and only through the validated mutator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralLoad {
    mineral: String,
    humidity_pct: f64,
    weight_t: f64,
}

impl MineralLoad {
    /// Build a load with a validated weight.
    pub fn new(
        mineral: impl Into<String>,
        humidity_pct: f64,
        weight_t: f64,
    ) -> DomainResult<Self> {
        check_weight(weight_t)?;
        Ok(Self {
            mineral: mineral.into(),
            humidity_pct,
            weight_t,
        })
    }

    pub fn mineral(&self) -> &str {
        &self.mineral
    }

    pub fn humidity_pct(&self) -> f64 {
        self.humidity_pct
    }

    pub fn weight_t(&self) -> f64 {
        self.weight_t
    }

    /// Re-weigh the load. A rejected weight leaves the load untouched.
    pub fn set_weight_t(&mut self, weight_t: f64) -> DomainResult<()> {
        check_weight(weight_t)?;
        self.weight_t = weight_t;
        Ok(())
    }
}

impl ValueObject for MineralLoad {}

fn check_weight(weight_t: f64) -> DomainResult<()> {
    if !weight_t.is_finite() || weight_t <= 0.0 {
        return Err(DomainError::validation(format!(
            "load weight must be a positive number of tonnes, got {weight_t}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_weight_constructs() {
        let load = MineralLoad::new("Cobre", 2.5, 15.0).unwrap();
        assert_eq!(load.mineral(), "Cobre");
        assert_eq!(load.humidity_pct(), 2.5);
        assert_eq!(load.weight_t(), 15.0);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let err = MineralLoad::new("Cobre", 2.5, 0.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = MineralLoad::new("Oro", 0.8, -3.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        assert!(MineralLoad::new("Plata", 1.0, f64::NAN).is_err());
        assert!(MineralLoad::new("Plata", 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn rejected_reweigh_leaves_load_unchanged() {
        let mut load = MineralLoad::new("Plata", 1.0, 25.0).unwrap();
        let err = load.set_weight_t(0.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(load.weight_t(), 25.0);

        load.set_weight_t(20.0).unwrap();
        assert_eq!(load.weight_t(), 20.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: any finite positive weight constructs a load.
            #[test]
            fn positive_weight_constructs(weight in 1e-9f64..1e6) {
                prop_assert!(MineralLoad::new("Cobre", 2.5, weight).is_ok());
            }

            /// Property: any non-positive weight is rejected.
            #[test]
            fn non_positive_weight_is_rejected(weight in -1e6f64..=0.0) {
                let err = MineralLoad::new("Cobre", 2.5, weight).unwrap_err();
                prop_assert!(matches!(err, DomainError::Validation(_)));
            }
        }
    }
}
