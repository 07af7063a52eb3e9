use customs_estimator::{
    build_estimate, calc_customs, calc_shipping, resolve, CategoryId, EstimateError, Estimator,
};

#[test]
fn test_names_without_keywords_resolve_to_general() {
    for name in ["", "bluetooth speaker", "hand-made soap", "ELECTRONIC gadget", "toolbox"] {
        let (category, spec) = resolve(name);
        assert_eq!(category, CategoryId::General, "name: {:?}", name);
        assert_eq!(spec.weight_kg, 1.0);
        assert_eq!(spec.volume_cbft, 0.2);
    }
}

#[test]
fn test_keyword_match_precedence() {
    assert_eq!(resolve("electronics case").0, CategoryId::Electronics);
    assert_eq!(resolve("leather tools kit").0, CategoryId::Tools);
}

#[test]
fn test_shipping_tier_boundaries() {
    assert_eq!(calc_shipping(0.0, 6.0).unwrap(), 50.0);
    assert_eq!(calc_shipping(0.0, 10.0).unwrap(), 100.0);
    assert_eq!(calc_shipping(0.0, 11.0).unwrap(), 106.0);
    assert_eq!(calc_shipping(10.0, 0.0).unwrap(), 100.0);
}

#[test]
fn test_customs_tax_on_duty() {
    let charges = calc_customs(1000.0, "tools").unwrap();
    assert!((charges.duty - 150.0).abs() < 1e-9);
    assert!((charges.sales_tax - 69.0).abs() < 1e-9);
}

#[test]
fn test_build_estimate_is_idempotent() {
    let first = build_estimate("leather tools kit", CategoryId::Tools, 3.0, 0.6, 89.5).unwrap();
    let second = build_estimate("leather tools kit", CategoryId::Tools, 3.0, 0.6, 89.5).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.invoice(), second.invoice());
    assert_eq!(first.total().to_bits(), second.total().to_bits());
}

#[test]
fn test_total_consistency() {
    let estimator = Estimator::default();
    let weights = [0.0, 0.5, 2.5, 10.0, 37.25];
    let volumes = [0.0, 0.2, 6.0, 6.01, 10.0, 42.5];
    let declared_values = [0.0, 0.01, 19.99, 1000.0, 250_000.0];

    for category in CategoryId::ALL {
        for &weight in &weights {
            for &volume in &volumes {
                for &declared in &declared_values {
                    let estimate = estimator
                        .build_estimate("item", category, weight, volume, declared)
                        .unwrap();
                    let sum = estimate.shipping_cost() + estimate.duty() + estimate.sales_tax();
                    assert!((estimate.total() - sum).abs() < 1e-9);
                }
            }
        }
    }
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert!(matches!(
        calc_shipping(-1.0, 5.0),
        Err(EstimateError::InvalidInput { .. })
    ));
    assert!(matches!(
        calc_customs(-5.0, "general"),
        Err(EstimateError::InvalidInput { .. })
    ));
}

#[test]
fn test_estimate_for_web_title() {
    let estimate = Estimator::default()
        .estimate_for("acme consumer electronics - 4k streaming box", 120.0)
        .unwrap();

    assert_eq!(estimate.category(), CategoryId::Electronics);
    assert_eq!(estimate.weight_kg(), 2.5);
    assert_eq!(estimate.volume_cbft(), 0.4);
    // 2.5kg → 25 < 50
    assert_eq!(estimate.shipping_cost(), 50.0);
    assert!((estimate.duty() - 8.4).abs() < 1e-9);
    assert!((estimate.sales_tax() - 7.704).abs() < 1e-9);

    let invoice = estimate.invoice();
    assert!(invoice.starts_with("Product: acme consumer electronics - 4k streaming box\n"));
    assert!(invoice.contains("OB Tax: $7.70\n"));
    assert!(invoice.ends_with("Total: $66.10\n"));
}
