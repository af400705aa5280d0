/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use quantity::{
    DimensionalUnit, MetricPrefix, Prefix, PrefixFamily, QuantityError,
    UnitPrefix,
};

#[test]
fn canonical_form() {
    assert_eq!(
        DimensionalUnit::parse("kilometres/h").unwrap().to_string(),
        "km/h"
    );
    assert_eq!(
        DimensionalUnit::parse("kibibytes²·kibibytes⁻¹")
            .unwrap()
            .to_string(),
        "KiB"
    );
    assert_eq!(
        DimensionalUnit::parse("metres²·seconds⁻²·kilogram·ampere⁻¹")
            .unwrap()
            .to_string(),
        "m²·kg/s²·A"
    );
    assert_eq!(DimensionalUnit::parse("").unwrap().to_string(), "");
}

#[test]
fn canonical_form_is_fixed_point() {
    for input in [
        "kilometres/h",
        "kibibytes²·kibibytes⁻¹",
        "metres²·seconds⁻²·kilogram·ampere⁻¹",
        "µs",
        "Mbps",
        "/s",
    ] {
        let unit = DimensionalUnit::parse(input).unwrap();
        let rendered = unit.to_string();
        assert_eq!(
            DimensionalUnit::parse(&rendered).unwrap().to_string(),
            rendered
        );
    }
}

#[test]
fn conversion() {
    assert_eq!(
        DimensionalUnit::parse("km/h")
            .unwrap()
            .to(&DimensionalUnit::parse("m/h").unwrap())
            .unwrap(),
        1000.0
    );
    assert_eq!(
        DimensionalUnit::parse("kibibytes²·kibibytes⁻¹")
            .unwrap()
            .to(&DimensionalUnit::parse("kB").unwrap())
            .unwrap(),
        1.024
    );
    assert_eq!(
        DimensionalUnit::parse("GiB")
            .unwrap()
            .to(&DimensionalUnit::parse("MiB").unwrap())
            .unwrap(),
        1024.0
    );
}

#[test]
fn conversion_round_trips() {
    let pairs = [
        ("km/h", "m/h"),
        ("KiB", "kB"),
        ("Tbps", "Mbps"),
        ("m²·kg/s²·A", "A⁻¹·second⁻²/(kg⁻¹·meter⁻²)"),
    ];
    for (a, b) in pairs {
        let a = DimensionalUnit::parse(a).unwrap();
        let b = DimensionalUnit::parse(b).unwrap();
        let round_trip = a.to(&b).unwrap() * b.to(&a).unwrap();
        assert!((round_trip - 1.0).abs() < 1e-12);
    }
}

#[test]
fn weber_equivalence() {
    assert_eq!(
        DimensionalUnit::parse("metres²·seconds⁻²·kilogram·ampere⁻¹")
            .unwrap(),
        DimensionalUnit::parse("A⁻¹·second⁻²/(kg⁻¹·meter⁻²)").unwrap()
    );
}

#[test]
fn exponent_words() {
    assert_eq!(
        DimensionalUnit::parse("square metres").unwrap().to_string(),
        "m²"
    );
    assert_eq!(
        DimensionalUnit::parse("cubic metres").unwrap().to_string(),
        "m³"
    );
    assert_eq!(
        DimensionalUnit::parse("metres squared")
            .unwrap()
            .to_string(),
        "m²"
    );
    assert!(matches!(
        DimensionalUnit::parse("square metres squared"),
        Err(QuantityError::InvalidExpression(_))
    ));
}

#[test]
fn unknown_symbols() {
    assert_eq!(
        DimensionalUnit::parse("foo/bar").unwrap().to_string(),
        "foo/bar"
    );
    assert_eq!(
        DimensionalUnit::parse("kfoo")
            .unwrap()
            .to(&DimensionalUnit::parse("foo").unwrap())
            .unwrap(),
        1000.0
    );
    assert!(matches!(
        DimensionalUnit::parse("foo")
            .unwrap()
            .to(&DimensionalUnit::parse("bar").unwrap()),
        Err(QuantityError::NonScalarDimension(_))
    ));
}

#[test]
fn forced_prefix_family() {
    // No binary prefix fits 1000², so the residue stays in the
    // scalar channel.
    let unit =
        DimensionalUnit::parse_with("kB·kB", PrefixFamily::Binary).unwrap();
    assert_eq!(unit.scalar(), 1000000.0);
    assert_eq!(unit.to_string(), "1000000 B²");

    let unit = DimensionalUnit::parse("kB·kB").unwrap();
    assert_eq!(unit.scalar(), 1.0);
    assert_eq!(unit.to_string(), "kB²");
}

#[test]
fn factor_access() {
    let unit = DimensionalUnit::parse("km/h").unwrap();
    let factors = unit.factors();
    assert_eq!(factors.len(), 2);
    assert_eq!(factors[0].symbol(), "m");
    assert_eq!(factors[0].value(), 1.0);
    assert_eq!(factors[0].exponent(), 1);
    assert_eq!(factors[1].exponent(), -1);
    assert!(factors[0].dimension_eq(&factors[0]));
    assert!(!factors[0].symbol_eq(&factors[1]));
}

#[test]
fn symbol_aliases() {
    use quantity::symbol::{aliases, canonical_symbol};

    assert_eq!(canonical_symbol("metres"), "m");
    assert_eq!(canonical_symbol("m"), "m");
    assert_eq!(canonical_symbol("furlong"), "furlong");
    assert!(aliases("byte").contains(&"B"));
    assert_eq!(aliases("furlong"), vec!["furlong"]);
}

#[test]
fn prefix_labels() {
    assert_eq!(
        UnitPrefix::from_label("kilo").unwrap(),
        UnitPrefix::Metric(MetricPrefix::Kilo)
    );
    assert_eq!(
        UnitPrefix::from_label("Ki").unwrap().multiplier(),
        1024.0
    );
    assert_eq!(UnitPrefix::from_label("").unwrap().multiplier(), 1.0);
    assert!(matches!(
        UnitPrefix::from_label("xx"),
        Err(QuantityError::UnknownPrefix(_))
    ));
}

#[test]
fn prefix_selection() {
    for v in [1.0, 5.0, 999.0, 1000.0, 12345.0, 1e7] {
        assert!(MetricPrefix::for_value(v, 1).multiplier() <= v);
    }
    assert_eq!(MetricPrefix::for_value(1000.0, 1), MetricPrefix::Kilo);
    assert_eq!(MetricPrefix::for_value(1e-27, 1), MetricPrefix::Yocto);
}
