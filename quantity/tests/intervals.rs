/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use quantity::{Interval, IntervalsValidator, Number, QuantityError};

#[test]
fn normalize_bandwidth() {
    let validator = IntervalsValidator::parse("Mbps: (0, 10000000]").unwrap();
    assert_eq!(validator.unit().to_string(), "Mbps");
    assert_eq!(validator.normalize("0.25 Tbps").unwrap(), "250000 Mbps");
    assert_eq!(validator.normalize("1 Mbps").unwrap(), "1 Mbps");
    assert!(!validator.is_valid("0 Mbps"));
}

#[test]
fn normalize_information() {
    let validator = IntervalsValidator::parse("MiB: (0, 2560]").unwrap();
    assert_eq!(validator.normalize("2.5 GiB").unwrap(), "2560 MiB");
    assert!(matches!(
        validator.normalize("2.6 GiB"),
        Err(QuantityError::NotWithin(_))
    ));
}

#[test]
fn validity() {
    let validator = IntervalsValidator::parse("kg:[0,1]").unwrap();
    assert!(validator.is_valid("0 kg"));
    assert!(validator.is_valid("1000 g"));
    assert!(!validator.is_valid("1.1 kg"));
    assert!(!validator.is_valid("1 m"));
    assert!(!validator.is_valid_value(1.0000000000000002));
}

#[test]
fn dimensionless_target() {
    let validator = IntervalsValidator::parse("[0,1]").unwrap();
    assert!(validator.is_valid_value(1.0));
    assert!(!validator.is_valid_value(1.0000000000000002));
    assert_eq!(validator.normalize("0.5").unwrap(), "0.5");
    assert_eq!(validator.normalize_value(1.0).unwrap(), "1");
}

#[test]
fn out_of_order() {
    assert!(matches!(
        IntervalsValidator::parse("mol: (*,-5) [-6,12) ]15, 120["),
        Err(QuantityError::NotInOrder(_))
    ));
    assert!(matches!(
        IntervalsValidator::parse("(0, 5] (4, 10]"),
        Err(QuantityError::NotInOrder(_))
    ));
}

#[test]
fn mixed_channel_ordering() {
    // -1e-42 is greater than -1 in the double channel, but the
    // previous right endpoint 0 exceeds it.
    assert!(matches!(
        IntervalsValidator::parse("[-1,0] [-1e-42, 1.0]"),
        Err(QuantityError::NotInOrder(_))
    ));
    // Touching endpoints are in order.
    assert!(IntervalsValidator::parse("(0, 5] (5, 10]").is_ok());
    assert!(IntervalsValidator::parse("mol: (*,-5) [-4,12) ]15, 120[")
        .is_ok());
}

#[test]
fn duplicate_intervals() {
    assert!(matches!(
        IntervalsValidator::parse("kg: [5,5] [5,5]"),
        Err(QuantityError::DuplicateInterval(_))
    ));
}

#[test]
fn ambiguous_infinite() {
    assert!(matches!(
        IntervalsValidator::parse("[-∞,+∞["),
        Err(QuantityError::AmbiguousInfinite)
    ));
    let validator = IntervalsValidator::parse("(-∞,+∞)").unwrap();
    assert!(validator.is_valid_value(-1e300));
    assert!(validator.is_valid_value(1e300));
}

#[test]
fn interval_containment() {
    let interval = Interval::parse("]0, 10]").unwrap();
    assert!(!interval.contains(&Number::Long(0)));
    assert!(interval.contains(&Number::Double(1e-42)));
    assert!(interval.contains(&Number::Long(10)));
    assert!(!interval.contains(&Number::Double(10.5)));
}

#[test]
fn containment_is_monotone() {
    let interval = Interval::parse("[-5, 120)").unwrap();
    let samples = [-6.0, -5.0, 0.0, 119.0, 120.0, 121.0];
    let mut seen_inside = false;
    let mut seen_outside_after = false;
    for v in samples {
        match interval.contains(&Number::Double(v)) {
            true => {
                assert!(!seen_outside_after);
                seen_inside = true;
            }
            false => {
                if seen_inside {
                    seen_outside_after = true;
                }
            }
        }
    }
    assert!(seen_inside);
}

#[test]
fn number_channels() {
    assert_eq!(Number::parse("10000000").unwrap(), Number::Long(10000000));
    assert_eq!(Number::parse("1e7").unwrap(), Number::Double(1e7));
    assert!(matches!(
        Number::parse("abc"),
        Err(QuantityError::NotANumber(_))
    ));
}

#[test]
fn quantity_interval() {
    let validator = IntervalsValidator::parse("MiB: (0, 2560]").unwrap();
    let interval = &validator.intervals()[0];
    assert_eq!(interval.unit().to_string(), "MiB");
    assert!(interval.contains("2.5 GiB").unwrap());
    assert!(!interval.contains("3 GiB").unwrap());
    assert_eq!(interval.normalize("1 GiB").unwrap(), Number::Long(1024));
    assert!(matches!(
        interval.contains("1 s"),
        Err(QuantityError::IncompatibleUnit(_, _))
    ));
}

#[test]
fn canonical_interval_form() {
    assert_eq!(Interval::parse("]0, 10]").unwrap().to_string(), "(0, 10]");
    assert_eq!(
        Interval::parse("]-∞, 5[").unwrap().to_string(),
        "(-∞, 5)"
    );
    assert_eq!(Interval::parse("(*, *)").unwrap().to_string(), "(-∞, +∞)");
}
