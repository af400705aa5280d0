/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#[cfg(feature = "schemars")]
#[test]
fn string_schema() {
    use quantity::DimensionalUnit;
    use schemars::schema_for;
    use serde_json::json;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(DimensionalUnit)).unwrap(),
    )
    .unwrap();

    #[cfg(feature = "serialize_as_string")]
    let examples = [json!("kB/s")];
    #[cfg(not(feature = "serialize_as_string"))]
    let examples = [json!({
        "value": 1.0,
        "factors": [
            { "value": 1.0, "prefix": { "Metric": "Kilo" },
              "symbol": "B", "exponent": 1 },
            { "value": 1.0, "prefix": { "Metric": "Unit" },
              "symbol": "s", "exponent": -1 },
        ],
    })];

    examples.iter().for_each(|example| {
        schema.validate(example).expect("schema validation failed");
    });
}
