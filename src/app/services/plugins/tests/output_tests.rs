//! Tests for the CSV and JSON output plugins

use super::*;
use crate::app::services::plugins::{CsvOutputPlugin, JsonOutputPlugin, OutputPlugin};

#[test]
fn test_csv_output_with_separators() {
    let row = sample_output_row();

    let hyphen = CsvOutputPlugin::with_separator(output_schema(), "-")
        .unwrap()
        .output(&row)
        .unwrap();
    let comma = CsvOutputPlugin::with_separator(output_schema(), ",")
        .unwrap()
        .output(&row)
        .unwrap();

    assert_eq!(hyphen, "2019-10-06-add-1060.2-198-188");
    assert_eq!(comma, "2019-10-06,add,1060.2,198,188");
}

#[test]
fn test_csv_output_default_separator() {
    let plugin = CsvOutputPlugin::new(output_schema());
    assert_eq!(plugin.separator(), ",");
    assert_eq!(
        plugin.output(&sample_output_row()).unwrap(),
        "2019-10-06,add,1060.2,198,188"
    );
}

#[test]
fn test_csv_output_rejects_wrong_length() {
    let plugin = CsvOutputPlugin::new(output_schema());
    let mut row = sample_output_row();
    row.pop();

    assert!(plugin.output(&row).unwrap_err().is_validation());

    row.push(Value::Int(188));
    row.push(Value::Int(1));
    assert!(plugin.output(&row).unwrap_err().is_validation());
}

#[test]
fn test_json_output() {
    let plugin = JsonOutputPlugin::new(output_schema()).unwrap();

    let processed = plugin.output(&sample_output_row()).unwrap();

    assert_eq!(
        processed,
        r#"{"date": "2019-10-06", "type": "add", "amount": 1060.2, "from": 198, "to": 188}"#
    );
}

#[test]
fn test_json_output_integral_amount_and_null() {
    let schema = Schema::new(vec![
        FieldType::canonical_date(),
        FieldType::float(),
        FieldType::string().nullable(),
    ]);
    let plugin = JsonOutputPlugin::with_attributes(schema, ["when", "amount", "memo"]).unwrap();

    let row = vec![Value::Date(sample_date()), Value::Float(5.0), Value::Null];
    assert_eq!(
        plugin.output(&row).unwrap(),
        r#"{"when": "2019-10-06", "amount": 5.0, "memo": null}"#
    );
}

#[test]
fn test_json_output_rejects_wrong_length() {
    let plugin = JsonOutputPlugin::new(output_schema()).unwrap();
    let row = vec![Value::Date(sample_date())];

    assert!(plugin.output(&row).unwrap_err().is_validation());
}

#[test]
fn test_json_attribute_count_must_match_schema() {
    let err = JsonOutputPlugin::with_attributes(output_schema(), ["date", "type"]).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_csv_and_json_agree_on_empty_strings() {
    let schema = Schema::new(vec![FieldType::string(), FieldType::int()]);
    let row = vec![Value::from(""), Value::Int(1)];

    let csv = CsvOutputPlugin::new(schema.clone()).output(&row).unwrap();
    let json = JsonOutputPlugin::with_attributes(schema, ["memo", "count"])
        .unwrap()
        .output(&row)
        .unwrap();

    assert_eq!(csv, ",1");
    assert_eq!(json, r#"{"memo": "", "count": 1}"#);
}

#[test]
fn test_json_output_rejects_non_finite_floats() {
    let schema = Schema::new(vec![FieldType::float()]);
    let plugin = JsonOutputPlugin::with_attributes(schema, ["amount"]).unwrap();

    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = plugin.output(&[Value::Float(value)]).unwrap_err();
        assert!(err.is_validation(), "{} should be rejected", value);
    }
}

#[test]
fn test_csv_output_rejects_empty_separator() {
    let err = CsvOutputPlugin::with_separator(output_schema(), "").unwrap_err();
    assert!(err.is_configuration());
}
