use super::*;

// =============================================================
// Prediction
// =============================================================

#[test]
fn prediction_parses_list_entry() {
    let raw = r#"{"id":7,"longitude":-122.23,"latitude":37.88,"predicted_price":452600.123,"timestamp":"2024-05-01T10:00:00"}"#;
    let p: Prediction = serde_json::from_str(raw).unwrap();
    assert_eq!(p.id, 7);
    assert_eq!(p.longitude, Some(-122.23));
    assert_eq!(p.latitude, Some(37.88));
    assert!((p.predicted_price - 452_600.123).abs() < f64::EPSILON);
    assert_eq!(p.timestamp, "2024-05-01T10:00:00");
}

#[test]
fn prediction_accepts_service_column_name_and_ignores_features() {
    let raw = r#"{
        "id": 3,
        "longitude": -118.24,
        "latitude": 34.12,
        "housing_median_age": 30.0,
        "total_rooms": 1000.0,
        "ocean_proximity": "<1H OCEAN",
        "predicted_house_value": 210000.0,
        "timestamp": "2024-05-02T08:30:00.123456"
    }"#;
    let p: Prediction = serde_json::from_str(raw).unwrap();
    assert_eq!(p.id, 3);
    assert!((p.predicted_price - 210_000.0).abs() < f64::EPSILON);
}

#[test]
fn prediction_with_null_price_is_rejected() {
    let raw = r#"{"id":1,"longitude":0,"latitude":0,"predicted_price":null,"timestamp":"x"}"#;
    assert!(serde_json::from_str::<Prediction>(raw).is_err());
}

#[test]
fn prediction_with_null_coordinates_parses() {
    let raw = r#"{"id":2,"longitude":null,"predicted_price":5.5,"timestamp":"x"}"#;
    let p: Prediction = serde_json::from_str(raw).unwrap();
    assert_eq!(p.longitude, None);
    assert_eq!(p.latitude, None);
    assert!((p.predicted_price - 5.5).abs() < f64::EPSILON);
}

#[test]
fn prediction_list_parses() {
    let raw = r#"[
        {"id":1,"longitude":1,"latitude":2,"predicted_price":3,"timestamp":"t1"},
        {"id":2,"longitude":4,"latitude":5,"predicted_price":6,"timestamp":"t2"}
    ]"#;
    let list: Vec<Prediction> = serde_json::from_str(raw).unwrap();
    assert_eq!(list.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
}

// =============================================================
// PredictResponse
// =============================================================

#[test]
fn predict_response_reads_predicted_value() {
    let r: PredictResponse = serde_json::from_str(r#"{"predicted_value": 452600}"#).unwrap();
    assert!((r.predicted_value - 452_600.0).abs() < f64::EPSILON);
}

#[test]
fn predict_response_accepts_created_record() {
    let raw = r#"{"id":9,"longitude":-118.24,"predicted_house_value":199999.5,"timestamp":"t"}"#;
    let r: PredictResponse = serde_json::from_str(raw).unwrap();
    assert!((r.predicted_value - 199_999.5).abs() < f64::EPSILON);
}

#[test]
fn predict_response_missing_value_is_rejected() {
    assert!(serde_json::from_str::<PredictResponse>(r#"{"detail":"boom"}"#).is_err());
}

// =============================================================
// FormPayload
// =============================================================

#[test]
fn form_payload_serializes_as_flat_string_object() {
    let mut payload = FormPayload::new();
    payload.insert("median_income".to_owned(), "3.5".to_owned());
    payload.insert("ocean_proximity".to_owned(), "NEAR BAY".to_owned());
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "median_income": "3.5", "ocean_proximity": "NEAR BAY" })
    );
}
