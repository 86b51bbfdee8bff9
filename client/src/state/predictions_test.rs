use super::*;

fn record(id: i64, price: f64) -> Prediction {
    Prediction {
        id,
        longitude: Some(-122.23),
        latitude: Some(37.88),
        predicted_price: price,
        timestamp: "2024-05-01T10:00:00".to_owned(),
    }
}

#[test]
fn predictions_state_defaults_empty() {
    let s = PredictionsState::default();
    assert!(s.rows.is_empty());
}

#[test]
fn row_formats_record_fields() {
    let row = PredictionRow::from_record(&record(4, 452_600.0));
    assert_eq!(row.id, "4");
    assert_eq!(row.longitude, "-122.23");
    assert_eq!(row.latitude, "37.88");
    assert_eq!(row.price, "452600.00");
}

#[test]
fn row_renders_missing_coordinates_as_null() {
    let mut r = record(5, 10.0);
    r.longitude = None;
    r.latitude = None;
    let row = PredictionRow::from_record(&r);
    assert_eq!(row.longitude, "null");
    assert_eq!(row.latitude, "null");
    assert_eq!(row.price, "10.00");
}

#[test]
fn replace_rows_keeps_service_order() {
    let mut s = PredictionsState::default();
    s.replace_rows(&[record(2, 1.0), record(1, 2.0), record(3, 3.0)]);
    let ids: Vec<_> = s.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["2", "1", "3"]);
}

#[test]
fn replace_rows_clears_prior_rows() {
    let mut s = PredictionsState::default();
    s.replace_rows(&[record(1, 1.0), record(2, 2.0), record(3, 3.0)]);
    s.replace_rows(&[record(9, 9.0)]);
    assert_eq!(s.rows.len(), 1);
    assert_eq!(s.rows[0].id, "9");
}

#[test]
fn replace_rows_is_idempotent_for_same_data() {
    let data = [record(1, 100.456), record(2, 200.0)];
    let mut once = PredictionsState::default();
    once.replace_rows(&data);
    let mut twice = PredictionsState::default();
    twice.replace_rows(&data);
    twice.replace_rows(&data);
    assert_eq!(once.rows, twice.rows);
}

#[test]
fn replace_rows_with_empty_list_empties_table() {
    let mut s = PredictionsState::default();
    s.replace_rows(&[record(1, 1.0)]);
    s.replace_rows(&[]);
    assert!(s.rows.is_empty());
}

#[test]
fn every_price_cell_has_two_decimals() {
    let mut s = PredictionsState::default();
    s.replace_rows(&[record(1, 5.0), record(2, 5.5), record(3, 5.555_55), record(4, 123_456.1)]);
    let prices: Vec<_> = s.rows.iter().map(|r| r.price.as_str()).collect();
    assert_eq!(prices, ["5.00", "5.50", "5.56", "123456.10"]);
}
