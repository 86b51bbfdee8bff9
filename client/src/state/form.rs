//! Prediction form fields and payload collection.
//!
//! The field list follows the housing schema the prediction service expects.
//! Values are never validated or converted here; the service receives the
//! raw strings exactly as the browser reports them.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::FormPayload;

/// Allowed values for `ocean_proximity`.
pub const OCEAN_PROXIMITY_OPTIONS: &[&str] = &["<1H OCEAN", "INLAND", "ISLAND", "NEAR BAY", "NEAR OCEAN"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input type="number">` with the given `step`.
    Number { step: &'static str },
    /// `<select>` over fixed options.
    Select { options: &'static [&'static str] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn number(name: &'static str, label: &'static str, step: &'static str) -> FormField {
    FormField { name, label, kind: FieldKind::Number { step } }
}

/// Fields rendered by the prediction form, in display order.
pub const FORM_FIELDS: &[FormField] = &[
    number("longitude", "Longitude", "any"),
    number("latitude", "Latitude", "any"),
    number("housing_median_age", "Housing Median Age", "any"),
    number("total_rooms", "Total Rooms", "any"),
    number("total_bedrooms", "Total Bedrooms", "any"),
    number("population", "Population", "any"),
    number("households", "Households", "any"),
    number("median_income", "Median Income", "any"),
    FormField {
        name: "ocean_proximity",
        label: "Ocean Proximity",
        kind: FieldKind::Select { options: OCEAN_PROXIMITY_OPTIONS },
    },
];

/// Build the request payload from form entries in document order.
///
/// A name that appears more than once keeps its last value.
pub fn collect_payload<I, K, V>(entries: I) -> FormPayload
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}
