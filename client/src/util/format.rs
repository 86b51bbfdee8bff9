//! Display formatting for prediction values.
//!
//! Numbers render the way the browser renders a JavaScript number, so a
//! whole-valued price reads `452600` rather than `452600.0`. Timestamps use
//! the browser's locale; outside the browser the raw string is kept.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Text written to the result display after a successful prediction.
pub fn predicted_price_message(value: f64) -> String {
    format!("Predicted Price: ${}", js_number(value))
}

/// Price table cell: always exactly two decimal digits.
///
/// A value exactly halfway between two cents rounds away from zero, as the
/// browser's `toFixed(2)` does; `{:.2}` alone would round it to even.
pub fn price_cell(value: f64) -> String {
    if is_cent_tie(value) {
        // Odd eighths scale to an exact `n.5`, so `round` sees the true tie.
        let cents = (value * 100.0).round();
        return format!("{:.2}", cents / 100.0);
    }
    format!("{value:.2}")
}

/// True when `value` lies exactly on a half cent.
///
/// A binary fraction with a third decimal of 5 and nothing after it is an
/// odd multiple of 1/8 (0.125, 0.375, 0.625, 0.875).
fn is_cent_tie(value: f64) -> bool {
    value.is_finite() && (value * 8.0).fract() == 0.0 && (value * 4.0).fract() != 0.0
}

/// Render a finite `f64` like JavaScript's `Number#toString`.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_owned() } else { "-Infinity".to_owned() };
    }
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    format!("{value}")
}

/// Locale-aware rendering of a service timestamp.
///
/// Unparseable input renders as `Invalid Date`, matching the browser.
pub fn local_timestamp(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
