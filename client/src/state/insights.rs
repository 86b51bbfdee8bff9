//! Insight panel state: which aggregate to show and its rendered table.
//!
//! DESIGN
//! ======
//! Insight records are untyped flat objects, so the table takes its columns
//! from the first record. Later records missing a column render an empty
//! cell.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use serde_json::Value;

use crate::net::types::InsightRecord;
use crate::util::format::js_number;

/// Aggregates offered by `/visualizations/{case}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InsightCase {
    #[default]
    TopHouseValues,
    TopPricesByLocation,
    TopMedianIncome,
    MostPopulatedLocations,
    MaxOceanProximity,
}

impl InsightCase {
    pub const ALL: [Self; 5] = [
        Self::TopHouseValues,
        Self::TopPricesByLocation,
        Self::TopMedianIncome,
        Self::MostPopulatedLocations,
        Self::MaxOceanProximity,
    ];

    /// Path segment used by the service.
    pub fn slug(self) -> &'static str {
        match self {
            Self::TopHouseValues => "top_5_house_values",
            Self::TopPricesByLocation => "top_prices_by_location",
            Self::TopMedianIncome => "top_median_income",
            Self::MostPopulatedLocations => "most_populated_locations",
            Self::MaxOceanProximity => "max_ocean_proximity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TopHouseValues => "Top 5 house values",
            Self::TopPricesByLocation => "Top prices by location",
            Self::TopMedianIncome => "Top median income",
            Self::MostPopulatedLocations => "Most populated locations",
            Self::MaxOceanProximity => "Max value by ocean proximity",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Rendered insight result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InsightTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl InsightTable {
    pub fn from_records(records: &[InsightRecord]) -> Self {
        let Some(first) = records.first() else {
            return Self::default();
        };
        let columns: Vec<String> = first.keys().cloned().collect();
        let rows = records
            .iter()
            .map(|record| columns.iter().map(|c| cell_text(record.get(c))).collect())
            .collect();
        Self { columns, rows }
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.as_f64().map_or_else(|| n.to_string(), js_number),
        Some(other) => other.to_string(),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InsightsState {
    pub case: InsightCase,
    pub loading: bool,
    pub table: Option<InsightTable>,
    pub error: Option<String>,
}
