use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::primitives::price_from_json;
use crate::error::{ChartError, ChartResult};

/// One vehicle listing as charted: a manufacturer and a price.
///
/// Every other listing field (model, year, mileage, city, ...) is kept
/// verbatim in `details`, in wire order, so the record survives a
/// serialize/deserialize trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "MakerName", alias = "manufacturer")]
    pub manufacturer: String,
    pub price: f64,
    #[serde(flatten, default)]
    pub details: IndexMap<String, Value>,
}

impl ListingRecord {
    #[must_use]
    pub fn new(manufacturer: impl Into<String>, price: f64) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            price,
            details: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }
}

/// Listing as received from a dataset source, before validation.
///
/// Both charted fields are kept as raw JSON so one malformed row is
/// excluded on its own instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawListing {
    #[serde(rename = "MakerName", alias = "manufacturer", default)]
    pub manufacturer: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(flatten)]
    pub details: IndexMap<String, Value>,
}

impl RawListing {
    #[must_use]
    pub fn new(manufacturer: impl Into<String>, price: Value) -> Self {
        Self {
            manufacturer: Some(Value::String(manufacturer.into())),
            price: Some(price),
            details: IndexMap::new(),
        }
    }

    /// Converts into a chartable record under `policy`.
    ///
    /// A missing or non-string manufacturer is always an error since such a
    /// record can never match a filter. Invalid prices are rejected or
    /// coerced to zero depending on the policy.
    pub fn into_record(self, policy: PricePolicy) -> ChartResult<ListingRecord> {
        let manufacturer = match self.manufacturer {
            Some(Value::String(name)) => name,
            None | Some(Value::Null) => {
                return Err(ChartError::InvalidData(
                    "listing has no manufacturer".to_owned(),
                ));
            }
            Some(other) => {
                return Err(ChartError::InvalidData(format!(
                    "manufacturer must be a string, got `{other}`"
                )));
            }
        };

        let price = match self.price.as_ref().map(price_from_json) {
            Some(Ok(price)) => price,
            Some(Err(err)) => policy.resolve(err)?,
            None => policy.resolve(ChartError::InvalidData("price is missing".to_owned()))?,
        };

        Ok(ListingRecord {
            manufacturer,
            price,
            details: self.details,
        })
    }
}

/// What to do with a listing whose price is missing or unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePolicy {
    /// Drop the listing from the dataset.
    #[default]
    Exclude,
    /// Keep the listing and chart it at zero.
    CoerceToZero,
}

impl PricePolicy {
    fn resolve(self, err: ChartError) -> ChartResult<f64> {
        match self {
            Self::Exclude => Err(err),
            Self::CoerceToZero => Ok(0.0),
        }
    }
}

/// Outcome of validating a batch of raw listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SanitizedListings {
    pub records: Vec<ListingRecord>,
    /// `(index in the raw batch, reason)` for every dropped listing.
    pub excluded: Vec<(usize, String)>,
}

#[must_use]
pub fn sanitize_listings(raw: Vec<RawListing>, policy: PricePolicy) -> SanitizedListings {
    let mut sanitized = SanitizedListings {
        records: Vec::with_capacity(raw.len()),
        excluded: Vec::new(),
    };
    for (index, listing) in raw.into_iter().enumerate() {
        match listing.into_record(policy) {
            Ok(record) => sanitized.records.push(record),
            Err(err) => sanitized.excluded.push((index, err.to_string())),
        }
    }
    sanitized
}
