use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{ListingRecord, PricePolicy, RawListing, sanitize_listings};
use crate::error::{ChartError, ChartResult};

/// Default address of the listing service collection endpoint.
pub const DEFAULT_LISTINGS_URL: &str = "http://localhost:8800/listings";

/// One-shot reader of the full listing collection.
pub trait DatasetSource {
    /// Human-readable origin used in logs.
    fn describe(&self) -> String;

    fn fetch(&mut self) -> ChartResult<Vec<RawListing>>;
}

impl<T: DatasetSource + ?Sized> DatasetSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&mut self) -> ChartResult<Vec<RawListing>> {
        (**self).fetch()
    }
}

/// Parses the listing collection payload: a JSON array of listing objects.
pub fn parse_listings_json(input: &str) -> ChartResult<Vec<RawListing>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::DataLoad(format!("invalid listing payload: {e}")))
}

/// Reads the collection from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("file `{}`", self.path.display())
    }

    fn fetch(&mut self) -> ChartResult<Vec<RawListing>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ChartError::DataLoad(format!("failed to read `{}`: {e}", self.path.display()))
        })?;
        parse_listings_json(&raw)
    }
}

/// Serves a JSON payload held in memory.
#[derive(Debug, Clone)]
pub struct JsonTextSource {
    text: String,
}

impl JsonTextSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DatasetSource for JsonTextSource {
    fn describe(&self) -> String {
        format!("inline json ({} bytes)", self.text.len())
    }

    fn fetch(&mut self) -> ChartResult<Vec<RawListing>> {
        parse_listings_json(&self.text)
    }
}

/// Serves records built in code.
///
/// Records still go through price validation, so a non-finite or negative
/// price is handled by the store's policy like any wire value.
#[derive(Debug, Clone, Default)]
pub struct RecordsSource {
    records: Vec<ListingRecord>,
}

impl RecordsSource {
    #[must_use]
    pub fn new(records: Vec<ListingRecord>) -> Self {
        Self { records }
    }
}

impl DatasetSource for RecordsSource {
    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }

    fn fetch(&mut self) -> ChartResult<Vec<RawListing>> {
        Ok(self
            .records
            .iter()
            .cloned()
            .map(|record| RawListing {
                manufacturer: Some(serde_json::Value::String(record.manufacturer)),
                price: Some(serde_json::Value::from(record.price)),
                details: record.details,
            })
            .collect())
    }
}

/// Blocking GET against the listing service.
#[cfg(feature = "http-source")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: std::time::Duration,
}

#[cfg(feature = "http-source")]
impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: std::time::Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(feature = "http-source")]
impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_LISTINGS_URL)
    }
}

#[cfg(feature = "http-source")]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }

    fn fetch(&mut self) -> ChartResult<Vec<RawListing>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ChartError::DataLoad(format!("http client error: {e}")))?;
        let body = client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| ChartError::DataLoad(format!("request to {} failed: {e}", self.url)))?
            .text()
            .map_err(|e| ChartError::DataLoad(format!("failed to read response body: {e}")))?;
        parse_listings_json(&body)
    }
}

/// Coarse load state, cheap to copy into observer contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadPhase {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LoadStatus {
    Pending,
    Loaded {
        records: usize,
        excluded: usize,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        reason: String,
        failed_at: DateTime<Utc>,
    },
}

impl LoadStatus {
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        match self {
            Self::Pending => LoadPhase::Pending,
            Self::Loaded { .. } => LoadPhase::Loaded,
            Self::Failed { .. } => LoadPhase::Failed,
        }
    }
}

/// Holds the listing collection once loaded.
///
/// A failed load leaves the store empty with a `Failed` status; it never
/// surfaces as an error to callers.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<ListingRecord>,
    status: LoadStatus,
    policy: PricePolicy,
}

impl DatasetStore {
    #[must_use]
    pub fn new(policy: PricePolicy) -> Self {
        Self {
            records: Vec::new(),
            status: LoadStatus::Pending,
            policy,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.status.phase()
    }

    #[must_use]
    pub fn policy(&self) -> PricePolicy {
        self.policy
    }

    /// Fetches synchronously from `source` and applies the result.
    pub fn load_from(&mut self, source: &mut dyn DatasetSource) -> LoadPhase {
        debug!(source = %source.describe(), "loading listing dataset");
        let result = source.fetch();
        self.complete_load(result)
    }

    /// Applies the outcome of a fetch.
    pub fn complete_load(&mut self, result: ChartResult<Vec<RawListing>>) -> LoadPhase {
        match result {
            Ok(raw) => {
                let fetched = raw.len();
                let sanitized = sanitize_listings(raw, self.policy);
                for (index, reason) in &sanitized.excluded {
                    warn!(index, reason = %reason, "excluding listing from dataset");
                }
                debug!(
                    fetched,
                    kept = sanitized.records.len(),
                    excluded = sanitized.excluded.len(),
                    "listing dataset loaded"
                );
                self.status = LoadStatus::Loaded {
                    records: sanitized.records.len(),
                    excluded: sanitized.excluded.len(),
                    loaded_at: Utc::now(),
                };
                self.records = sanitized.records;
            }
            Err(err) => {
                warn!(error = %err, "listing dataset load failed");
                self.records.clear();
                self.status = LoadStatus::Failed {
                    reason: err.to_string(),
                    failed_at: Utc::now(),
                };
            }
        }
        self.phase()
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(PricePolicy::default())
    }
}
