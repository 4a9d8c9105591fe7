// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bank-holiday feed loading.
//!
//! The feed comes in the GOV.UK `bank-holidays.json` shape: a map of
//! region division to an event list. Loading prefers the local
//! snapshot file and falls back to the live endpoint only when the
//! snapshot is missing or unreadable, so routine syncs never depend on
//! the network.

use chrono::NaiveDate;
use dutybook_domain::BankHoliday;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// The authoritative remote source.
pub const GOV_UK_URL: &str = "https://www.gov.uk/bank-holidays.json";

/// Default region division.
pub const DEFAULT_REGION: &str = "england-and-wales";

/// Errors raised while loading a holiday feed.
#[derive(Debug, Error)]
pub enum HolidayFeedError {
    /// The snapshot file does not exist.
    #[error("snapshot file not found: {0}")]
    SnapshotMissing(String),
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    SnapshotRead {
        /// Path of the unreadable snapshot.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The feed body could not be parsed.
    #[error("invalid holiday feed: {0}")]
    InvalidFeed(String),
    /// The feed carries no data for the requested region.
    #[error("no data for region '{0}'")]
    UnknownRegion(String),
    /// The remote request failed.
    #[error("request to {url} failed: {source}")]
    RequestFailed {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },
}

#[derive(Debug, Deserialize)]
struct GovUkEvent {
    title: String,
    date: String,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Deserialize)]
struct GovUkDivision {
    #[serde(default)]
    events: Vec<GovUkEvent>,
}

/// Parses a GOV.UK-shaped feed body, extracting one region's events.
///
/// # Errors
///
/// Returns an error if the body is not valid feed JSON, the region is
/// absent, or an event date fails to parse.
pub fn parse_feed(body: &str, region: &str) -> Result<Vec<BankHoliday>, HolidayFeedError> {
    let calendar: HashMap<String, GovUkDivision> =
        serde_json::from_str(body).map_err(|e| HolidayFeedError::InvalidFeed(e.to_string()))?;

    let division = calendar
        .get(region)
        .ok_or_else(|| HolidayFeedError::UnknownRegion(region.to_string()))?;

    let mut holidays = Vec::with_capacity(division.events.len());
    for event in &division.events {
        let date = NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").map_err(|e| {
            HolidayFeedError::InvalidFeed(format!("bad event date '{}': {e}", event.date))
        })?;
        holidays.push(BankHoliday::new(
            date,
            event.title.clone(),
            event.notes.clone(),
        ));
    }
    Ok(holidays)
}

/// Loads the feed from a snapshot file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or invalid.
pub fn load_snapshot(path: &Path, region: &str) -> Result<Vec<BankHoliday>, HolidayFeedError> {
    if !path.exists() {
        return Err(HolidayFeedError::SnapshotMissing(
            path.display().to_string(),
        ));
    }
    let body = std::fs::read_to_string(path).map_err(|source| HolidayFeedError::SnapshotRead {
        path: path.display().to_string(),
        source,
    })?;
    parse_feed(&body, region)
}

/// Fetches the feed from the live GOV.UK endpoint.
///
/// # Errors
///
/// Returns an error if the request fails or the body is invalid.
pub fn fetch_remote(region: &str) -> Result<Vec<BankHoliday>, HolidayFeedError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|source| HolidayFeedError::RequestFailed {
            url: GOV_UK_URL.to_string(),
            source,
        })?;

    let body = client
        .get(GOV_UK_URL)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(|source| HolidayFeedError::RequestFailed {
            url: GOV_UK_URL.to_string(),
            source,
        })?;

    parse_feed(&body, region)
}

/// Which feed source to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FeedSource {
    /// Snapshot first, remote as fallback.
    Auto,
    /// Snapshot only.
    Local,
    /// Remote only.
    Api,
}

/// Loads holidays per the source policy: snapshot preferred, remote
/// only when needed.
///
/// # Errors
///
/// Returns an error when the selected source (or, for `Auto`, both
/// sources) cannot produce a dataset.
pub fn load_holidays(
    source: FeedSource,
    snapshot: &Path,
    region: &str,
) -> Result<Vec<BankHoliday>, HolidayFeedError> {
    match source {
        FeedSource::Local => load_snapshot(snapshot, region),
        FeedSource::Api => fetch_remote(region),
        FeedSource::Auto => match load_snapshot(snapshot, region) {
            Ok(holidays) => {
                info!(count = holidays.len(), "Loaded holidays from snapshot");
                Ok(holidays)
            }
            Err(err) => {
                warn!(%err, "Snapshot unavailable, falling back to remote feed");
                fetch_remote(region)
            }
        },
    }
}
