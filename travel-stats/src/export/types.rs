//! Träwelling export DTOs.
//!
//! These map the JSON export directly. Only the fields the reports need are
//! declared; everything else is ignored. Timestamps stay strings here and are
//! parsed on demand, because older exports are not always consistent about
//! which ones are present.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::error::LoadError;
use crate::domain::TripIdentity;

/// Parse an export timestamp such as `2023-07-01T08:15:00+02:00`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, LoadError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| LoadError::Timestamp {
        value: value.to_string(),
        source,
    })
}

/// A complete export file.
#[derive(Debug, Clone, Deserialize)]
pub struct Export {
    pub meta: Meta,

    #[serde(rename = "data")]
    pub entries: Vec<Entry>,
}

/// Export header: who exported which period, and when.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub user: User,
    pub from: String,
    pub to: String,
    pub exported_at: String,
}

/// Account totals at export time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub display_name: String,
    pub username: String,

    /// Metres.
    pub train_distance: u64,

    /// Minutes.
    pub train_duration: u64,

    pub points: i64,
}

/// One check-in.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub status: Status,
    pub trip: Trip,
}

impl Entry {
    /// The trip as seen by operator classification.
    ///
    /// Uses the termini of the whole trip, not where the user got on.
    pub fn identity(&self) -> TripIdentity {
        TripIdentity::new(
            &self.trip.line_name,
            &self.trip.origin.name,
            &self.trip.destination.name,
        )
    }

    /// Operator name reported by Träwelling, if any.
    pub fn upstream_operator(&self) -> Option<&str> {
        self.status
            .train
            .operator
            .as_ref()
            .map(|operator| operator.name.as_str())
    }

    /// Scheduled departure of the check-in.
    pub fn departure(&self) -> Result<DateTime<FixedOffset>, LoadError> {
        parse_timestamp(&self.status.train.origin.departure)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: u64,

    /// Free-text note, empty when none was written.
    #[serde(default)]
    pub body: Option<String>,

    pub created_at: String,
    pub train: Train,

    #[serde(default)]
    pub event: Option<Event>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub name: String,
}

/// The travelled section. Not necessarily a train: buses are recorded too.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    /// Mode of transport, e.g. `"regional"` or `"bus"`.
    pub category: String,
    pub line_name: String,

    /// Metres.
    pub distance: u64,

    /// Minutes.
    pub duration: u64,

    pub points: i64,

    /// Where the user boarded.
    pub origin: Stop,

    /// Where the user alighted.
    pub destination: Stop,

    #[serde(default)]
    pub operator: Option<TrainOperator>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainOperator {
    pub identifier: String,
    pub name: String,
}

/// A boarding or alighting stop with its times.
///
/// `arrival` and `departure` are always set; the planned and real variants
/// are missing at the first and last stop or when no live data existed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub name: String,
    pub arrival: String,
    pub arrival_planned: Option<String>,
    pub arrival_real: Option<String>,
    pub departure: String,
    pub departure_planned: Option<String>,
    pub departure_real: Option<String>,
}

impl Stop {
    /// Combined arrival and departure delay in seconds. Negative when early.
    pub fn delay_secs(&self) -> Result<i64, LoadError> {
        let departure = seconds_between(
            self.departure_planned.as_deref().unwrap_or(&self.departure),
            self.departure_real.as_deref().unwrap_or(&self.departure),
        )?;
        let arrival = seconds_between(
            self.arrival_planned.as_deref().unwrap_or(&self.arrival),
            self.arrival_real.as_deref().unwrap_or(&self.arrival),
        )?;
        Ok(departure + arrival)
    }
}

fn seconds_between(planned: &str, real: &str) -> Result<i64, LoadError> {
    Ok((parse_timestamp(real)? - parse_timestamp(planned)?).num_seconds())
}

/// The whole vehicle run the check-in belongs to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: u64,
    pub category: String,
    pub line_name: String,
    pub origin: Place,
    pub destination: Place,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub name: String,
}
