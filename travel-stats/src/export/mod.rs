//! Träwelling export loading.

mod error;
mod load;
mod types;

pub use error::LoadError;
pub use load::{Dataset, DateRange, load_all, load_file, merge};
pub use types::{
    Entry, Event, Export, Meta, Place, Status, Stop, Train, TrainOperator, Trip, User,
    parse_timestamp,
};

/// JSON builders for tests that need realistic export data.
#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{Value, json};

    use super::{Dataset, Entry, Export, merge};

    /// A check-in on a 10 km, 15 minute ride without live data.
    pub fn json_entry(id: u64, line: &str, origin: &str, destination: &str) -> Value {
        json!({
            "status": {
                "id": id,
                "body": "",
                "createdAt": "2023-07-01T08:00:00+02:00",
                "train": {
                    "category": "regional",
                    "lineName": line,
                    "distance": 10000,
                    "duration": 15,
                    "points": 5,
                    "origin": {
                        "name": origin,
                        "arrival": "2023-07-01T08:00:00+02:00",
                        "departure": "2023-07-01T08:00:00+02:00"
                    },
                    "destination": {
                        "name": destination,
                        "arrival": "2023-07-01T08:15:00+02:00",
                        "departure": "2023-07-01T08:15:00+02:00"
                    },
                    "operator": null
                },
                "event": null
            },
            "trip": {
                "id": id * 10,
                "category": "regional",
                "lineName": line,
                "origin": {"name": origin},
                "destination": {"name": destination}
            }
        })
    }

    pub fn json_export(entries: Vec<Value>, from: &str, to: &str, exported_at: &str) -> Value {
        json!({
            "meta": {
                "user": {
                    "displayName": "Traveller",
                    "username": "traveller",
                    "trainDistance": 123456,
                    "trainDuration": 600,
                    "points": 42
                },
                "from": from,
                "to": to,
                "exportedAt": exported_at
            },
            "data": entries
        })
    }

    pub fn entry(json: Value) -> Entry {
        serde_json::from_value(json).unwrap()
    }

    /// A dataset for July 2023 holding `entries`.
    pub fn dataset(entries: Vec<Value>) -> Dataset {
        let export: Export = serde_json::from_value(json_export(
            entries,
            "2023-07-01T00:00:00+02:00",
            "2023-07-31T23:59:59+02:00",
            "2023-08-01T10:00:00+02:00",
        ))
        .unwrap();
        merge(vec![export]).unwrap()
    }
}
