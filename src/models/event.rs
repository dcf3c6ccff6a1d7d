use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Organizer or joiner of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,
}

/// Meeting record (one element of the storage file)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: i64,

    /// Scheduling date, kept verbatim (e.g. "2024-01-01")
    pub date: String,

    pub organizer: Person,

    #[serde(default)]
    pub joiners: Vec<Person>,

    pub status: String,

    #[serde(rename = "type")]
    pub event_type: String,
}

/// Query criteria for GET /events/filter
///
/// Every criterion is optional; the ones present are ANDed.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventFilter {
    /// Exact date match
    pub date: Option<String>,

    /// Case-insensitive substring of organizer name or email
    pub organizer: Option<String>,

    /// Case-insensitive exact status
    pub status: Option<String>,

    /// Case-insensitive exact type
    #[serde(alias = "type")]
    pub event_type: Option<String>,
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// String field of a stored record; missing or non-string reads as ""
fn text<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}

impl EventFilter {
    /// Checks a stored record (untyped, as kept on disk)
    pub fn matches(&self, record: &Value) -> bool {
        if let Some(date) = criterion(&self.date) {
            if record.get("date").and_then(Value::as_str) != Some(date) {
                return false;
            }
        }

        if let Some(organizer) = criterion(&self.organizer) {
            let needle = organizer.to_lowercase();
            let Some(org) = record.get("organizer") else {
                return false;
            };
            let in_name = text(org, "name").to_lowercase().contains(&needle);
            let in_email = text(org, "email").to_lowercase().contains(&needle);
            if !in_name && !in_email {
                return false;
            }
        }

        if let Some(status) = criterion(&self.status) {
            if text(record, "status").to_lowercase() != status.to_lowercase() {
                return false;
            }
        }

        if let Some(event_type) = criterion(&self.event_type) {
            if text(record, "type").to_lowercase() != event_type.to_lowercase() {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, records: Vec<Value>) -> Vec<Value> {
        records.into_iter().filter(|record| self.matches(record)).collect()
    }
}
