use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// Identity used to count a joiner across events.
///
/// Any non-empty email wins (trimmed, lowercased); only a missing, null
/// or `""` email falls back to the trimmed name. An empty result means the
/// joiner cannot be identified.
pub fn joiner_identity(joiner: &Map<String, Value>) -> String {
    match joiner.get("email").and_then(Value::as_str) {
        Some(email) if !email.is_empty() => email.trim().to_lowercase(),
        _ => joiner
            .get("name")
            .and_then(Value::as_str)
            .map(|name| name.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Distinct identities of one event's joiners, in order of appearance.
///
/// Non-object joiners and unidentifiable ones are skipped.
fn event_identities(event: &Map<String, Value>) -> Vec<String> {
    let mut seen = HashSet::new();

    event
        .get("joiners")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
        .map(joiner_identity)
        .filter(|ident| !ident.is_empty() && seen.insert(ident.clone()))
        .collect()
}

/// Joiner identities that attend two or more distinct events, in
/// first-seen order.
///
/// Works on untyped records so it accepts both validated events
/// (serialized) and whatever else the storage file holds. Records that
/// are not JSON objects are ignored.
pub fn joiners_in_multiple_meetings(events: &[Value]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for event in events.iter().filter_map(Value::as_object) {
        for ident in event_identities(event) {
            let count = counts.entry(ident.clone()).or_insert(0);
            if *count == 0 {
                order.push(ident);
            }
            *count += 1;
        }
    }

    order.into_iter().filter(|ident| counts[ident] >= 2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, Person};
    use serde_json::json;

    fn joiner(name: &str, email: Option<&str>) -> Person {
        Person {
            name: name.to_string(),
            email: email.map(str::to_string),
        }
    }

    fn event(id: i64, joiners: Vec<Person>) -> Value {
        let ev = Event {
            id,
            date: "2024-01-01".to_string(),
            organizer: joiner("Org", Some("org@corp.com")),
            joiners,
            status: "open".to_string(),
            event_type: "Meeting".to_string(),
        };
        serde_json::to_value(ev).unwrap()
    }

    fn identity(value: Value) -> String {
        joiner_identity(value.as_object().unwrap())
    }

    #[test]
    fn test_identity_prefers_email() {
        assert_eq!(identity(json!({"name": "Bob", "email": "  Bob@Mail.COM "})), "bob@mail.com");
        assert_eq!(identity(json!({"name": "  Bob  "})), "Bob");
        assert_eq!(identity(json!({"name": " Bob ", "email": ""})), "Bob");
        // A blank but non-empty email still counts as given, leaving nothing to identify
        assert_eq!(identity(json!({"name": " Bob ", "email": "   "})), "");
        assert_eq!(identity(json!({"name": "Bob", "email": null})), "Bob");
        assert_eq!(identity(json!({})), "");
    }

    #[test]
    fn test_duplicates_within_one_event_count_once() {
        let events = vec![
            event(1, vec![joiner("", Some("X@a.com")), joiner("", Some("x@a.com"))]),
            event(2, vec![joiner("", Some("x@a.com"))]),
        ];
        assert_eq!(joiners_in_multiple_meetings(&events), vec!["x@a.com"]);

        // Two copies inside a single event are still one meeting
        let single = vec![event(1, vec![joiner("", Some("X@a.com")), joiner("", Some("x@a.com"))])];
        assert!(joiners_in_multiple_meetings(&single).is_empty());
    }

    #[test]
    fn test_single_event_joiners_excluded() {
        let events = vec![
            event(1, vec![joiner("Ann", None), joiner("Ben", None)]),
            event(2, vec![joiner("Ann", None), joiner("Cid", None)]),
        ];
        assert_eq!(joiners_in_multiple_meetings(&events), vec!["Ann"]);
    }

    #[test]
    fn test_first_seen_order_and_name_fallback() {
        let events = vec![
            event(1, vec![joiner(" Zed ", None), joiner("Amy", Some("AMY@x.io"))]),
            event(2, vec![joiner("amy", Some("amy@x.io")), joiner("Zed", None)]),
            event(3, vec![joiner("", None)]),
            event(4, vec![joiner("  ", None)]),
        ];
        assert_eq!(joiners_in_multiple_meetings(&events), vec!["Zed", "amy@x.io"]);
    }

    #[test]
    fn test_raw_records_skip_non_mappings() {
        let events = vec![
            json!({"joiners": [{"email": "Pat@x.io"}, "pat@x.io", 7, null]}),
            json!({"joiners": [{"name": "Pat", "email": "  "}, {"name": "Pat", "email": "pat@x.io "}]}),
            json!("not an event"),
            json!({"joiners": "nope"}),
            json!({"id": 9}),
        ];
        assert_eq!(joiners_in_multiple_meetings(&events), vec!["pat@x.io"]);
    }

    #[test]
    fn test_no_events() {
        assert!(joiners_in_multiple_meetings(&[]).is_empty());
    }
}
