//! In-memory [`Transport`] for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::error::MapsError;
use crate::transport::Transport;

/// A request observed by [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Replays canned JSON bodies in order and records every request.
pub(crate) struct ScriptedTransport {
    bodies: Mutex<VecDeque<Value>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(bodies: impl IntoIterator<Item = Value>) -> Self {
        Self {
            bodies: Mutex::new(bodies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String, MapsError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(RecordedCall {
                path: path.to_owned(),
                query: query.to_vec(),
            });
        let body = self
            .bodies
            .lock()
            .expect("bodies lock poisoned")
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {path}: script exhausted"));
        Ok(body.to_string())
    }
}

pub(crate) fn zero_results() -> Value {
    json!({ "status": "ZERO_RESULTS", "results": [] })
}

/// An `OK` geocode body with one result. Each component is
/// `(long_name, short_name, "type1,type2")`.
pub(crate) fn geocode_ok(components: &[(&str, &str, &str)]) -> Value {
    let address_components: Vec<Value> = components
        .iter()
        .map(|(long, short, types)| {
            json!({
                "long_name": long,
                "short_name": short,
                "types": types.split(',').collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({
        "status": "OK",
        "results": [{
            "address_components": address_components,
            "geometry": { "location": { "lat": 32.3668052, "lng": -86.2999689 } },
        }]
    })
}
