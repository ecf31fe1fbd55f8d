// Response-shape normalization
//
// List endpoints wrap records under a fixed envelope key. SIP-server tests
// additionally return their credential fields flattened onto the test
// object instead of inside `targetSipCredentials`, so their bodies are
// decoded twice from the same buffered bytes and merged.

use serde_json::Value;
use tracing::trace;

use crate::codec::{self, IntBoolRecord};
use crate::error::Error;
use crate::models::{SipAuthData, SipServer};

/// Envelope key for `/agents` responses.
pub const AGENTS_KEY: &str = "agents";
/// Envelope key for `/roles` responses.
pub const ROLES_KEY: &str = "roles";
/// Envelope key for `/tests` responses (singular on the wire).
pub const TEST_KEY: &str = "test";

/// Extract and decode the records listed under `key`.
///
/// A missing or `null` key yields an empty list. Element failures keep the
/// underlying message and append the element position, e.g.
/// `... got 2 (in roles[1])`.
pub fn decode_envelope<T: IntBoolRecord>(body: &[u8], key: &str) -> Result<Vec<T>, Error> {
    let root: Value = serde_json::from_slice(body).map_err(|e| Error::Decode(e.to_string()))?;

    let mut envelope = match root {
        Value::Object(map) => map,
        other => {
            return Err(Error::Decode(format!(
                "expected an object with key `{key}`, got {}",
                kind(&other)
            )));
        }
    };

    let items = match envelope.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(Error::Decode(format!(
                "expected `{key}` to be an array, got {}",
                kind(&other)
            )));
        }
    };
    trace!(key, count = items.len(), "decoding envelope");

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            codec::decode_value(item).map_err(|e| match e {
                Error::Decode(message) => Error::Decode(format!("{message} (in {key}[{i}])")),
                other => other,
            })
        })
        .collect()
}

/// Take the first record, failing with `EmptyResult` when there is none.
pub fn first<T>(items: Vec<T>, resource: &'static str) -> Result<T, Error> {
    items
        .into_iter()
        .next()
        .ok_or(Error::EmptyResult { resource })
}

/// Decode a `{"test": [...]}` body of SIP-server tests.
///
/// When a test object carries a top-level `authUser`, the flattened
/// credential fields replace its `target_sip_credentials`. Otherwise the
/// nested object (if any) is kept as decoded.
pub fn decode_sip_servers(body: &[u8]) -> Result<Vec<SipServer>, Error> {
    let mut tests: Vec<SipServer> = decode_envelope(body, TEST_KEY)?;
    let flattened: Vec<SipAuthData> = decode_envelope(body, TEST_KEY)?;

    for (test, credentials) in tests.iter_mut().zip(flattened) {
        if credentials.auth_user.is_some() {
            trace!(test_id = ?test.test_id, "moving flattened SIP credentials");
            test.target_sip_credentials = Some(credentials);
        }
    }
    Ok(tests)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
