// Boolean-as-integer JSON transcoding
//
// The v6 API transmits many logically boolean fields as `0`/`1`. Records
// keep them as `Option<bool>` and declare which wire fields carry the
// encoding through `IntBoolRecord::FIELDS`. Conversion is a two-pass walk
// over a `serde_json::Value` tree: serialize naturally and then rewrite the
// marked fields (encode), or rewrite the marked fields and then
// materialize the typed record (decode).

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Error;

/// One entry in a record's field registry.
#[derive(Debug, Clone, Copy)]
pub enum FieldSpec {
    /// A wire field holding `0`/`1` that maps to `Option<bool>`.
    IntBool(&'static str),
    /// A wire field holding a nested record, or an array of them, whose
    /// own registry is returned by the function.
    Record(&'static str, fn() -> &'static [FieldSpec]),
    /// A wire field holding an object keyed by arbitrary strings whose
    /// values are nested records.
    Map(&'static str, fn() -> &'static [FieldSpec]),
}

impl FieldSpec {
    pub const fn int_bool(name: &'static str) -> Self {
        Self::IntBool(name)
    }

    pub const fn record<T: IntBoolRecord>(name: &'static str) -> Self {
        Self::Record(name, T::fields)
    }

    pub const fn map<T: IntBoolRecord>(name: &'static str) -> Self {
        Self::Map(name, T::fields)
    }
}

/// A resource record whose boolean-as-integer fields are declared once.
///
/// Names in `FIELDS` are wire (JSON) names, not Rust field names.
pub trait IntBoolRecord: Serialize + DeserializeOwned {
    const FIELDS: &'static [FieldSpec];

    fn fields() -> &'static [FieldSpec] {
        Self::FIELDS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

// ── Entry points ────────────────────────────────────────────────────

/// Serialize a record, emitting every marked boolean as `1` or `0`.
pub fn encode<T: IntBoolRecord>(record: &T) -> Result<Vec<u8>, Error> {
    let value = encode_value(record)?;
    serde_json::to_vec(&value).map_err(|e| Error::Encode(e.to_string()))
}

/// Serialize a record into a JSON tree with marked booleans rewritten.
pub fn encode_value<T: IntBoolRecord>(record: &T) -> Result<Value, Error> {
    let mut value = serde_json::to_value(record).map_err(|e| Error::Encode(e.to_string()))?;
    rewrite(&mut value, T::FIELDS, Direction::Encode, "")?;
    Ok(value)
}

/// Parse raw bytes into a record, reading marked `0`/`1` fields as booleans.
pub fn decode<T: IntBoolRecord>(bytes: &[u8]) -> Result<T, Error> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    decode_value(value)
}

/// Materialize a record from an already-parsed JSON tree.
pub fn decode_value<T: IntBoolRecord>(mut value: Value) -> Result<T, Error> {
    rewrite(&mut value, T::FIELDS, Direction::Decode, "")?;
    serde_json::from_value(value).map_err(|e| Error::Decode(e.to_string()))
}

// ── Tree walk ───────────────────────────────────────────────────────

fn rewrite(
    value: &mut Value,
    fields: &[FieldSpec],
    direction: Direction,
    path: &str,
) -> Result<(), Error> {
    match value {
        Value::Object(map) => rewrite_object(map, fields, direction, path),
        Value::Array(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                rewrite(item, fields, direction, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        // Shape mismatches are left for serde to report.
        _ => Ok(()),
    }
}

fn rewrite_object(
    map: &mut Map<String, Value>,
    fields: &[FieldSpec],
    direction: Direction,
    path: &str,
) -> Result<(), Error> {
    for spec in fields {
        match *spec {
            FieldSpec::IntBool(name) => {
                // Missing fields stay missing in both directions.
                if let Some(slot) = map.get_mut(name) {
                    let converted = match direction {
                        Direction::Encode => bool_to_int(slot, &join(path, name))?,
                        Direction::Decode => int_to_bool(slot, &join(path, name))?,
                    };
                    *slot = converted;
                }
            }
            FieldSpec::Record(name, nested) => {
                if let Some(child) = map.get_mut(name) {
                    rewrite(child, nested(), direction, &join(path, name))?;
                }
            }
            FieldSpec::Map(name, nested) => {
                if let Some(Value::Object(entries)) = map.get_mut(name) {
                    let base = join(path, name);
                    for (key, entry) in entries {
                        rewrite(entry, nested(), direction, &format!("{base}[{key:?}]"))?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn bool_to_int(value: &Value, path: &str) -> Result<Value, Error> {
    match value {
        Value::Bool(b) => Ok(Value::from(u8::from(*b))),
        Value::Null => Ok(Value::Null),
        other => Err(Error::Encode(format!(
            "field `{path}` expected a boolean, got {other}"
        ))),
    }
}

fn int_to_bool(value: &Value, path: &str) -> Result<Value, Error> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(Value::Bool(false)),
            Some(1) => Ok(Value::Bool(true)),
            _ => Err(Error::Decode(format!(
                "field `{path}` expected 0 or 1, got {n}"
            ))),
        },
        other => Err(Error::Decode(format!(
            "field `{path}` expected 0 or 1, got {other}"
        ))),
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_owned()
    } else {
        format!("{path}.{name}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_support {
    use std::fmt::Debug;

    use serde_json::Value;

    use super::{FieldSpec, IntBoolRecord, decode, encode, encode_value};

    /// All `3^count` assignments of `{true, false, absent}` to `count` flags.
    pub(crate) fn flag_combinations(count: usize) -> impl Iterator<Item = Vec<Option<bool>>> {
        let total = (0..count).fold(1_usize, |acc, _| acc * 3);
        (0..total).map(move |mut n| {
            (0..count)
                .map(|_| {
                    let state = match n % 3 {
                        0 => Some(true),
                        1 => Some(false),
                        _ => None,
                    };
                    n /= 3;
                    state
                })
                .collect()
        })
    }

    /// Encode then decode, expecting the record back unchanged.
    pub(crate) fn assert_round_trip<T: IntBoolRecord + PartialEq + Debug>(record: &T) {
        let back: T = decode(&encode(record).unwrap()).unwrap();
        pretty_assertions::assert_eq!(&back, record);
    }

    /// For a record with every flag and nested record populated, check that
    /// each registered wire name appears as `0`/`1` and no JSON boolean
    /// survives anywhere in the output.
    pub(crate) fn assert_registry_matches<T: IntBoolRecord>(record: &T) {
        let value = encode_value(record).unwrap();
        assert_flags_present(&value, T::FIELDS, "");
        assert_no_booleans(&value, "");
    }

    fn assert_flags_present(value: &Value, fields: &[FieldSpec], path: &str) {
        let Value::Object(map) = value else {
            panic!("`{path}` is not an object: {value}");
        };
        for spec in fields {
            match *spec {
                FieldSpec::IntBool(name) => {
                    let slot = map.get(name);
                    assert!(
                        matches!(slot, Some(Value::Number(n)) if n.as_u64().is_some_and(|n| n <= 1)),
                        "`{path}.{name}` should be 0 or 1, got {slot:?}"
                    );
                }
                FieldSpec::Record(name, nested) => match map.get(name) {
                    Some(Value::Array(items)) => {
                        assert!(!items.is_empty(), "`{path}.{name}` is empty");
                        for (i, item) in items.iter().enumerate() {
                            assert_flags_present(item, nested(), &format!("{path}.{name}[{i}]"));
                        }
                    }
                    Some(child) => assert_flags_present(child, nested(), &format!("{path}.{name}")),
                    None => panic!("`{path}.{name}` missing from {value}"),
                },
                FieldSpec::Map(name, nested) => match map.get(name) {
                    Some(Value::Object(entries)) if !entries.is_empty() => {
                        for (key, entry) in entries {
                            assert_flags_present(entry, nested(), &format!("{path}.{name}[{key:?}]"));
                        }
                    }
                    other => panic!("`{path}.{name}` should be a non-empty object, got {other:?}"),
                },
            }
        }
    }

    fn assert_no_booleans(value: &Value, path: &str) {
        match value {
            Value::Bool(b) => panic!("unregistered boolean `{path}` = {b}"),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    assert_no_booleans(item, &format!("{path}[{i}]"));
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    assert_no_booleans(item, &format!("{path}.{key}"));
                }
            }
            _ => {}
        }
    }
}
