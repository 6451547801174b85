//! Reshaping of raw command-response mappings into stable records.
//!
//! A [`ResultSpec`] says where the payload lives, which fields to rename, which
//! to coerce to booleans or dates, and whether the caller expects one object or
//! a list. Normalization never fails: values that do not coerce are passed through.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

/// Date patterns tried in order; the first that parses wins.
pub const DATETIME_PATTERNS: [&str; 4] = ["%m/%d/%Y", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d"];

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Object,
    List,
}

/// Result descriptor for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSpec {
    pub path: &'static [&'static str],
    /// `(from, to)` field renames applied after `@` stripping.
    pub rename: &'static [(&'static str, &'static str)],
    pub boolean_fields: &'static [&'static str],
    pub datetime_fields: &'static [&'static str],
    pub shape: Shape,
}

impl ResultSpec {
    pub const fn object(path: &'static [&'static str]) -> Self {
        Self { path, rename: &[], boolean_fields: &[], datetime_fields: &[], shape: Shape::Object }
    }

    pub const fn list(path: &'static [&'static str]) -> Self {
        Self { path, rename: &[], boolean_fields: &[], datetime_fields: &[], shape: Shape::List }
    }

    pub const fn rename(mut self, rename: &'static [(&'static str, &'static str)]) -> Self {
        self.rename = rename;
        self
    }

    pub const fn booleans(mut self, fields: &'static [&'static str]) -> Self {
        self.boolean_fields = fields;
        self
    }

    pub const fn datetimes(mut self, fields: &'static [&'static str]) -> Self {
        self.datetime_fields = fields;
        self
    }

    fn empty(&self) -> Value {
        match self.shape {
            Shape::Object => Value::Object(Map::new()),
            Shape::List => Value::Array(Vec::new()),
        }
    }
}

/// Normalize the payload under `spec.path`.
///
/// Returns an object or an array according to `spec.shape`; a missing path yields
/// an empty object or an empty array.
pub fn normalize(raw: &Value, spec: &ResultSpec) -> Value {
    normalize_segments(raw, spec.path.iter().copied(), spec)
}

/// Same as [`normalize`] with the path given as a dot-separated string, ignoring `spec.path`
pub fn normalize_at(raw: &Value, dotted_path: &str, spec: &ResultSpec) -> Value {
    normalize_segments(raw, dotted_path.split('.').filter(|s| !s.is_empty()), spec)
}

fn normalize_segments<'a>(raw: &Value, segments: impl Iterator<Item = &'a str>, spec: &ResultSpec) -> Value {
    let mut current = raw;
    for segment in segments {
        match current.get(segment) {
            Some(next) => current = next,
            None => return spec.empty(),
        }
    }

    match spec.shape {
        Shape::Object => normalize_item(current, spec),
        Shape::List => {
            let items: Vec<Value> = match current {
                Value::Array(items) => items.iter().map(|item| normalize_item(item, spec)).collect(),
                other => vec![normalize_item(other, spec)],
            };
            Value::Array(items)
        }
    }
}

fn normalize_item(item: &Value, spec: &ResultSpec) -> Value {
    let Value::Object(fields) = item else {
        return item.clone();
    };

    let mut out = Map::with_capacity(fields.len());
    for (raw_key, value) in fields {
        let stripped = raw_key.trim_start_matches('@');
        let key = spec
            .rename
            .iter()
            .find(|(from, _)| *from == stripped)
            .map(|(_, to)| *to)
            .unwrap_or(stripped);

        let value = if spec.datetime_fields.contains(&key) {
            parse_datetime(value)
        } else if key.starts_with("Is") || spec.boolean_fields.contains(&key) {
            coerce_bool(value)
        } else {
            coerce_literal_bool(value)
        };
        out.insert(key.to_string(), value);
    }
    Value::Object(out)
}

/// Boolean token set shared with the parser
pub fn bool_token(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "enabled" | "1" => Some(true),
        "false" | "no" | "disabled" | "0" => Some(false),
        _ => None,
    }
}

/// Coerce with the full token set; unknown values pass through
pub fn coerce_bool(value: &Value) -> Value {
    match value {
        Value::String(s) => bool_token(s).map(Value::Bool).unwrap_or_else(|| value.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Value::Bool(true),
            Some(0) => Value::Bool(false),
            _ => value.clone(),
        },
        _ => value.clone(),
    }
}

fn coerce_literal_bool(value: &Value) -> Value {
    match value {
        Value::String(s) if s.eq_ignore_ascii_case("true") => Value::Bool(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Value::Bool(false),
        _ => value.clone(),
    }
}

/// Parse with [`DATETIME_PATTERNS`] and render ISO-8601; unparsable values pass through
pub fn parse_datetime(value: &Value) -> Value {
    let Value::String(text) = value else {
        return value.clone();
    };
    let text = text.trim();

    for pattern in DATETIME_PATTERNS {
        let parsed = NaiveDateTime::parse_from_str(text, pattern)
            .ok()
            .or_else(|| NaiveDate::parse_from_str(text, pattern).ok().and_then(|d| d.and_hms_opt(0, 0, 0)));
        if let Some(parsed) = parsed {
            return Value::String(parsed.format(ISO_FORMAT).to_string());
        }
    }
    value.clone()
}
