use std::fmt;

/// Primitive parameter value accepted by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! int_param {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                ParamValue::Int(value as i64)
            }
        })*
    };
}

int_param!(u8, u16, u32, u64, i32, i64);

/// Ordered command parameters, rendered as query-string pairs.
///
/// Setting a name twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert only when a value is present
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(v) = value {
            self.insert(name, v);
        }
    }

    /// Append `other`, replacing values of names already set
    pub fn merge(mut self, other: RequestParams) -> Self {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_render_as_api_strings() {
        let params = RequestParams::new()
            .with("DomainList", "a.com,b.net")
            .with("Years", 2u32)
            .with("Resubmit", true);

        assert_eq!(
            params.to_pairs(),
            vec![
                ("DomainList".to_string(), "a.com,b.net".to_string()),
                ("Years".to_string(), "2".to_string()),
                ("Resubmit".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = RequestParams::new().with("Page", 1u32).with("PageSize", 20u32);
        params.insert("Page", 3u32);
        params.insert_opt::<&str>("SearchTerm", None);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("Page").as_deref(), Some("3"));
        assert_eq!(params.to_pairs()[0].0, "Page");
    }

    #[test]
    fn test_merge_keeps_order_and_overrides() {
        let base = RequestParams::new().with("Years", 1u32).with("Type", "PositiveSSL");
        let extra = RequestParams::new().with("PromotionCode", "SAVE").with("Years", 2u32);
        let merged = base.merge(extra);

        let keys: Vec<String> = merged.to_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Years", "Type", "PromotionCode"]);
        assert_eq!(merged.get("Years").as_deref(), Some("2"));
    }
}
