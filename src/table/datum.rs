use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::foundation::error::{AlluvialError, AlluvialResult};

/// One categorical cell: a group key, stratum key or alluvium identity.
///
/// `Datum` is totally ordered and hashable so it can drive both sorted grouping
/// and hash-set membership. Variants order as `Null < Bool < numbers < Text`;
/// `Int` and `Float` compare numerically, an `Int` sorting before a `Float` of
/// equal value. Floats compare by their total order, so two floats are equal
/// only when bit-identical.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Datum {
    /// Missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl Datum {
    /// Convert a scalar JSON value. Arrays and objects are rejected.
    pub fn from_json(value: &serde_json::Value) -> AlluvialResult<Self> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Self::Int(i)),
                None => n
                    .as_f64()
                    .map(Self::Float)
                    .ok_or_else(|| AlluvialError::validation(format!("unsupported number {n}"))),
            },
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(AlluvialError::validation(
                "table cells must be scalars (null, bool, number or string)",
            )),
        }
    }

    /// Infer a datum from a raw text field: empty is `Null`, then integer,
    /// then float, otherwise text.
    pub fn infer(field: &str) -> Self {
        let field = field.trim();
        if field.is_empty() {
            return Self::Null;
        }
        if let Ok(i) = field.parse::<i64>() {
            return Self::Int(i);
        }
        match field.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::Float(f),
            _ => Self::Text(field.to_owned()),
        }
    }

    /// Whether this is [`Datum::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl PartialEq for Datum {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Datum {}

impl PartialOrd for Datum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Datum {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b).then(Ordering::Less),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)).then(Ordering::Greater),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Datum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Datum {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Datum {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Datum {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/datum.rs"]
mod tests;
