//! Constant records and their values

use serde::Serialize;
use std::fmt;

/// Value carried by a constant
///
/// Production constants are floats. Integers and raw literals exist so that
/// callers can register anything that has a textual form in the target
/// language; nothing here checks that the text is a valid literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    /// Floating point value
    Float(f64),
    /// Integer value
    Integer(i64),
    /// Verbatim literal text
    Literal(String),
}

impl ConstantValue {
    /// Numeric view of the value, `None` for literals
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            Self::Literal(_) => None,
        }
    }

    /// Returns true if the value is a float or an integer
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps a decimal point or an exponent, e.g. `299792458.0`
            // and `1.327124400419394e20`, so the text stays a float literal.
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Literal(text) => formatter.write_str(text),
        }
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for ConstantValue {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// Ordered list of citations backing a constant
///
/// Built from a single string, a list of strings, or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct References(Vec<String>);

impl References {
    /// No references
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Iterates over the citations in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of citations
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no citations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Citations as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'refs> IntoIterator for &'refs References {
    type Item = &'refs String;
    type IntoIter = std::slice::Iter<'refs, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&str> for References {
    fn from(reference: &str) -> Self {
        Self(vec![reference.to_string()])
    }
}

impl From<String> for References {
    fn from(reference: String) -> Self {
        Self(vec![reference])
    }
}

impl From<Vec<String>> for References {
    fn from(references: Vec<String>) -> Self {
        Self(references)
    }
}

impl From<Vec<&str>> for References {
    fn from(references: Vec<&str>) -> Self {
        Self(references.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for References {
    fn from(references: [&str; N]) -> Self {
        Self(references.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for References {
    fn from(references: Option<T>) -> Self {
        references.map_or_else(Self::default, Into::into)
    }
}

/// A named physical or mission constant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constant {
    /// Name the constant was defined with
    pub name: String,
    /// Value
    pub value: ConstantValue,
    /// Unit, if the constant has one
    pub unit: Option<String>,
    /// Human readable summary
    pub description: String,
    /// Uncertainty on the value
    pub error: Option<f64>,
    /// Citations
    pub references: References,
}

impl Constant {
    /// Creates a constant without uncertainty or references
    pub fn new(
        name: impl Into<String>,
        value: impl Into<ConstantValue>,
        unit: Option<&str>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            unit: unit.map(str::to_string),
            description: description.into(),
            error: None,
            references: References::none(),
        }
    }

    /// Sets the uncertainty
    #[must_use]
    pub fn with_error(mut self, error: Option<f64>) -> Self {
        self.error = error;
        self
    }

    /// Sets the references
    #[must_use]
    pub fn with_references(mut self, references: impl Into<References>) -> Self {
        self.references = references.into();
        self
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(formatter, "<{} ({} {})>", self.name, self.value, unit),
            None => write!(formatter, "<{} ({})>", self.name, self.value),
        }
    }
}
