//! vCard property types.

/// A single `NAME=VALUE` property parameter, e.g. `TYPE=CELL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    pub value: String,
}

impl VCardParameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }

    /// Creates a `TYPE` parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }
}

/// A vCard property with its raw text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Value written as-is on serialization.
    pub value: String,
}

impl VCardProperty {
    /// Creates a property with a text value and no parameters.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Adds a parameter, keeping insertion order.
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.params.push(param);
        self
    }
}
