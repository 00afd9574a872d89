use std::fmt;

use super::field::Field;

/// Identifies which form a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    Service,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contact => f.write_str("contact"),
            Self::Service => f.write_str("service request"),
        }
    }
}

/// Trimmed field values captured at submit time, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub form: FormKind,
    values: Vec<(String, String)>,
}

impl FormSnapshot {
    /// Captures every field's trimmed value. Hidden fields contribute an empty value.
    pub fn capture(form: FormKind, fields: &[Field]) -> Self {
        let values = fields
            .iter()
            .map(|f| {
                let value = if f.visible { f.value.trim() } else { "" };
                (f.name.clone(), value.to_string())
            })
            .collect();
        Self { form, values }
    }

    /// Builds a snapshot directly from name/value pairs.
    pub fn from_pairs(form: FormKind, pairs: &[(&str, &str)]) -> Self {
        let values = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { form, values }
    }

    /// Returns the value for `name`, or an empty string if the form has no such field.
    pub fn value(&self, name: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Returns all name/value pairs in form order.
    pub fn values(&self) -> &[(String, String)] {
        &self.values
    }
}
