use crate::model::{Field, Indicator};

/// Shows a dependent field, and makes it required, only while a trigger
/// field holds one of the listed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealRule {
    pub trigger: String,
    pub dependent: String,
    pub values: Vec<String>,
}

impl RevealRule {
    /// Creates a rule revealing `dependent` when `trigger` is one of `values`.
    pub fn new(trigger: &str, dependent: &str, values: &[&str]) -> Self {
        Self {
            trigger: trigger.to_string(),
            dependent: dependent.to_string(),
            values: values.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    /// Returns `true` if the dependent should be shown for `trigger_value`.
    pub fn reveals(&self, trigger_value: &str) -> bool {
        self.values.iter().any(|v| v == trigger_value)
    }

    /// Applies the rule to `fields`. A dependent that becomes hidden loses its value.
    ///
    /// No-op if either field is missing.
    pub fn apply(&self, fields: &mut [Field]) {
        let Some(trigger_value) = fields
            .iter()
            .find(|f| f.name == self.trigger)
            .map(|f| f.value.clone())
        else {
            return;
        };
        let Some(dependent) = fields.iter_mut().find(|f| f.name == self.dependent) else {
            return;
        };

        let shown = self.reveals(&trigger_value);
        dependent.visible = shown;
        dependent.required = shown;
        if !shown {
            dependent.value.clear();
            dependent.indicator = Indicator::Neutral;
            dependent.error = None;
        }
    }
}
