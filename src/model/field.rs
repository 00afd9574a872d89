//! Form field value objects.

use super::validation::validate_value;

/// The kind of input a field accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// A calendar date typed as `YYYY-MM-DD`.
    Date,
    /// A non-negative whole number.
    Number,
    /// One of a fixed list of options; the empty value means "nothing selected".
    Select(Vec<String>),
}

/// Visual validation state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    /// Untouched, or reset after an edit or a successful submission.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// A single named form input with its configuration, value and validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Machine name, used as the snapshot key.
    pub name: String,
    /// Display label.
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Hidden fields are skipped by focus traversal and validation.
    pub visible: bool,
    pub value: String,
    pub indicator: Indicator,
    /// Message from the last failed validation, if the field is invalid.
    pub error: Option<String>,
}

impl Field {
    /// Creates a visible, empty field.
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            visible: true,
            value: String::new(),
            indicator: Indicator::Neutral,
            error: None,
        }
    }

    /// Creates a required text field.
    pub fn required_text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text, true)
    }

    /// Creates an optional text field.
    pub fn optional_text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text, false)
    }

    /// Creates a select field over the given options.
    pub fn select(name: &str, label: &str, options: &[&str], required: bool) -> Self {
        let options = options.iter().map(|o| (*o).to_string()).collect();
        Self::new(name, label, FieldKind::Select(options), required)
    }

    /// Starts the field hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Returns `true` for select fields.
    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select(_))
    }

    /// Validates the current value and updates the indicator.
    ///
    /// Hidden fields always pass and keep their indicator.
    pub fn validate(&mut self) -> bool {
        if !self.visible {
            return true;
        }
        match validate_value(&self.kind, self.required, &self.value) {
            Ok(()) => {
                self.indicator = Indicator::Valid;
                self.error = None;
                true
            }
            Err(e) => {
                self.indicator = Indicator::Invalid;
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Resets an invalid field to neutral so the user can retype before the next blur.
    pub fn clear_error(&mut self) {
        if self.indicator == Indicator::Invalid {
            self.indicator = Indicator::Neutral;
            self.error = None;
        }
    }

    /// Clears the value and resets the indicator.
    pub fn reset(&mut self) {
        self.value.clear();
        self.indicator = Indicator::Neutral;
        self.error = None;
    }

    /// Moves a select field to the next or previous option, wrapping through "nothing selected".
    ///
    /// No-op for other kinds.
    pub fn cycle_option(&mut self, forward: bool) {
        let FieldKind::Select(options) = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        // Slot 0 is the empty selection, slots 1..=len are the options.
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|o| *o == self.value)
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        self.value = match next {
            0 => String::new(),
            n => options[n - 1].clone(),
        };
    }

    /// Returns the value shown when rendering the field.
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Select(_) if self.value.is_empty() => "‹ Select… ›".to_string(),
            FieldKind::Select(_) => format!("‹ {} ›", self.value),
            _ => self.value.clone(),
        }
    }
}
