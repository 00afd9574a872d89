//! The form controller: validate → submit → report → restore.

use crate::model::{Field, FormKind, FormSnapshot};
use crate::submit::SubmissionError;

use super::rules::RevealRule;

/// User-visible texts for one form. Treated as configuration, not logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessages {
    /// Label of the idle submit control.
    pub submit_label: String,
    /// Label shown on the submit control while a submission is in flight.
    pub busy_label: String,
    /// Status when validation fails.
    pub rejected: String,
    /// Status when the submission action succeeds.
    pub success: String,
    /// Status when the submission action fails.
    pub failure: String,
}

/// Where the controller is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ready; the submit control is enabled.
    #[default]
    Idle,
    /// A submission action is pending.
    Submitting,
    /// The action settled and the status is shown; waiting for the restore delay.
    Settled,
}

/// Colour of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Text shown in the form's status region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub text: String,
}

impl Status {
    fn success(text: &str) -> Self {
        Self {
            tone: Tone::Success,
            text: text.to_string(),
        }
    }

    fn error(text: &str) -> Self {
        Self {
            tone: Tone::Error,
            text: text.to_string(),
        }
    }
}

/// Result of [`FormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields passed; hand the snapshot to the submission action.
    Started(FormSnapshot),
    /// At least one field failed validation; nothing is sent.
    Rejected,
    /// A submission is already in flight; the submit control is disabled.
    Busy,
}

/// Drives one form through validation, submission and status reporting.
#[derive(Debug, Clone)]
pub struct FormController {
    kind: FormKind,
    fields: Vec<Field>,
    rules: Vec<RevealRule>,
    messages: FormMessages,
    phase: Phase,
    status: Option<Status>,
    focus: usize,
}

impl FormController {
    /// Creates an idle controller. Reveal rules are applied immediately.
    pub fn new(
        kind: FormKind,
        fields: Vec<Field>,
        rules: Vec<RevealRule>,
        messages: FormMessages,
    ) -> Self {
        let mut controller = Self {
            kind,
            fields,
            rules,
            messages,
            phase: Phase::Idle,
            status: None,
            focus: 0,
        };
        controller.apply_rules();
        controller
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the field named `name`, if any.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.fields.get(self.focus)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Returns `true` while no submission is in flight or settling.
    pub fn is_submit_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Returns the submit control's current label.
    pub fn submit_label(&self) -> &str {
        if self.is_submit_enabled() {
            &self.messages.submit_label
        } else {
            &self.messages.busy_label
        }
    }

    /// Moves focus to the next visible field, validating the one being left.
    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    /// Moves focus to the previous visible field, validating the one being left.
    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    /// Appends a character to the focused text field.
    pub fn insert_char(&mut self, ch: char) {
        self.edit_focused(|value| value.push(ch));
    }

    /// Deletes the last character of the focused text field.
    pub fn delete_char(&mut self) {
        self.edit_focused(|value| {
            value.pop();
        });
    }

    /// Cycles the focused select field's option and re-applies reveal rules.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return;
        };
        if !field.is_select() {
            return;
        }
        field.cycle_option(forward);
        self.clear_field_error(self.focus);
        self.apply_rules();
    }

    /// Sets a field's value as if typed, then re-applies reveal rules.
    ///
    /// Returns `false` if the form has no field named `name`.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        let Some(index) = self.fields.iter().position(|f| f.name == name) else {
            return false;
        };
        self.fields[index].value = value.to_string();
        self.clear_field_error(index);
        self.apply_rules();
        true
    }

    /// Validates the field at `index`, updating its indicator.
    ///
    /// Out-of-range indices count as valid.
    pub fn validate_field(&mut self, index: usize) -> bool {
        self.fields.get_mut(index).is_none_or(Field::validate)
    }

    /// Resets the field at `index` to neutral if it is marked invalid.
    pub fn clear_field_error(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.clear_error();
        }
    }

    /// Validates every field and, if all pass, enters [`Phase::Submitting`].
    ///
    /// Every field is validated so each gets an indicator, even after the
    /// first failure.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != Phase::Idle {
            tracing::debug!(form = %self.kind, phase = ?self.phase, "submit ignored while busy");
            return SubmitOutcome::Busy;
        }

        self.status = None;
        let valid = self
            .fields
            .iter_mut()
            .fold(true, |valid, field| field.validate() && valid);
        if !valid {
            tracing::info!(form = %self.kind, "submission rejected by validation");
            self.status = Some(Status::error(&self.messages.rejected));
            return SubmitOutcome::Rejected;
        }

        self.phase = Phase::Submitting;
        tracing::info!(form = %self.kind, "submission started");
        SubmitOutcome::Started(FormSnapshot::capture(self.kind, &self.fields))
    }

    /// Records the submission action's result.
    ///
    /// Success clears the form; failure keeps the values. Ignored unless a
    /// submission is in flight, so a result is honoured at most once.
    pub fn settle(&mut self, result: Result<(), SubmissionError>) {
        if self.phase != Phase::Submitting {
            tracing::warn!(form = %self.kind, phase = ?self.phase, "unexpected settle ignored");
            return;
        }

        self.phase = Phase::Settled;
        match result {
            Ok(()) => {
                tracing::info!(form = %self.kind, "submission succeeded");
                self.status = Some(Status::success(&self.messages.success));
                self.reset_fields();
            }
            Err(e) => {
                tracing::warn!(form = %self.kind, error = %e, "submission failed");
                self.status = Some(Status::error(&self.messages.failure));
            }
        }
    }

    /// Re-enables the submit control after the post-settle delay.
    pub fn restore(&mut self) {
        if self.phase != Phase::Settled {
            tracing::debug!(form = %self.kind, phase = ?self.phase, "restore ignored");
            return;
        }
        self.phase = Phase::Idle;
        tracing::debug!(form = %self.kind, "submit control restored");
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return;
        };
        if field.is_select() {
            return;
        }
        edit(&mut field.value);
        self.clear_field_error(self.focus);
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        self.validate_field(self.focus);
        let mut next = self.focus;
        for _ in 0..len {
            next = if forward {
                (next + 1) % len
            } else {
                (next + len - 1) % len
            };
            if self.fields[next].visible {
                self.focus = next;
                return;
            }
        }
    }

    fn apply_rules(&mut self) {
        for rule in &self.rules {
            rule.apply(&mut self.fields);
        }
        if self.fields.get(self.focus).is_some_and(|f| !f.visible) {
            self.focus = self.fields.iter().position(|f| f.visible).unwrap_or(0);
        }
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.apply_rules();
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::catalog::{contact_form, service_form};
    use crate::model::Indicator;

    fn fill(controller: &mut FormController, values: &[(&str, &str)]) {
        for (name, value) in values {
            assert!(controller.set_value(name, value), "no field {name}");
        }
    }

    fn started(outcome: SubmitOutcome) -> FormSnapshot {
        match outcome {
            SubmitOutcome::Started(snapshot) => snapshot,
            other => panic!("expected Started, got {other:?}"),
        }
    }

    fn valid_contact() -> FormController {
        let mut form = contact_form();
        fill(
            &mut form,
            &[("name", "A"), ("email", "a@b.com"), ("message", "hello")],
        );
        form
    }

    mod validation {
        use super::*;

        #[test]
        fn missing_name_rejects_without_starting() {
            let mut form = contact_form();
            fill(
                &mut form,
                &[("name", ""), ("email", "x@y.com"), ("message", "hi")],
            );
            assert_eq!(form.submit(), SubmitOutcome::Rejected);
            assert_eq!(form.phase(), Phase::Idle);
            let status = form.status().unwrap();
            assert_eq!(status.tone, Tone::Error);
            assert_eq!(status.text, "Please fill all fields correctly");
        }

        #[test]
        fn every_field_gets_an_indicator() {
            let mut form = contact_form();
            fill(&mut form, &[("email", "bad")]);
            form.submit();
            let indicators: Vec<Indicator> = form.fields().iter().map(|f| f.indicator).collect();
            assert_eq!(indicators, vec![Indicator::Invalid; 3]);
        }

        #[test]
        fn whitespace_only_required_is_invalid() {
            let mut form = valid_contact();
            form.set_value("message", "   ");
            assert_eq!(form.submit(), SubmitOutcome::Rejected);
            assert_eq!(form.field("message").unwrap().indicator, Indicator::Invalid);
        }

        #[test]
        fn blur_validates_field_being_left() {
            let mut form = contact_form();
            form.focus_next();
            assert_eq!(form.fields()[0].indicator, Indicator::Invalid);
            assert_eq!(form.fields()[1].indicator, Indicator::Neutral);
        }

        #[test]
        fn typing_clears_invalid_marker() {
            let mut form = contact_form();
            form.focus_next();
            form.focus_prev();
            assert_eq!(form.fields()[0].indicator, Indicator::Invalid);
            form.insert_char('A');
            assert_eq!(form.fields()[0].indicator, Indicator::Neutral);
        }

        #[test]
        fn clear_field_error_on_neutral_is_noop() {
            let mut form = contact_form();
            let before = form.fields().to_vec();
            form.clear_field_error(0);
            assert_eq!(form.fields(), before.as_slice());
        }

        #[test]
        fn validate_field_out_of_range_is_valid() {
            let mut form = contact_form();
            assert!(form.validate_field(99));
        }

        #[test]
        fn resubmit_after_rejection_clears_status() {
            let mut form = contact_form();
            form.submit();
            fill(
                &mut form,
                &[("name", "A"), ("email", "a@b.com"), ("message", "hello")],
            );
            started(form.submit());
            assert_eq!(form.status(), None);
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn valid_submit_disables_control_and_shows_busy_label() {
            let mut form = valid_contact();
            assert_eq!(form.submit_label(), "Send Message");
            let snapshot = started(form.submit());
            assert_eq!(snapshot.form, FormKind::Contact);
            assert_eq!(snapshot.value("email"), "a@b.com");
            assert!(!form.is_submit_enabled());
            assert_eq!(form.submit_label(), "⟳ Sending...");
        }

        #[test]
        fn second_submit_while_busy_is_ignored() {
            let mut form = valid_contact();
            started(form.submit());
            assert_eq!(form.submit(), SubmitOutcome::Busy);
            assert_eq!(form.phase(), Phase::Submitting);
        }

        #[test]
        fn success_reports_and_clears_form() {
            let mut form = valid_contact();
            started(form.submit());
            form.settle(Ok(()));
            assert_eq!(form.phase(), Phase::Settled);
            let status = form.status().unwrap();
            assert_eq!(status.tone, Tone::Success);
            assert_eq!(status.text, "Message sent successfully!");
            assert!(form.fields().iter().all(|f| f.value.is_empty()));
            assert!(form.fields().iter().all(|f| f.indicator == Indicator::Neutral));
            assert_eq!(form.focus(), 0);
        }

        #[test]
        fn control_stays_disabled_until_restore() {
            let mut form = valid_contact();
            started(form.submit());
            form.settle(Ok(()));
            assert!(!form.is_submit_enabled());
            assert_eq!(form.submit(), SubmitOutcome::Busy);
            form.restore();
            assert!(form.is_submit_enabled());
            assert_eq!(form.submit_label(), "Send Message");
        }

        #[test]
        fn failure_reports_and_keeps_values() {
            let mut form = valid_contact();
            started(form.submit());
            form.settle(Err(SubmissionError::Unavailable("connection refused".into())));
            let status = form.status().unwrap();
            assert_eq!(status.tone, Tone::Error);
            assert_eq!(status.text, "Server error. Try again later.");
            assert_eq!(form.field("name").unwrap().value, "A");
            form.restore();
            assert_eq!(form.phase(), Phase::Idle);
        }

        #[test]
        fn settle_is_honoured_once() {
            let mut form = valid_contact();
            started(form.submit());
            form.settle(Ok(()));
            form.settle(Err(SubmissionError::Unavailable("late".into())));
            assert_eq!(form.status().unwrap().tone, Tone::Success);
        }

        #[test]
        fn settle_while_idle_is_ignored() {
            let mut form = valid_contact();
            form.settle(Ok(()));
            assert_eq!(form.phase(), Phase::Idle);
            assert_eq!(form.status(), None);
            assert_eq!(form.field("name").unwrap().value, "A");
        }

        #[test]
        fn restore_while_submitting_is_ignored() {
            let mut form = valid_contact();
            started(form.submit());
            form.restore();
            assert_eq!(form.phase(), Phase::Submitting);
        }

        #[test]
        fn status_survives_restore() {
            let mut form = valid_contact();
            started(form.submit());
            form.settle(Ok(()));
            form.restore();
            assert_eq!(
                form.status().map(|s| s.text.as_str()),
                Some("Message sent successfully!")
            );
        }
    }

    mod conditional_field {
        use super::*;

        #[test]
        fn sub_details_starts_hidden() {
            let form = service_form();
            let sub = form.field("sub_details").unwrap();
            assert!(!sub.visible);
            assert!(!sub.required);
        }

        #[test]
        fn web_development_reveals_and_requires() {
            let mut form = service_form();
            form.set_value("service", "Web Development");
            let sub = form.field("sub_details").unwrap();
            assert!(sub.visible);
            assert!(sub.required);
        }

        #[test]
        fn application_development_reveals() {
            let mut form = service_form();
            form.set_value("service", "Application Development");
            assert!(form.field("sub_details").unwrap().visible);
        }

        #[test]
        fn consulting_hides_and_clears() {
            let mut form = service_form();
            form.set_value("service", "Web Development");
            form.set_value("sub_details", "Shop front");
            form.set_value("service", "Consulting");
            let sub = form.field("sub_details").unwrap();
            assert!(!sub.visible);
            assert!(!sub.required);
            assert_eq!(sub.value, "");
        }

        #[test]
        fn revealed_sub_details_must_be_filled() {
            let mut form = service_form();
            fill(
                &mut form,
                &[
                    ("name", "Ada"),
                    ("email", "ada@example.com"),
                    ("service", "Web Development"),
                ],
            );
            assert_eq!(form.submit(), SubmitOutcome::Rejected);
            assert_eq!(
                form.field("sub_details").unwrap().indicator,
                Indicator::Invalid
            );
        }

        #[test]
        fn cycling_service_select_applies_rule() {
            let mut form = service_form();
            while form.focused_field().is_some_and(|f| f.name != "service") {
                form.focus_next();
            }
            form.cycle_option(true);
            assert_eq!(form.field("service").unwrap().value, "Web Development");
            assert!(form.field("sub_details").unwrap().visible);
        }

        #[test]
        fn focus_skips_hidden_field() {
            let mut form = service_form();
            while form.focused_field().is_some_and(|f| f.name != "service") {
                form.focus_next();
            }
            form.focus_next();
            assert_eq!(form.focused_field().unwrap().name, "details");
        }

        #[test]
        fn success_hides_sub_details_again() {
            let mut form = service_form();
            fill(
                &mut form,
                &[
                    ("name", "Ada"),
                    ("email", "ada@example.com"),
                    ("service", "Web Development"),
                    ("sub_details", "Shop front"),
                ],
            );
            let snapshot = started(form.submit());
            assert_eq!(snapshot.value("sub_details"), "Shop front");
            form.settle(Ok(()));
            assert!(!form.field("sub_details").unwrap().visible);
            assert_eq!(form.field("service").unwrap().value, "");
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn chars_ignored_on_select() {
            let mut form = service_form();
            while form.focused_field().is_some_and(|f| f.name != "service") {
                form.focus_next();
            }
            form.insert_char('x');
            assert_eq!(form.field("service").unwrap().value, "");
        }

        #[test]
        fn cycle_option_ignored_on_text() {
            let mut form = contact_form();
            form.cycle_option(true);
            assert_eq!(form.fields()[0].value, "");
        }

        #[test]
        fn delete_char_removes_last() {
            let mut form = contact_form();
            form.insert_char('A');
            form.insert_char('B');
            form.delete_char();
            assert_eq!(form.fields()[0].value, "A");
        }

        #[test]
        fn focus_wraps_both_ways() {
            let mut form = contact_form();
            form.focus_prev();
            assert_eq!(form.focus(), 2);
            form.focus_next();
            assert_eq!(form.focus(), 0);
        }

        #[test]
        fn backspace_clears_invalid_marker() {
            let mut form = contact_form();
            form.insert_char('A');
            form.set_value("email", "bad");
            form.validate_field(0);
            assert!(!form.validate_field(1));
            form.focus_next();
            form.delete_char();
            assert_eq!(form.fields()[1].value, "ba");
            assert_eq!(form.fields()[1].indicator, Indicator::Neutral);
            assert_eq!(form.fields()[1].error, None);
            assert_eq!(form.fields()[0].indicator, Indicator::Valid);
        }

        #[test]
        fn cycling_select_clears_invalid_marker() {
            let mut form = service_form();
            while form.focused_field().is_some_and(|f| f.name != "service") {
                form.focus_next();
            }
            let service = form.focus();
            form.validate_field(service);
            assert_eq!(form.fields()[service].indicator, Indicator::Invalid);
            form.cycle_option(true);
            assert_eq!(form.fields()[service].indicator, Indicator::Neutral);
        }

        #[test]
        fn set_value_unknown_field() {
            let mut form = contact_form();
            assert!(!form.set_value("website", "spam"));
        }
    }
}
