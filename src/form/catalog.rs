//! The site's two forms, expressed as field lists, reveal rules and messages.

use crate::model::{Field, FieldKind, FormKind};

use super::controller::{FormController, FormMessages};
use super::rules::RevealRule;

/// Service types offered by the service-request form.
pub const SERVICES: &[&str] = &[
    "Web Development",
    "Application Development",
    "UI/UX Design",
    "Consulting",
    "Maintenance & Support",
];

/// Service types that need the sub-details field.
pub const SERVICES_WITH_SUB_DETAILS: &[&str] = &["Web Development", "Application Development"];

/// Priorities offered by the service-request form.
pub const PRIORITIES: &[&str] = &["Low", "Medium", "High"];

fn messages(submit: &str, busy: &str, rejected: &str, success: &str, failure: &str) -> FormMessages {
    FormMessages {
        submit_label: submit.to_string(),
        busy_label: busy.to_string(),
        rejected: rejected.to_string(),
        success: success.to_string(),
        failure: failure.to_string(),
    }
}

/// Builds the contact form: name, email and message, all required.
pub fn contact_form() -> FormController {
    FormController::new(
        FormKind::Contact,
        vec![
            Field::required_text("name", "Name"),
            Field::new("email", "Email", FieldKind::Email, true),
            Field::required_text("message", "Message"),
        ],
        Vec::new(),
        messages(
            "Send Message",
            "⟳ Sending...",
            "Please fill all fields correctly",
            "Message sent successfully!",
            "Server error. Try again later.",
        ),
    )
}

/// Builds the service-request form.
///
/// The sub-details field is shown, and required, only for the services in
/// [`SERVICES_WITH_SUB_DETAILS`].
pub fn service_form() -> FormController {
    FormController::new(
        FormKind::Service,
        vec![
            Field::required_text("name", "Name"),
            Field::new("email", "Email", FieldKind::Email, true),
            Field::optional_text("phone", "Phone"),
            Field::select("service", "Service", SERVICES, true),
            Field::optional_text("sub_details", "What should we build?").hidden(),
            Field::optional_text("details", "Project details"),
            Field::optional_text("platform", "Platform"),
            Field::optional_text("attachment_link", "Attachment link"),
            Field::select("priority", "Priority", PRIORITIES, false),
            Field::new("budget", "Budget (USD)", FieldKind::Number, false),
            Field::new("deadline", "Deadline (YYYY-MM-DD)", FieldKind::Date, false),
            Field::optional_text("notes", "Notes"),
        ],
        vec![RevealRule::new(
            "service",
            "sub_details",
            SERVICES_WITH_SUB_DETAILS,
        )],
        messages(
            "Submit Request",
            "⟳ Submitting...",
            "Please fill all required fields correctly",
            "✅ Service request submitted!",
            "⚠ Could not connect to server.",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_fields_all_required() {
        let form = contact_form();
        let names: Vec<&str> = form.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert!(form.fields().iter().all(|f| f.required));
    }

    #[test]
    fn service_required_fields() {
        let form = service_form();
        let required: Vec<&str> = form
            .fields()
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(required, vec!["name", "email", "service"]);
    }

    #[test]
    fn sub_detail_services_are_offered() {
        for service in SERVICES_WITH_SUB_DETAILS {
            assert!(SERVICES.contains(service), "{service} not offered");
        }
    }

    #[test]
    fn forms_carry_their_kind() {
        assert_eq!(contact_form().kind(), FormKind::Contact);
        assert_eq!(service_form().kind(), FormKind::Service);
    }

    #[test]
    fn labels_differ_per_form() {
        assert_eq!(contact_form().submit_label(), "Send Message");
        assert_eq!(service_form().submit_label(), "Submit Request");
    }
}
