//! Form domain model: fields, validation, submission snapshots and payloads.

mod field;
mod payload;
mod snapshot;
mod validation;

pub use field::{Field, FieldKind, Indicator};
pub use payload::{ContactMessage, Payload, PayloadError, ServiceRequest};
pub use snapshot::{FormKind, FormSnapshot};
pub use validation::{
    DATE_FORMAT, ValidationError, is_valid_email, parse_date, parse_number, validate_value,
};
