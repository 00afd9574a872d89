#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal front end for a studio's brochure page with contact and
//! service-request enquiry forms.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod submit;
pub mod tui;
