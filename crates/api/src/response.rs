//! Shared response envelope types for page handlers.
//!
//! Every page endpoint answers with a `{ "template": ..., "context": ... }`
//! envelope: the template the frontend should render and the context
//! mapping to feed it. Use [`PageResponse`] instead of ad-hoc
//! `serde_json::json!` blocks to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// Standard `{ "template": ..., "context": T }` page envelope.
///
/// # Example
///
/// ```ignore
/// Json(PageResponse::new("home.html", context))
/// ```
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    /// Template name, mirroring the legacy page templates.
    pub template: &'static str,
    /// Context mapping consumed by the template.
    pub context: T,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(template: &'static str, context: T) -> Self {
        Self { template, context }
    }
}
