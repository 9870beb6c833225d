//! Structured observability hooks for the copy engine.
//!
//! This module provides:
//! - A transform-scoped tracing span via the `TransformSpan` RAII guard
//! - Emission functions for rejected and finished transforms and per-field outcomes
//!
//! Call-level events are emitted at `debug!`, per-field copies at `trace!`.

use std::fmt;

use morphcopy_path::FieldPath;
use tracing::{debug, trace};

use crate::error::TransformError;
use crate::reflect::TypeTag;

/// RAII guard that enters a span for the duration of one transform call.
///
/// # Example
///
/// ```ignore
/// let _span = TransformSpan::enter(&src.type_tag(), &dst.type_tag());
/// // field events below are tagged with from/to
/// ```
pub struct TransformSpan {
    _span: tracing::span::EnteredSpan,
}

impl TransformSpan {
    pub fn enter(from: &TypeTag, to: &TypeTag) -> Self {
        let span = tracing::info_span!("morphcopy.transform", from = %from, to = %to);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: transform refused before touching the destination.
pub fn emit_transform_rejected(error: &TransformError) {
    debug!(event = "transform.rejected", error = %error);
}

/// Emit event: transform completed with copied and skipped leaf counts.
pub fn emit_transform_finished(copied: usize, skipped: usize) {
    debug!(event = "transform.finished", copied = copied, skipped = skipped);
}

/// Emit event: a leaf was left at its current value.
pub fn emit_field_skipped(path: &FieldPath, reason: &dyn fmt::Display) {
    debug!(event = "field.skipped", path = %path, reason = %reason);
}

/// Emit event: a leaf was written to the destination.
pub fn emit_field_copied(path: &FieldPath) {
    trace!(event = "field.copied", path = %path);
}
