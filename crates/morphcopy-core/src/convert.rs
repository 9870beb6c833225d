//! Scalar conversion between representations of the same kind.

use crate::config::NumericConversion;
use crate::reflect::{Repr, Scalar};

/// Convert `value` into a scalar storable in a slot of representation `to`.
///
/// Returns `None` when the kinds differ, or when `policy` is
/// [`NumericConversion::Checked`] and the value does not fit.
///
/// Under [`NumericConversion::Wrapping`] integers are handed through
/// untouched so the slot's `as` cast wraps them, and floats going into an
/// integer are truncated toward zero and saturated, as `f64 as i32` does.
pub fn convert(value: Scalar, to: Repr, policy: NumericConversion) -> Option<Scalar> {
    match (value, to) {
        (Scalar::Bool(v), Repr::Bool) => Some(Scalar::Bool(v)),
        (Scalar::Text(v), Repr::Text) => Some(Scalar::Text(v)),
        (Scalar::Int(v), Repr::F32 | Repr::F64) => Some(Scalar::Float(v as f64)),
        (Scalar::Float(v), Repr::F32) => match policy {
            NumericConversion::Checked if v.is_finite() && v.abs() > f32::MAX as f64 => None,
            _ => Some(Scalar::Float(v)),
        },
        (Scalar::Float(v), Repr::F64) => Some(Scalar::Float(v)),
        (Scalar::Int(v), repr) => {
            let (lo, hi) = repr.int_bounds()?;
            match policy {
                NumericConversion::Checked if !(lo..=hi).contains(&v) => None,
                _ => Some(Scalar::Int(v)),
            }
        }
        (Scalar::Float(v), repr) => {
            let (lo, hi) = repr.int_bounds()?;
            let truncated = v.trunc();
            let whole = truncated as i128;
            match policy {
                NumericConversion::Checked => {
                    let exact = truncated.is_finite() && whole as f64 == truncated;
                    (exact && (lo..=hi).contains(&whole)).then_some(Scalar::Int(whole))
                }
                NumericConversion::Wrapping => Some(Scalar::Int(whole.clamp(lo, hi))),
            }
        }
        _ => None,
    }
}
