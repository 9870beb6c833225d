//! Error taxonomy for structural copies.

use crate::reflect::TypeTag;

/// Errors returned by [`transform`](crate::transform).
///
/// Both variants are raised before the destination is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("destination must be settable")]
    DestinationNotSettable,

    #[error("could not transform {from} into {to}")]
    UnsupportedTransformation { from: TypeTag, to: TypeTag },
}

/// Result type for copy operations.
pub type Result<T> = std::result::Result<T, TransformError>;
