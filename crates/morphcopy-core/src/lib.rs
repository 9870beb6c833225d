//! Morphcopy Core: type-directed structural copying
//!
//! Copies a source value into a destination of a possibly different but
//! structurally similar type. Leaves are matched by their dotted field
//! path and converted to the destination's declared type.
//!
//! Types take part by implementing [`Reflect`], usually through
//! [`reflect_record!`] and [`reflect_scalar_alias!`].
//!
//! ```ignore
//! #[derive(Default)]
//! struct UserDto { name: String, age: i64 }
//! reflect_record!(UserDto { name, age });
//!
//! #[derive(Default)]
//! struct User { name: String, age: Option<u8>, admin: bool }
//! reflect_record!(User { name, age, admin });
//!
//! let mut user = User::default();
//! morphcopy_core::transform(&dto, &mut user)?;
//! ```
//!
//! The path ranker from `morphcopy-path` is re-exported here; the engine
//! itself matches paths exactly and never consults it.

pub mod config;
pub mod convert;
pub mod describe;
pub mod engine;
pub mod error;
pub mod obs;
pub mod reflect;
pub mod telemetry;

pub use config::{CopyConfig, MorphConfig, NumericConversion};
pub use convert::convert;
pub use describe::{describe, Description, Leaf};
pub use engine::{transform, Copier, Destination};
pub use error::{Result, TransformError};
pub use reflect::{
    present, Field, FieldMut, OptionalSlot, Primitive, Reflect, Repr, Scalar, ScalarKind,
    ScalarSlot, ScalarTag, SequenceSlot, ShapeKind, TypeTag, View, ViewMut,
};

pub use morphcopy_path::{
    is_rankable, similarity_rank, FieldPath, PathError, RankWeights, Ranker, MAX_RANK,
};

pub use obs::{
    emit_field_copied, emit_field_skipped, emit_transform_finished, emit_transform_rejected,
    TransformSpan,
};
pub use telemetry::init_tracing;

/// Morphcopy version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
