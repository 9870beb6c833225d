//! Morphcopy-Path: Field Paths and Path Similarity Ranking
//!
//! This crate provides the path vocabulary shared by the morphcopy
//! workspace:
//!
//! - [`FieldPath`]: a validated, dotted location inside a record's shape
//!   (e.g. `"employer.address.city"`)
//! - [`Ranker`] and [`similarity_rank`]: a distance between two dotted
//!   paths that tolerates missing depth levels and renamed segments
//!
//! The ranker never fails: malformed input is folded into [`MAX_RANK`]
//! so callers scanning many candidates can treat it as the worst match.

pub mod error;
pub mod path;
pub mod rank;

pub use error::{PathError, PathResult};
pub use path::{FieldPath, SEPARATOR};
pub use rank::{
    is_rankable, similarity_rank, RankWeights, Ranker, MAX_RANK, MISSING_DEPTH_WEIGHT,
    MISSING_LETTER_WEIGHT, LETTER_MISMATCH_WEIGHT,
};
