//! Configuration for the copy engine and the path ranker.
//!
//! The library performs no file I/O. Callers deserialize a
//! [`MorphConfig`] from wherever they keep settings; every section is
//! optional and falls back to its defaults.
//!
//! ```toml
//! [copy]
//! numeric = "checked"
//!
//! [rank]
//! missing_depth = 4
//! ```

use serde::{Deserialize, Serialize};

use morphcopy_path::{RankWeights, Ranker};

use crate::engine::Copier;

/// How a numeric value is narrowed into a smaller destination representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericConversion {
    /// Representation-level cast: integers wrap, floats truncate toward zero.
    #[default]
    Wrapping,
    /// Out-of-range values are skipped and the destination keeps its value.
    ///
    /// Sequences are rebuilt, so a skipped element is left at its default.
    Checked,
}

/// Settings for [`Copier`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    pub numeric: NumericConversion,
}

/// Top-level configuration document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    pub copy: CopyConfig,
    pub rank: RankWeights,
}

impl MorphConfig {
    /// Build a copier from the `copy` section.
    pub fn copier(&self) -> Copier {
        Copier::new(self.copy)
    }

    /// Build a ranker from the `rank` section.
    pub fn ranker(&self) -> Ranker {
        Ranker::new(self.rank)
    }
}
