//! Dotted field paths.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PathError, PathResult};
use crate::rank::has_forbidden_pattern;

/// Separator between the depth segments of a path.
pub const SEPARATOR: char = '.';

/// A location inside a (possibly nested) record's declared shape.
///
/// Stored in its external form, segments joined by [`SEPARATOR`]. The root
/// path is the empty string and has no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath(String);

impl FieldPath {
    /// The empty path, naming the value itself.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse and validate a dotted path.
    pub fn parse(raw: &str) -> PathResult<Self> {
        if let Some(err) = has_forbidden_pattern(raw) {
            return Err(err);
        }
        if !raw.is_empty() && raw.split(SEPARATOR).any(str::is_empty) {
            return Err(PathError::EmptySegment {
                path: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend this path by one segment.
    pub fn child(&self, segment: &str) -> Self {
        if self.is_root() {
            Self(segment.to_string())
        } else {
            Self(format!("{}{}{}", self.0, SEPARATOR, segment))
        }
    }

    /// Segments from outermost to leaf. Empty for the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// The final segment, if any.
    pub fn leaf(&self) -> Option<&str> {
        self.segments().last()
    }

    /// The path one level up. The root has no parent.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind(SEPARATOR) {
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => Some(Self::root()),
        }
    }

    /// Returns `true` if `self` lies strictly below `ancestor`.
    ///
    /// Segment-aware: `"ab.c"` is not below `"a"`.
    pub fn is_descendant_of(&self, ancestor: &FieldPath) -> bool {
        if ancestor.is_root() {
            return !self.is_root();
        }
        self.0.len() > ancestor.0.len()
            && self.0.starts_with(ancestor.as_str())
            && self.0[ancestor.0.len()..].starts_with(SEPARATOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Ord on the newtype matches Ord on the inner string, so map lookups by &str are sound.
impl Borrow<str> for FieldPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}
