//! Structural Description: a flattened `path -> leaf` table of a value.
//!
//! Records are walked depth first. A nested record (or a set optional
//! record) is never a leaf itself; it contributes one entry per leaf below
//! it, keyed `parent.child...`. Scalars, sequences and optional scalars are
//! leaves. Each leaf keeps a reference to its current value so the table
//! serves both as a type oracle and as a value source.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use morphcopy_path::{FieldPath, SEPARATOR};

use crate::reflect::{present, Reflect, TypeTag, View};

/// One leaf of a [`Description`].
#[derive(Clone)]
pub struct Leaf<'a> {
    tag: TypeTag,
    value: &'a dyn Reflect,
}

impl<'a> Leaf<'a> {
    /// Declared type of the leaf, optional layers included.
    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }

    pub fn value(&self) -> &'a dyn Reflect {
        self.value
    }

    /// The value with optional layers stripped, `None` if one is unset.
    pub fn present(&self) -> Option<&'a dyn Reflect> {
        present(self.value)
    }
}

impl fmt::Debug for Leaf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("tag", &self.tag.to_string())
            .finish_non_exhaustive()
    }
}

/// Flattened description of a value, ordered by path.
pub struct Description<'a> {
    leaves: BTreeMap<FieldPath, Leaf<'a>>,
}

impl<'a> Description<'a> {
    /// Describe `value`.
    ///
    /// A non-record value is a single leaf at the root path. An unset
    /// optional record has no leaves.
    pub fn of(value: &'a dyn Reflect) -> Self {
        let mut desc = Self {
            leaves: BTreeMap::new(),
        };
        desc.visit(FieldPath::root(), value);
        desc
    }

    fn visit(&mut self, path: FieldPath, value: &'a dyn Reflect) {
        let tag = value.type_tag();
        if tag.unwrap_optional().is_record() {
            if let Some(View::Record(fields)) = present(value).map(|inner| inner.view()) {
                for field in fields {
                    self.visit(path.child(field.name), field.value);
                }
            }
            return;
        }
        self.leaves.insert(path, Leaf { tag, value });
    }

    pub fn get(&self, path: &str) -> Option<&Leaf<'a>> {
        self.leaves.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.leaves.contains_key(path)
    }

    /// Returns `true` if any leaf lies strictly below `prefix`.
    pub fn has_descendants(&self, prefix: &FieldPath) -> bool {
        if prefix.is_root() {
            // the root key sorts first, so this stops within two steps
            return self.leaves.keys().any(|path| !path.is_root());
        }
        // keys below `prefix` are contiguous from `prefix.` onwards
        let lower = format!("{}{}", prefix.as_str(), SEPARATOR);
        self.leaves
            .range::<str, _>((Bound::Included(lower.as_str()), Bound::Unbounded))
            .next()
            .is_some_and(|(path, _)| path.as_str().starts_with(&lower))
    }

    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.leaves.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &Leaf<'a>)> {
        self.leaves.iter()
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// The type-only view: path to declared leaf type.
    pub fn types(&self) -> BTreeMap<FieldPath, TypeTag> {
        self.leaves
            .iter()
            .map(|(path, leaf)| (path.clone(), leaf.tag.clone()))
            .collect()
    }
}

impl fmt::Debug for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.leaves
                    .iter()
                    .map(|(path, leaf)| (path.as_str(), leaf.tag.to_string())),
            )
            .finish()
    }
}

/// Shorthand for [`Description::of`].
pub fn describe(value: &dyn Reflect) -> Description<'_> {
    Description::of(value)
}
