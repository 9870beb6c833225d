//! Structural Copy Engine.
//!
//! A transform is destination driven. Scalars are converted and stored
//! directly. For records, the source is flattened into a [`Description`]
//! and the destination's field tree is walked, each leaf looked up by exact
//! path. Destination fields with no source counterpart keep their current
//! value; source fields with no destination counterpart are ignored.
//!
//! The two errors are raised before anything is written. Once copying has
//! begun, a leaf that cannot be filled is skipped and logged, never
//! reported as a failure.

use morphcopy_path::FieldPath;

use crate::config::CopyConfig;
use crate::convert::convert;
use crate::describe::Description;
use crate::error::{Result, TransformError};
use crate::obs::{
    emit_field_copied, emit_field_skipped, emit_transform_finished, emit_transform_rejected,
    TransformSpan,
};
use crate::reflect::{present, Reflect, Scalar, TypeTag, View, ViewMut};

/// Where a transform writes to.
///
/// Only [`Destination::Writable`] can receive a copy. The other variants
/// exist so that a shared reference or an absent target is rejected with
/// [`TransformError::DestinationNotSettable`] instead of failing to compile
/// at the call site.
pub enum Destination<'a> {
    Writable(&'a mut dyn Reflect),
    ReadOnly(&'a dyn Reflect),
    Missing,
}

impl<'a, T: Reflect> From<&'a mut T> for Destination<'a> {
    fn from(value: &'a mut T) -> Self {
        Destination::Writable(value)
    }
}

impl<'a, T: Reflect> From<&'a T> for Destination<'a> {
    fn from(value: &'a T) -> Self {
        Destination::ReadOnly(value)
    }
}

impl<'a, T: Reflect> From<Option<&'a mut T>> for Destination<'a> {
    fn from(value: Option<&'a mut T>) -> Self {
        match value {
            Some(value) => Destination::Writable(value),
            None => Destination::Missing,
        }
    }
}

/// A configured copy engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Copier {
    config: CopyConfig,
}

impl Copier {
    /// A copier applying `config` to every transform.
    pub fn new(config: CopyConfig) -> Self {
        Self { config }
    }

    /// The configuration this copier was built with.
    pub fn config(&self) -> &CopyConfig {
        &self.config
    }

    /// Copy `src` into `dst`, converting scalars to the destination's types.
    ///
    /// # Errors
    ///
    /// - [`TransformError::DestinationNotSettable`] if `dst` is not writable.
    /// - [`TransformError::UnsupportedTransformation`] if the shapes of
    ///   `src` and `dst` cannot be bridged.
    ///
    /// In both cases `dst` is left unmodified.
    pub fn transform<'d>(&self, src: &dyn Reflect, dst: impl Into<Destination<'d>>) -> Result<()> {
        let dst = match dst.into() {
            Destination::Writable(dst) => dst,
            Destination::ReadOnly(_) | Destination::Missing => {
                return Err(rejected(TransformError::DestinationNotSettable));
            }
        };

        let from = src.type_tag();
        let to = dst.type_tag();
        let _span = TransformSpan::enter(&from, &to);
        if !from.is_compatible_with(&to) {
            return Err(rejected(TransformError::UnsupportedTransformation { from, to }));
        }

        let mut pass = Pass::new(self.config);
        pass.assign(&FieldPath::root(), src, dst);
        emit_transform_finished(pass.copied, pass.skipped);
        Ok(())
    }
}

/// Copy `src` into `dst` with the default configuration.
///
/// See [`Copier::transform`].
pub fn transform<'d>(src: &dyn Reflect, dst: impl Into<Destination<'d>>) -> Result<()> {
    Copier::default().transform(src, dst)
}

fn rejected(error: TransformError) -> TransformError {
    emit_transform_rejected(&error);
    error
}

// ---------------------------------------------------------------------------
// Copy pass
// ---------------------------------------------------------------------------

const UNSET_SOURCE: &str = "source optional is unset";
const INCOMPATIBLE: &str = "incompatible types";
const OUT_OF_RANGE: &str = "value does not fit destination";
const NOT_STORED: &str = "destination rejected value";

/// State of one transform call.
struct Pass {
    config: CopyConfig,
    copied: usize,
    skipped: usize,
}

impl Pass {
    fn new(config: CopyConfig) -> Self {
        Self {
            config,
            copied: 0,
            skipped: 0,
        }
    }

    /// Assign one source value to one destination slot.
    fn assign(&mut self, path: &FieldPath, src: &dyn Reflect, dst: &mut dyn Reflect) {
        let Some(src) = present(src) else {
            return self.skip(path, UNSET_SOURCE);
        };
        if !src.type_tag().is_compatible_with(&dst.type_tag()) {
            return self.skip(path, INCOMPATIBLE);
        }
        match src.view() {
            View::Scalar(value) => self.put_scalar(path, value, dst),
            View::Record(_) => {
                let desc = Description::of(src);
                self.fill_record(&FieldPath::root(), &desc, dst);
            }
            View::Sequence(items) => self.put_sequence(path, items, dst),
            // `present` never yields an optional
            View::Optional(_) => {}
        }
    }

    fn put_scalar(&mut self, path: &FieldPath, value: Scalar, dst: &mut dyn Reflect) {
        let TypeTag::Scalar(tag) = dst.type_tag().unwrap_optional().clone() else {
            return self.skip(path, INCOMPATIBLE);
        };
        // Convert first so a rejected value leaves an unset optional unset.
        let Some(value) = convert(value, tag.repr, self.config.numeric) else {
            return self.skip(path, OUT_OF_RANGE);
        };
        if store(dst, value) {
            self.copied += 1;
            emit_field_copied(path);
        } else {
            self.skip(path, NOT_STORED);
        }
    }

    /// Walk the destination record below `prefix`, filling leaves from `desc`.
    fn fill_record(&mut self, prefix: &FieldPath, desc: &Description<'_>, dst: &mut dyn Reflect) {
        let fields = match dst.view_mut() {
            ViewMut::Record(fields) => fields,
            ViewMut::Optional(slot) => {
                if desc.has_descendants(prefix) {
                    self.fill_record(prefix, desc, slot.get_or_insert_default());
                }
                return;
            }
            ViewMut::Scalar(_) | ViewMut::Sequence(_) => return self.skip(prefix, INCOMPATIBLE),
        };

        for field in fields {
            let path = prefix.child(field.name);
            if field.value.type_tag().unwrap_optional().is_record() {
                if desc.has_descendants(&path) {
                    self.fill_record(&path, desc, field.value);
                }
                continue;
            }
            if let Some(leaf) = desc.get(path.as_str()) {
                self.assign(&path, leaf.value(), field.value);
            }
        }
    }

    /// Rebuild a destination sequence element by element.
    fn put_sequence(&mut self, path: &FieldPath, items: Vec<&dyn Reflect>, dst: &mut dyn Reflect) {
        match dst.view_mut() {
            ViewMut::Sequence(slot) => {
                slot.clear();
                for (idx, item) in items.into_iter().enumerate() {
                    let element = slot.push_default();
                    self.assign(&path.child(&idx.to_string()), item, element);
                }
            }
            ViewMut::Optional(slot) => self.put_sequence(path, items, slot.insert_default()),
            ViewMut::Scalar(_) | ViewMut::Record(_) => self.skip(path, INCOMPATIBLE),
        }
    }

    fn skip(&mut self, path: &FieldPath, reason: &'static str) {
        self.skipped += 1;
        emit_field_skipped(path, &reason);
    }
}

/// Store a converted scalar, allocating optional layers on the way down.
fn store(dst: &mut dyn Reflect, value: Scalar) -> bool {
    match dst.view_mut() {
        ViewMut::Scalar(slot) => slot.store(value),
        ViewMut::Optional(slot) => store(slot.insert_default(), value),
        ViewMut::Record(_) | ViewMut::Sequence(_) => false,
    }
}
