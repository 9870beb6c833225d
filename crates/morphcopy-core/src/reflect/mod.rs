//! The `Reflect` capability: read and write access to a value's shape
//! without compile-time knowledge of its type.
//!
//! # Modules
//!
//! - [`types`]: declared type tags and the compatibility rules
//! - [`scalar`]: `Scalar` values and the primitive implementations
//! - [`containers`]: `Option<T>`, `Vec<T>` and `Box<T>`
//! - [`macros`]: `reflect_record!` and `reflect_scalar_alias!`

pub mod containers;
pub mod macros;
pub mod scalar;
pub mod types;

pub use scalar::{Primitive, Scalar};
pub use types::{Repr, ScalarKind, ScalarTag, ShapeKind, TypeTag};

/// A value whose shape can be inspected and written through at runtime.
///
/// Records implement it with [`reflect_record!`](crate::reflect_record),
/// named scalar newtypes with
/// [`reflect_scalar_alias!`](crate::reflect_scalar_alias).
pub trait Reflect {
    /// The declared type, known without an instance.
    fn declared() -> TypeTag
    where
        Self: Sized;

    /// The declared type of this value. Unset optionals still report their inner type.
    fn type_tag(&self) -> TypeTag;

    fn view(&self) -> View<'_>;

    fn view_mut(&mut self) -> ViewMut<'_>;
}

/// A named field of a record, read side.
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self { name, value }
    }
}

/// A named field of a record, write side.
pub struct FieldMut<'a> {
    pub name: &'static str,
    pub value: &'a mut dyn Reflect,
}

impl<'a> FieldMut<'a> {
    pub fn new(name: &'static str, value: &'a mut dyn Reflect) -> Self {
        Self { name, value }
    }
}

/// Read view of a value.
pub enum View<'a> {
    Scalar(Scalar),
    Record(Vec<Field<'a>>),
    Sequence(Vec<&'a dyn Reflect>),
    Optional(Option<&'a dyn Reflect>),
}

/// Write view of a value.
pub enum ViewMut<'a> {
    Scalar(&'a mut dyn ScalarSlot),
    Record(Vec<FieldMut<'a>>),
    Sequence(&'a mut dyn SequenceSlot),
    Optional(&'a mut dyn OptionalSlot),
}

/// Writable scalar storage.
pub trait ScalarSlot {
    fn scalar_tag(&self) -> ScalarTag;

    /// Store a value of this slot's kind with an `as` cast.
    ///
    /// Returns `false` and leaves the slot untouched for a value of another kind.
    fn store(&mut self, value: Scalar) -> bool;
}

/// Writable sequence storage.
pub trait SequenceSlot {
    fn element_tag(&self) -> TypeTag;

    fn clear(&mut self);

    /// Append a default element and hand it back for filling.
    fn push_default(&mut self) -> &mut dyn Reflect;
}

/// Writable optional storage.
pub trait OptionalSlot {
    fn inner_tag(&self) -> TypeTag;

    /// Replace the content with freshly allocated default storage and return it.
    fn insert_default(&mut self) -> &mut dyn Reflect;

    /// Return the current content, allocating default storage only when unset.
    fn get_or_insert_default(&mut self) -> &mut dyn Reflect;
}

/// Strip optional layers. `None` when an optional on the way is unset.
pub fn present(value: &dyn Reflect) -> Option<&dyn Reflect> {
    match value.view() {
        View::Optional(inner) => inner.and_then(present),
        _ => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_unwraps_nested_optionals() {
        let set: Option<Option<i32>> = Some(Some(7));
        let inner = present(&set).unwrap();
        assert!(matches!(inner.view(), View::Scalar(Scalar::Int(7))));

        let unset: Option<Option<i32>> = Some(None);
        assert!(present(&unset).is_none());

        let plain = 3u8;
        assert!(present(&plain).is_some());
    }

    #[test]
    fn test_unset_optional_reports_inner_type() {
        let unset: Option<u16> = None;
        assert_eq!(
            unset.type_tag(),
            TypeTag::Optional(Box::new(TypeTag::Scalar(ScalarTag::primitive(Repr::U16))))
        );
    }
}
