//! `Reflect` for the standard containers.
//!
//! `Option<T>` is the optional (nullable) wrapper, `Vec<T>` the sequence,
//! and `Box<T>` is transparent. Filling an optional or a sequence needs
//! fresh storage, hence the `T: Default` bound.

use super::types::TypeTag;
use super::{OptionalSlot, Reflect, SequenceSlot, View, ViewMut};

impl<T: Reflect + Default> Reflect for Option<T> {
    fn declared() -> TypeTag {
        TypeTag::Optional(Box::new(T::declared()))
    }

    fn type_tag(&self) -> TypeTag {
        <Self as Reflect>::declared()
    }

    fn view(&self) -> View<'_> {
        View::Optional(self.as_ref().map(|v| v as &dyn Reflect))
    }

    fn view_mut(&mut self) -> ViewMut<'_> {
        ViewMut::Optional(self)
    }
}

impl<T: Reflect + Default> OptionalSlot for Option<T> {
    fn inner_tag(&self) -> TypeTag {
        T::declared()
    }

    fn insert_default(&mut self) -> &mut dyn Reflect {
        self.insert(T::default())
    }

    fn get_or_insert_default(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }
}

impl<T: Reflect + Default> Reflect for Vec<T> {
    fn declared() -> TypeTag {
        TypeTag::Sequence(Box::new(T::declared()))
    }

    fn type_tag(&self) -> TypeTag {
        <Self as Reflect>::declared()
    }

    fn view(&self) -> View<'_> {
        View::Sequence(self.iter().map(|v| v as &dyn Reflect).collect())
    }

    fn view_mut(&mut self) -> ViewMut<'_> {
        ViewMut::Sequence(self)
    }
}

impl<T: Reflect + Default> SequenceSlot for Vec<T> {
    fn element_tag(&self) -> TypeTag {
        T::declared()
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push_default(&mut self) -> &mut dyn Reflect {
        let idx = self.len();
        self.push(T::default());
        &mut self[idx]
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn declared() -> TypeTag {
        T::declared()
    }

    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }

    fn view(&self) -> View<'_> {
        (**self).view()
    }

    fn view_mut(&mut self) -> ViewMut<'_> {
        (**self).view_mut()
    }
}
