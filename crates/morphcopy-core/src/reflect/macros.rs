//! Declarative helpers for implementing `Reflect` on user types.

/// Implement [`Reflect`](crate::Reflect) for a struct with named fields.
///
/// Every listed field must itself implement `Reflect`. Fields left out
/// of the list are invisible to the copy engine.
///
/// ```ignore
/// #[derive(Default)]
/// struct Address { city: String, zip: u32 }
/// reflect_record!(Address { city, zip });
/// ```
#[macro_export]
macro_rules! reflect_record {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn declared() -> $crate::TypeTag {
                $crate::TypeTag::Record(stringify!($ty))
            }

            fn type_tag(&self) -> $crate::TypeTag {
                <Self as $crate::Reflect>::declared()
            }

            fn view(&self) -> $crate::View<'_> {
                $crate::View::Record(vec![
                    $($crate::Field::new(stringify!($field), &self.$field),)*
                ])
            }

            fn view_mut(&mut self) -> $crate::ViewMut<'_> {
                $crate::ViewMut::Record(vec![
                    $($crate::FieldMut::new(stringify!($field), &mut self.$field),)*
                ])
            }
        }
    };
}

/// Implement [`Reflect`](crate::Reflect) for a single-field newtype that
/// acts as a distinct named scalar type over a primitive.
///
/// ```ignore
/// #[derive(Default)]
/// struct UserId(u64);
/// reflect_scalar_alias!(UserId => u64);
/// ```
#[macro_export]
macro_rules! reflect_scalar_alias {
    ($alias:ident => $inner:ty) => {
        impl $crate::Reflect for $alias {
            fn declared() -> $crate::TypeTag {
                $crate::TypeTag::Scalar($crate::ScalarTag::new(
                    stringify!($alias),
                    <$inner as $crate::Primitive>::REPR,
                ))
            }

            fn type_tag(&self) -> $crate::TypeTag {
                <Self as $crate::Reflect>::declared()
            }

            fn view(&self) -> $crate::View<'_> {
                $crate::Reflect::view(&self.0)
            }

            fn view_mut(&mut self) -> $crate::ViewMut<'_> {
                $crate::ViewMut::Scalar(self)
            }
        }

        impl $crate::ScalarSlot for $alias {
            fn scalar_tag(&self) -> $crate::ScalarTag {
                $crate::ScalarTag::new(stringify!($alias), <$inner as $crate::Primitive>::REPR)
            }

            fn store(&mut self, value: $crate::Scalar) -> bool {
                $crate::ScalarSlot::store(&mut self.0, value)
            }
        }
    };
}
