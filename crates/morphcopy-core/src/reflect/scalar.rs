//! Scalar values and the primitive `Reflect` implementations.

use super::types::{Repr, ScalarKind, ScalarTag, TypeTag};
use super::{Reflect, ScalarSlot, View, ViewMut};

/// A scalar value lifted out of its concrete type.
///
/// Integers of every width are carried as `i128`, which holds the full
/// range of both `i64` and `u64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Int(_) | Scalar::Float(_) => ScalarKind::Numeric,
            Scalar::Text(_) => ScalarKind::Text,
        }
    }
}

/// A built-in scalar type with a fixed representation.
pub trait Primitive: ScalarSlot {
    const REPR: Repr;
}

macro_rules! impl_primitive_reflect {
    ($ty:ty) => {
        impl Reflect for $ty {
            fn declared() -> TypeTag {
                TypeTag::Scalar(ScalarTag::primitive(<$ty as Primitive>::REPR))
            }

            fn type_tag(&self) -> TypeTag {
                <Self as Reflect>::declared()
            }

            fn view(&self) -> View<'_> {
                View::Scalar(self.to_scalar())
            }

            fn view_mut(&mut self) -> ViewMut<'_> {
                ViewMut::Scalar(self)
            }
        }
    };
}

macro_rules! impl_integer {
    ($($ty:ty => $repr:ident),* $(,)?) => {$(
        impl Primitive for $ty {
            const REPR: Repr = Repr::$repr;
        }

        impl ToScalar for $ty {
            fn to_scalar(&self) -> Scalar {
                Scalar::Int(*self as i128)
            }
        }

        impl ScalarSlot for $ty {
            fn scalar_tag(&self) -> ScalarTag {
                ScalarTag::primitive(Repr::$repr)
            }

            fn store(&mut self, value: Scalar) -> bool {
                match value {
                    Scalar::Int(v) => {
                        *self = v as $ty;
                        true
                    }
                    _ => false,
                }
            }
        }

        impl_primitive_reflect!($ty);
    )*};
}

macro_rules! impl_float {
    ($($ty:ty => $repr:ident),* $(,)?) => {$(
        impl Primitive for $ty {
            const REPR: Repr = Repr::$repr;
        }

        impl ToScalar for $ty {
            fn to_scalar(&self) -> Scalar {
                Scalar::Float(*self as f64)
            }
        }

        impl ScalarSlot for $ty {
            fn scalar_tag(&self) -> ScalarTag {
                ScalarTag::primitive(Repr::$repr)
            }

            fn store(&mut self, value: Scalar) -> bool {
                match value {
                    Scalar::Float(v) => {
                        *self = v as $ty;
                        true
                    }
                    _ => false,
                }
            }
        }

        impl_primitive_reflect!($ty);
    )*};
}

trait ToScalar {
    fn to_scalar(&self) -> Scalar;
}

impl_integer!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
);

impl_float!(f32 => F32, f64 => F64);

impl Primitive for bool {
    const REPR: Repr = Repr::Bool;
}

impl ToScalar for bool {
    fn to_scalar(&self) -> Scalar {
        Scalar::Bool(*self)
    }
}

impl ScalarSlot for bool {
    fn scalar_tag(&self) -> ScalarTag {
        ScalarTag::primitive(Repr::Bool)
    }

    fn store(&mut self, value: Scalar) -> bool {
        match value {
            Scalar::Bool(v) => {
                *self = v;
                true
            }
            _ => false,
        }
    }
}

impl_primitive_reflect!(bool);

impl Primitive for String {
    const REPR: Repr = Repr::Text;
}

impl ToScalar for String {
    fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.clone())
    }
}

impl ScalarSlot for String {
    fn scalar_tag(&self) -> ScalarTag {
        ScalarTag::primitive(Repr::Text)
    }

    fn store(&mut self, value: Scalar) -> bool {
        match value {
            Scalar::Text(v) => {
                *self = v;
                true
            }
            _ => false,
        }
    }
}

impl_primitive_reflect!(String);
