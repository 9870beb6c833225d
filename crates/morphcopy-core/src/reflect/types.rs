//! Declared type tags for reflected values.

use std::fmt;

/// Machine representation of a scalar leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Text,
}

/// Coarse scalar kind. Scalars convert only within one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Numeric,
    Text,
}

impl Repr {
    pub const fn name(self) -> &'static str {
        match self {
            Repr::Bool => "bool",
            Repr::I8 => "i8",
            Repr::I16 => "i16",
            Repr::I32 => "i32",
            Repr::I64 => "i64",
            Repr::Isize => "isize",
            Repr::U8 => "u8",
            Repr::U16 => "u16",
            Repr::U32 => "u32",
            Repr::U64 => "u64",
            Repr::Usize => "usize",
            Repr::F32 => "f32",
            Repr::F64 => "f64",
            Repr::Text => "String",
        }
    }

    pub fn kind(self) -> ScalarKind {
        match self {
            Repr::Bool => ScalarKind::Bool,
            Repr::Text => ScalarKind::Text,
            _ => ScalarKind::Numeric,
        }
    }

    /// Inclusive value range for integer representations.
    pub fn int_bounds(self) -> Option<(i128, i128)> {
        let bounds = match self {
            Repr::I8 => (i8::MIN as i128, i8::MAX as i128),
            Repr::I16 => (i16::MIN as i128, i16::MAX as i128),
            Repr::I32 => (i32::MIN as i128, i32::MAX as i128),
            Repr::I64 => (i64::MIN as i128, i64::MAX as i128),
            Repr::Isize => (isize::MIN as i128, isize::MAX as i128),
            Repr::U8 => (0, u8::MAX as i128),
            Repr::U16 => (0, u16::MAX as i128),
            Repr::U32 => (0, u32::MAX as i128),
            Repr::U64 => (0, u64::MAX as i128),
            Repr::Usize => (0, usize::MAX as i128),
            Repr::Bool | Repr::F32 | Repr::F64 | Repr::Text => return None,
        };
        Some(bounds)
    }
}

/// A scalar type: its declared name plus the representation underneath.
///
/// Primitives are named after themselves; an alias keeps its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarTag {
    pub name: &'static str,
    pub repr: Repr,
}

impl ScalarTag {
    pub const fn new(name: &'static str, repr: Repr) -> Self {
        Self { name, repr }
    }

    pub const fn primitive(repr: Repr) -> Self {
        Self {
            name: repr.name(),
            repr,
        }
    }
}

/// Structural kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Bool,
    Numeric,
    Text,
    Record,
    Sequence,
    Optional,
}

/// The declared type of a reflected value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Scalar(ScalarTag),
    Record(&'static str),
    Sequence(Box<TypeTag>),
    Optional(Box<TypeTag>),
}

impl TypeTag {
    pub fn shape_kind(&self) -> ShapeKind {
        match self {
            TypeTag::Scalar(tag) => match tag.repr.kind() {
                ScalarKind::Bool => ShapeKind::Bool,
                ScalarKind::Numeric => ShapeKind::Numeric,
                ScalarKind::Text => ShapeKind::Text,
            },
            TypeTag::Record(_) => ShapeKind::Record,
            TypeTag::Sequence(_) => ShapeKind::Sequence,
            TypeTag::Optional(_) => ShapeKind::Optional,
        }
    }

    /// Strip every optional layer.
    pub fn unwrap_optional(&self) -> &TypeTag {
        match self {
            TypeTag::Optional(inner) => inner.unwrap_optional(),
            other => other,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, TypeTag::Record(_))
    }

    /// Returns `true` if a value of type `self` can be copied into `other`.
    ///
    /// Optional layers are ignored on both sides. Scalars must share a
    /// [`ScalarKind`], records always pair, sequences pair when their
    /// elements do.
    pub fn is_compatible_with(&self, other: &TypeTag) -> bool {
        match (self.unwrap_optional(), other.unwrap_optional()) {
            (TypeTag::Scalar(a), TypeTag::Scalar(b)) => a.repr.kind() == b.repr.kind(),
            (TypeTag::Record(_), TypeTag::Record(_)) => true,
            (TypeTag::Sequence(a), TypeTag::Sequence(b)) => a.is_compatible_with(b),
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Scalar(tag) => write!(f, "{}", tag.name),
            TypeTag::Record(name) => write!(f, "{}", name),
            TypeTag::Sequence(inner) => write!(f, "Vec<{}>", inner),
            TypeTag::Optional(inner) => write!(f, "Option<{}>", inner),
        }
    }
}
