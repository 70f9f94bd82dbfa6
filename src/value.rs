use crate::error::BindError;
use crate::field::{FieldKind, IntWidth, ScalarKind};

/// A coerced environment value, ready to be written into a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Str(String),
    Int(i64),
    Seq(Vec<Value>),
}

impl Value {
    fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Seq(_) => "list",
        }
    }
}

/// Conversion from a coerced [`Value`] into a concrete field type
///
/// Used by `#[derive(Envar)]` to write values into fields. A shape mismatch
/// means the record's descriptor table disagrees with its fields.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, BindError>;
}

fn mismatch(expected: &str, got: &Value) -> BindError {
    BindError::invalid_target(format!(
        "expected {} value, got {}",
        expected,
        got.kind_name()
    ))
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, BindError> {
                    match value {
                        Value::Int(n) => <$ty>::try_from(n).map_err(|_| {
                            BindError::invalid_target(format!(
                                "integer {} does not fit in {}",
                                n,
                                stringify!($ty)
                            ))
                        }),
                        other => Err(mismatch(stringify!($ty), &other)),
                    }
                }
            }
        )*
    };
}

impl_from_value_int!(i8, i16, i32, i64, i128, isize);

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Seq(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("list", &other)),
        }
    }
}

/// A field type the binder can coerce into, resolved through the type system
///
/// Implemented for `bool`, `String`, the signed integers and `Vec` of those,
/// so type aliases classify the same as the types they name.
pub trait FieldType: FromValue {
    const KIND: FieldKind;
}

/// Element types allowed inside a list field
pub trait ScalarType: FieldType {
    const SCALAR: ScalarKind;
}

macro_rules! impl_scalar_type {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::Scalar($kind);
            }

            impl ScalarType for $ty {
                const SCALAR: ScalarKind = $kind;
            }
        )*
    };
}

impl_scalar_type!(
    bool => ScalarKind::Bool,
    String => ScalarKind::Str,
    i8 => ScalarKind::Int(IntWidth::I8),
    i16 => ScalarKind::Int(IntWidth::I16),
    i32 => ScalarKind::Int(IntWidth::I32),
    i64 => ScalarKind::Int(IntWidth::I64),
    i128 => ScalarKind::Int(IntWidth::I128),
    isize => ScalarKind::Int(IntWidth::Isize),
);

impl<T: ScalarType> FieldType for Vec<T> {
    const KIND: FieldKind = FieldKind::Seq(T::SCALAR);
}
