use std::fmt;

/// Signed integer width of an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
}

impl IntWidth {
    /// Whether `n` fits in a field of this width
    pub fn contains(self, n: i64) -> bool {
        match self {
            IntWidth::I8 => i8::try_from(n).is_ok(),
            IntWidth::I16 => i16::try_from(n).is_ok(),
            IntWidth::I32 => i32::try_from(n).is_ok(),
            IntWidth::I64 | IntWidth::I128 => true,
            IntWidth::Isize => isize::try_from(n).is_ok(),
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntWidth::I8 => "i8",
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
            IntWidth::I64 => "i64",
            IntWidth::I128 => "i128",
            IntWidth::Isize => "isize",
        };
        f.write_str(name)
    }
}

/// The atomic kinds a value can be coerced into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScalarKind {
    Bool,
    Str,
    Int(IntWidth),
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Bool => f.write_str("bool"),
            ScalarKind::Str => f.write_str("string"),
            ScalarKind::Int(width) => width.fmt(f),
        }
    }
}

/// Resolved kind of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldKind {
    Scalar(ScalarKind),
    /// Ordered list of one scalar kind, read from a comma separated value
    Seq(ScalarKind),
    /// Any other declared type, carrying its name for error reporting
    Unsupported(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(scalar) => scalar.fmt(f),
            FieldKind::Seq(scalar) => write!(f, "list<{}>", scalar),
            FieldKind::Unsupported(name) => write!(f, "unsupported ({})", name),
        }
    }
}

/// Per-field metadata used by the binder
///
/// The derive macro produces one of these per struct field. Records can also
/// implement [`Record`](crate::Record) by hand and build the table directly:
///
/// ```rust
/// use envar::{FieldDescriptor, FieldKind, IntWidth, ScalarKind};
///
/// let port = FieldDescriptor::new("port", FieldKind::Scalar(ScalarKind::Int(IntWidth::I32)))
///     .with_key("SERVICE_PORT");
/// assert_eq!(port.resolved_key(), "SERVICE_PORT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: &'static str,
    /// Explicit environment key, falls back to `name` when absent or empty
    pub key: Option<&'static str>,
    /// Declared type of the field
    pub kind: FieldKind,
    /// Unsettable fields are skipped without error
    pub settable: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            key: None,
            kind,
            settable: true,
        }
    }

    pub const fn with_key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    /// Mark the field as not writable by the binder
    pub const fn unsettable(mut self) -> Self {
        self.settable = false;
        self
    }

    /// The environment variable this field is read from
    pub fn resolved_key(&self) -> &'static str {
        match self.key {
            Some(key) if !key.is_empty() => key,
            _ => self.name,
        }
    }
}
