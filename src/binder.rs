use crate::Record;
use crate::environment::Lookup;
use crate::error::BindError;
use crate::field::{FieldKind, ScalarKind};
use crate::value::Value;
use tracing::{debug, trace};

/// Bind every settable field of `record` from `env`, in declaration order
///
/// A variable that is unset or set to the empty string leaves its field
/// untouched. The first coercion failure aborts the pass; fields written
/// before it keep their new values.
pub(crate) fn bind_with<R, L>(record: &mut R, env: &L) -> Result<(), BindError>
where
    R: Record,
    L: Lookup + ?Sized,
{
    for (index, field) in R::fields().iter().enumerate() {
        if !field.settable {
            trace!(field = field.name, "skipping unsettable field");
            continue;
        }

        let key = field.resolved_key();
        let raw = match env.get(key) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                trace!(field = field.name, key, "variable unset, leaving field unchanged");
                continue;
            }
        };

        let value = coerce(field.kind, key, &raw)?;
        record.assign(index, value)?;
        debug!(field = field.name, key, "bound field from environment");
    }

    Ok(())
}

/// Convert a raw environment string into a value of the given kind
pub(crate) fn coerce(kind: FieldKind, key: &str, raw: &str) -> Result<Value, BindError> {
    match kind {
        FieldKind::Scalar(scalar) => coerce_scalar(scalar, key, raw),
        // The list is built off-record, so a bad piece never leaks a partial list
        FieldKind::Seq(scalar) => split_list(raw)
            .map(|piece| coerce_scalar(scalar, key, piece))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Seq),
        FieldKind::Unsupported(name) => Err(BindError::UnsupportedType {
            key: key.to_string(),
            kind: name.to_string(),
        }),
    }
}

/// Split on every comma, keeping empty pieces and surrounding whitespace
pub(crate) fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
}

fn coerce_scalar(kind: ScalarKind, key: &str, raw: &str) -> Result<Value, BindError> {
    match kind {
        ScalarKind::Bool => match raw {
            "true" | "True" | "TRUE" => Ok(Value::Bool(true)),
            "false" | "False" | "FALSE" => Ok(Value::Bool(false)),
            _ => Err(BindError::InvalidBoolean {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        },
        ScalarKind::Str => Ok(Value::Str(raw.to_string())),
        ScalarKind::Int(width) => match raw.parse::<i64>() {
            Ok(n) if width.contains(n) => Ok(Value::Int(n)),
            _ => Err(BindError::InvalidInteger {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        },
    }
}
