mod binder;
pub mod docs;
mod environment;
pub mod error;
pub mod field;
#[doc(hidden)]
pub mod macros;
pub mod value;

// Re-export main types
pub use error::BindError;
pub use field::{FieldDescriptor, FieldKind, IntWidth, ScalarKind};
pub use value::{FieldType, FromValue, ScalarType, Value};

// Re-export macro
pub use envar_macros::Envar;

use environment::ProcessEnv;

/// A struct whose fields can be populated from environment variables
///
/// Usually implemented with `#[derive(Envar)]`. A hand-written impl supplies
/// the descriptor table directly.
pub trait Record {
    /// Descriptors for every field, in declaration order
    fn fields() -> Vec<FieldDescriptor>;

    /// Write a coerced value into the field at `index` of [`Record::fields`]
    ///
    /// Returns [`BindError::InvalidTarget`] when there is no writable field at
    /// `index` or the value does not fit it.
    fn assign(&mut self, index: usize, value: Value) -> Result<(), BindError>;
}

/// Populate `record` from the process environment
///
/// Each settable field is read from its explicit key, or its name when no key
/// is given. Unset and empty variables leave the field untouched. Unsettable
/// (private) fields are skipped silently and never produce an error.
///
/// The first failure is returned immediately. Fields bound before it keep
/// their new values; use [`bind_atomic`] when that is not acceptable.
///
/// # Example
/// ```rust
/// use envar::Envar;
///
/// #[derive(Envar, Default)]
/// struct Config {
///     #[envar("DOC_EXAMPLE_PORT")]
///     pub port: i32,
///     pub tags: Vec<String>,
/// }
///
/// std::env::set_var("DOC_EXAMPLE_PORT", "8080");
/// let mut config = Config::default();
/// envar::bind(&mut config).unwrap();
/// assert_eq!(config.port, 8080);
/// ```
pub fn bind<R: Record>(record: &mut R) -> Result<(), BindError> {
    binder::bind_with(record, &ProcessEnv)
}

/// Populate `record` from the process environment, all or nothing
///
/// Binds onto a clone and swaps it in only on success, so a failing call
/// leaves `record` exactly as it was.
pub fn bind_atomic<R: Record + Clone>(record: &mut R) -> Result<(), BindError> {
    let mut scratch = record.clone();
    bind(&mut scratch)?;
    *record = scratch;
    Ok(())
}

/// Build a record from its `Default` and bind the process environment onto it
pub fn from_env<R: Record + Default>() -> Result<R, BindError> {
    let mut record = R::default();
    bind(&mut record)?;
    Ok(record)
}
