// This module provides helpers used by the code `#[derive(Envar)]` generates.
// The derive itself lives in the envar-macros crate.
//
// Field kinds are resolved through `FieldType` rather than by reading the
// type's tokens, so aliases classify like the types they name. Types without
// a `FieldType` impl fall back to `Unsupported` through autoref method
// resolution: `(&&FieldSlot::<T>::new()).field_kind(..)` picks `ViaFieldType`
// when `T: FieldType` holds and `ViaFallback` otherwise.

use crate::error::BindError;
use crate::field::FieldKind;
use crate::value::{FieldType, Value};
use std::marker::PhantomData;

#[doc(hidden)]
pub struct FieldSlot<T>(PhantomData<fn() -> T>);

impl<T> FieldSlot<T> {
    #[doc(hidden)]
    pub const fn new() -> Self {
        FieldSlot(PhantomData)
    }
}

#[doc(hidden)]
pub trait ViaFieldType {
    type Field;

    fn field_kind(&self, name: &'static str) -> FieldKind;

    fn convert(&self, value: Value) -> Result<Self::Field, BindError>;
}

impl<T: FieldType> ViaFieldType for &FieldSlot<T> {
    type Field = T;

    fn field_kind(&self, _name: &'static str) -> FieldKind {
        T::KIND
    }

    fn convert(&self, value: Value) -> Result<T, BindError> {
        T::from_value(value)
    }
}

#[doc(hidden)]
pub trait ViaFallback {
    type Field;

    fn field_kind(&self, name: &'static str) -> FieldKind;

    fn convert(&self, value: Value) -> Result<Self::Field, BindError>;
}

impl<T> ViaFallback for FieldSlot<T> {
    type Field = T;

    fn field_kind(&self, name: &'static str) -> FieldKind {
        FieldKind::Unsupported(name)
    }

    fn convert(&self, _value: Value) -> Result<T, BindError> {
        Err(BindError::invalid_target("field type cannot be bound"))
    }
}
