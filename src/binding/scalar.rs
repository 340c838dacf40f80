//! Single-valued slot binding.

use std::any::Any;
use std::slice;
use std::sync::Arc;

use crate::model::descriptor::{ScalarRead, ScalarWrite};
use crate::model::{Value, ValueType};
use crate::{Error, Result};
use super::{Accessor, Mutator, SlotSite};

/// Reads a single-valued slot as a sequence of zero or one values.
///
/// An absent value and an explicit `Value::Null` both read as the empty
/// sequence.
#[derive(Clone)]
pub struct ScalarAccessor {
    site: SlotSite,
    read: Arc<dyn ScalarRead>,
}

impl ScalarAccessor {
    pub(crate) fn new(site: SlotSite, read: Arc<dyn ScalarRead>) -> Self {
        Self { site, read }
    }
}

impl Accessor for ScalarAccessor {
    fn get_values<'a>(&self, target: &'a dyn Any) -> Result<&'a [Value]> {
        let held = self.read.read(target).map_err(|_| self.site.wrong_target())?;
        Ok(match held {
            Some(value) if !value.is_null() => slice::from_ref(value),
            _ => &[],
        })
    }
}

/// Writes a single-valued slot. Every write replaces the held value, so
/// two `add_value` calls leave only the second value in place.
#[derive(Clone)]
pub struct ScalarMutator {
    site: SlotSite,
    target_type: ValueType,
    write: Arc<dyn ScalarWrite>,
}

impl ScalarMutator {
    pub(crate) fn new(site: SlotSite, target_type: ValueType, write: Arc<dyn ScalarWrite>) -> Self {
        Self { site, target_type, write }
    }

    pub fn target_type(&self) -> ValueType { self.target_type }
}

impl Mutator for ScalarMutator {
    fn add_value(&self, target: &mut dyn Any, value: Value) -> Result<()> {
        // Checked before the write member runs: a rejected value never
        // touches the target.
        if !self.target_type.accepts(&value) {
            return Err(Error::TypeMismatch {
                element: self.site.element.to_string(),
                expected: self.target_type.to_string(),
                got: value.type_name().to_string(),
            });
        }
        let value = (!value.is_null()).then_some(value);
        self.write.write(target, value).map_err(|_| self.site.wrong_target())
    }
}
