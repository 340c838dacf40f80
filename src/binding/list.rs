//! Multi-valued slot binding with lazy list creation.
//!
//! ## Caller contract
//!
//! `ListMutator::add_value` is read, then (if needed) create-and-install,
//! then append. Nothing here locks the target: two threads appending to the
//! same slot of the same instance must synchronize themselves, or an append
//! can be lost or the list installed twice. Distinct instances need no
//! coordination.
//!
//! `max_occurs` is not consulted on append.

use std::any::Any;
use std::sync::Arc;

use crate::model::descriptor::{ListRead, ListWrite};
use crate::model::Value;
use crate::Result;
use super::{Accessor, Mutator, SlotSite};

/// Reads a multi-valued slot. A list that was never created reads as empty.
#[derive(Clone)]
pub struct ListAccessor {
    site: SlotSite,
    read: Arc<dyn ListRead>,
}

impl ListAccessor {
    pub(crate) fn new(site: SlotSite, read: Arc<dyn ListRead>) -> Self {
        Self { site, read }
    }

    /// Whether the list has been created on `target`. An empty but present
    /// list counts as created.
    pub fn is_present(&self, target: &dyn Any) -> Result<bool> {
        let held = self.read.read(target).map_err(|_| self.site.wrong_target())?;
        Ok(held.is_some())
    }

    fn values_mut<'a>(&self, target: &'a mut dyn Any) -> Result<Option<&'a mut Vec<Value>>> {
        self.read.read_mut(target).map_err(|_| self.site.wrong_target())
    }
}

impl Accessor for ListAccessor {
    fn get_values<'a>(&self, target: &'a dyn Any) -> Result<&'a [Value]> {
        let held = self.read.read(target).map_err(|_| self.site.wrong_target())?;
        Ok(held.unwrap_or(&[]))
    }
}

/// Appends to a multi-valued slot, creating and installing an empty list
/// through the write member on first use.
#[derive(Clone)]
pub struct ListMutator {
    accessor: ListAccessor,
    write: Arc<dyn ListWrite>,
}

impl ListMutator {
    pub(crate) fn new(accessor: ListAccessor, write: Arc<dyn ListWrite>) -> Self {
        Self { accessor, write }
    }
}

impl Mutator for ListMutator {
    fn add_value(&self, target: &mut dyn Any, value: Value) -> Result<()> {
        let site = &self.accessor.site;
        if self.accessor.values_mut(target)?.is_none() {
            self.write.write(target, Vec::new()).map_err(|_| site.wrong_target())?;
        }
        match self.accessor.values_mut(target)? {
            Some(list) => {
                list.push(value);
                Ok(())
            }
            None => Err(site.invocation_error("write member did not install a list")),
        }
    }
}
