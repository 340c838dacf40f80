//! # Slot Bindings
//!
//! The capability contracts every resolved slot exposes, and the two
//! shapes that implement them.
//!
//! | Shape | Module | Read | Write |
//! |-------|--------|------|-------|
//! | Scalar | `scalar` | 0 or 1 values | replaces the held value |
//! | List | `list` | the held sequence | appends, creating the list on first write |
//!
//! Only two shapes exist, so they are a closed enum (`Binding`) rather than
//! an open trait hierarchy. Callers that do not care about the shape go
//! through `&dyn Accessor` / `&dyn Mutator`.

pub mod scalar;
pub mod list;

use std::any::Any;
use std::sync::Arc;

use crate::model::{TypeInfo, Value};
use crate::{Error, Result};

pub use scalar::{ScalarAccessor, ScalarMutator};
pub use list::{ListAccessor, ListMutator};

// ============================================================================
// Capability contracts
// ============================================================================

/// Reads the values of one slot from target instances.
pub trait Accessor: Send + Sync {
    /// Current values of the slot on `target`, in order. Never mutates the
    /// target.
    ///
    /// Fails with [`Error::BindingInvocation`] when `target` is not an
    /// instance of the slot's declaring type.
    fn get_values<'a>(&self, target: &'a dyn Any) -> Result<&'a [Value]>;
}

/// Writes one value into a slot on target instances.
pub trait Mutator: Send + Sync {
    /// Add `value` to the slot on `target`. For scalar slots this replaces
    /// the held value; for list slots it appends.
    ///
    /// Fails with [`Error::BindingInvocation`] when `target` is not an
    /// instance of the declaring type, or [`Error::TypeMismatch`] when a
    /// scalar slot cannot hold `value`.
    fn add_value(&self, target: &mut dyn Any, value: Value) -> Result<()>;
}

// ============================================================================
// Binding
// ============================================================================

/// Which of the two binding shapes a slot resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingShape {
    Scalar,
    List,
}

/// The resolved accessor/mutator pair of one slot.
pub enum Binding {
    Scalar { accessor: ScalarAccessor, mutator: ScalarMutator },
    List { accessor: ListAccessor, mutator: ListMutator },
}

impl Binding {
    pub fn shape(&self) -> BindingShape {
        match self {
            Binding::Scalar { .. } => BindingShape::Scalar,
            Binding::List { .. } => BindingShape::List,
        }
    }

    pub fn accessor(&self) -> &dyn Accessor {
        match self {
            Binding::Scalar { accessor, .. } => accessor,
            Binding::List { accessor, .. } => accessor,
        }
    }

    pub fn mutator(&self) -> &dyn Mutator {
        match self {
            Binding::Scalar { mutator, .. } => mutator,
            Binding::List { mutator, .. } => mutator,
        }
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Binding").field(&self.shape()).finish()
    }
}

// ============================================================================
// Shared state captured by each binding
// ============================================================================

/// Element name and declaring type, copied into every accessor and mutator
/// for error reporting.
#[derive(Debug, Clone)]
pub(crate) struct SlotSite {
    pub(crate) element: Arc<str>,
    pub(crate) declaring: TypeInfo,
}

impl SlotSite {
    pub(crate) fn new(element: &str, declaring: TypeInfo) -> Self {
        Self { element: Arc::from(element), declaring }
    }

    pub(crate) fn wrong_target(&self) -> Error {
        self.invocation_error(format!("target is not an instance of `{}`", self.declaring))
    }

    pub(crate) fn invocation_error(&self, message: impl Into<String>) -> Error {
        Error::BindingInvocation {
            element: self.element.to_string(),
            message: message.into(),
        }
    }
}
