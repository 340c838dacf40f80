//! # element-binding — Structural Child-Slot Binding
//!
//! Resolve, once per declared slot, a uniform way to read and append the
//! values of a model type's child slots, whether the slot holds one value
//! or an ordered list.
//!
//! ## Design Principles
//!
//! 1. **Resolve once, invoke many**: member lookup and validation happen at
//!    registration; the resulting `SlotDefinition` never changes
//! 2. **Two shapes, one contract**: `Accessor` / `Mutator` hide whether a
//!    slot is scalar or list
//! 3. **Descriptors, not reflection**: model types publish their members
//!    through a `TypeDescriptor`
//! 4. **Split failures**: configuration errors surface at registration,
//!    invocation and type errors at call time
//!
//! ## Quick Start
//!
//! ```rust
//! use element_binding::{SlotDecl, SlotDefinition, TypeDescriptor, Value, ValueType};
//!
//! #[derive(Default)]
//! struct Patient { tag: Option<Vec<Value>> }
//!
//! impl Patient {
//!     fn tag(&self) -> Option<&[Value]> { self.tag.as_deref() }
//!     fn tag_mut(&mut self) -> Option<&mut Vec<Value>> { self.tag.as_mut() }
//!     fn set_tag(&mut self, v: Vec<Value>) { self.tag = Some(v); }
//! }
//!
//! # fn main() -> element_binding::Result<()> {
//! let descriptor = TypeDescriptor::builder::<Patient>()
//!     .list_getter("tag", ValueType::String, Patient::tag, Patient::tag_mut)
//!     .list_setter("set_tag", ValueType::String, Patient::set_tag)
//!     .build();
//! let slot = SlotDefinition::resolve(&descriptor, &SlotDecl::list("tag", ValueType::String))?;
//!
//! let mut patient = Patient::default();
//! slot.mutator().add_value(&mut patient, Value::from("a"))?;
//! slot.mutator().add_value(&mut patient, Value::from("b"))?;
//! assert_eq!(slot.accessor().get_values(&patient)?, &[Value::from("a"), Value::from("b")]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread safety
//!
//! Resolved definitions are immutable and `Send + Sync`. Target instances
//! are not synchronized here: concurrent writes to the same slot of the
//! same instance are the caller's to serialize.

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod binding;
pub mod slot;
pub mod registry;
pub mod geo;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Value, ValueType, SlotType,
    TypeDescriptor, DescriptorBuilder, TypeInfo, Member, MemberKind,
};

// ============================================================================
// Re-exports: Bindings and slots
// ============================================================================

pub use binding::{Accessor, Mutator, Binding, BindingShape};
pub use slot::{SlotDecl, SlotDefinition, NamingConvention, UNBOUNDED};
pub use registry::{Model, ElementDefinition, ModelRegistry};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed slot definition or failed member resolution. Raised only
    /// while building a definition.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A resolved member could not be invoked on the given target.
    #[error("Binding invocation error on `{element}`: {message}")]
    BindingInvocation { element: String, message: String },

    /// A scalar slot was offered a value of the wrong type.
    #[error("Type mismatch on `{element}`: expected {expected}, got {got}")]
    TypeMismatch { element: String, expected: String, got: String },
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
