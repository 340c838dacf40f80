//! # Structural Model
//!
//! Pure data shared by every layer: slot values, declared slot types and
//! the type descriptors a model type publishes for binding resolution.
//!
//! Design rule: no binding logic here. This module describes types and
//! values; `binding` and `slot` decide what to do with them.

pub mod value;
pub mod slot_type;
pub mod descriptor;

pub use value::{Value, ValueType};
pub use slot_type::SlotType;
pub use descriptor::{DescriptorBuilder, Member, MemberKind, TypeDescriptor, TypeInfo};
