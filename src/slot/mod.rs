//! # Slot Definitions
//!
//! A `SlotDefinition` is the resolved binding of one declared child slot:
//! validated cardinality metadata plus exactly one accessor and one mutator,
//! looked up once on the declaring type's descriptor.
//!
//! Construction either fails with [`Error::Configuration`] or produces a
//! definition that never changes again. After that, only the instances
//! passed to the accessor and mutator can cause failures.

pub mod naming;

use serde::{Deserialize, Serialize};

use crate::binding::{
    Accessor, Binding, BindingShape, ListAccessor, ListMutator, Mutator, ScalarAccessor,
    ScalarMutator, SlotSite,
};
use crate::model::descriptor::MemberHandle;
use crate::model::{Member, MemberKind, SlotType, TypeDescriptor, TypeInfo, ValueType};
use crate::{Error, Result};

pub use naming::NamingConvention;

/// `max_occurs` sentinel for "no upper bound".
pub const UNBOUNDED: i32 = -1;

// ============================================================================
// SlotDecl — inbound slot descriptor
// ============================================================================

/// One child slot as declared by the model-registration side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDecl {
    pub element_name: String,
    pub min_occurs: i32,
    /// `UNBOUNDED` (-1) or at least `min_occurs`.
    pub max_occurs: i32,
    pub slot_type: SlotType,
}

impl SlotDecl {
    pub fn new(element_name: impl Into<String>, min_occurs: i32, max_occurs: i32, slot_type: SlotType) -> Self {
        Self { element_name: element_name.into(), min_occurs, max_occurs, slot_type }
    }

    /// Optional single-valued slot (`0..1`).
    pub fn scalar(element_name: impl Into<String>, ty: ValueType) -> Self {
        Self::new(element_name, 0, 1, SlotType::Scalar(ty))
    }

    /// Optional unbounded list slot (`0..*`).
    pub fn list(element_name: impl Into<String>, ty: ValueType) -> Self {
        Self::new(element_name, 0, UNBOUNDED, SlotType::List(ty))
    }

    pub fn with_cardinality(mut self, min_occurs: i32, max_occurs: i32) -> Self {
        self.min_occurs = min_occurs;
        self.max_occurs = max_occurs;
        self
    }

    /// Check the cardinality and name invariants.
    pub fn validate(&self) -> Result<()> {
        if self.min_occurs < 0 {
            return Err(Error::Configuration(format!(
                "min occurs must be >= 0 (got {})",
                self.min_occurs
            )));
        }
        if self.max_occurs != UNBOUNDED && self.max_occurs < self.min_occurs {
            return Err(Error::Configuration(format!(
                "max occurs must be >= min occurs unless it is -1 / unbounded (min {}, max {})",
                self.min_occurs, self.max_occurs
            )));
        }
        if self.element_name.trim().is_empty() {
            return Err(Error::Configuration("element name must not be blank".into()));
        }
        Ok(())
    }
}

// ============================================================================
// SlotDefinition
// ============================================================================

/// A validated, resolved child slot. Immutable and shareable across threads.
///
/// The element name is stored trimmed, the same form member lookup uses.
#[derive(Debug)]
pub struct SlotDefinition {
    element_name: String,
    min_occurs: i32,
    max_occurs: i32,
    declaring_type: TypeInfo,
    target_type: SlotType,
    binding: Binding,
}

impl SlotDefinition {
    /// Resolve a slot from its parts, using the default naming convention.
    pub fn new(
        declaring: &TypeDescriptor,
        min_occurs: i32,
        max_occurs: i32,
        element_name: &str,
        slot_type: SlotType,
    ) -> Result<Self> {
        Self::resolve(declaring, &SlotDecl::new(element_name, min_occurs, max_occurs, slot_type))
    }

    pub fn resolve(declaring: &TypeDescriptor, decl: &SlotDecl) -> Result<Self> {
        Self::resolve_with(declaring, decl, &NamingConvention::default())
    }

    /// Validate `decl`, locate the read/write members on `declaring` and
    /// build the binding of the matching shape.
    pub fn resolve_with(
        declaring: &TypeDescriptor,
        decl: &SlotDecl,
        naming: &NamingConvention,
    ) -> Result<Self> {
        decl.validate()?;
        naming.validate()?;

        let element_name = decl.element_name.trim();
        let read_name = naming.read_member(element_name);
        let write_name = naming.write_member(element_name);
        let reader = find_member(declaring, MemberKind::Read, &read_name, decl.slot_type)?;
        let writer = find_member(declaring, MemberKind::Write, &write_name, decl.slot_type)?;

        let site = SlotSite::new(element_name, declaring.info());
        let binding = match (decl.slot_type, reader.handle(), writer.handle()) {
            (SlotType::Scalar(ty), MemberHandle::ScalarRead(read), MemberHandle::ScalarWrite(write)) => {
                Binding::Scalar {
                    accessor: ScalarAccessor::new(site.clone(), read.clone()),
                    mutator: ScalarMutator::new(site, ty, write.clone()),
                }
            }
            (SlotType::List(_), MemberHandle::ListRead(read), MemberHandle::ListWrite(write)) => {
                let accessor = ListAccessor::new(site, read.clone());
                Binding::List {
                    mutator: ListMutator::new(accessor.clone(), write.clone()),
                    accessor,
                }
            }
            _ => {
                return Err(Error::Configuration(format!(
                    "members `{read_name}` / `{write_name}` on `{}` do not have the shape of `{}`",
                    declaring.name(),
                    decl.slot_type
                )));
            }
        };

        tracing::debug!(
            element = element_name,
            declaring_type = declaring.name(),
            shape = ?binding.shape(),
            "resolved slot binding"
        );

        Ok(Self {
            element_name: element_name.to_string(),
            min_occurs: decl.min_occurs,
            max_occurs: decl.max_occurs,
            declaring_type: declaring.info(),
            target_type: decl.slot_type,
            binding,
        })
    }

    pub fn element_name(&self) -> &str { &self.element_name }
    pub fn min_occurs(&self) -> i32 { self.min_occurs }
    pub fn max_occurs(&self) -> i32 { self.max_occurs }
    pub fn is_unbounded(&self) -> bool { self.max_occurs == UNBOUNDED }
    pub fn declaring_type(&self) -> TypeInfo { self.declaring_type }
    pub fn target_type(&self) -> SlotType { self.target_type }

    pub fn shape(&self) -> BindingShape { self.binding.shape() }
    pub fn binding(&self) -> &Binding { &self.binding }
    pub fn accessor(&self) -> &dyn Accessor { self.binding.accessor() }
    pub fn mutator(&self) -> &dyn Mutator { self.binding.mutator() }
}

fn find_member<'d>(
    declaring: &'d TypeDescriptor,
    kind: MemberKind,
    name: &str,
    slot_type: SlotType,
) -> Result<&'d Member> {
    if let Some(member) = declaring.find(kind, name, slot_type) {
        return Ok(member);
    }
    let label = match kind {
        MemberKind::Read => "read",
        MemberKind::Write => "write",
    };
    let message = if declaring.has_member(kind, name) {
        format!("`{}` has no {label} member `{name}` of type `{slot_type}`", declaring.name())
    } else {
        format!("`{}` has no {label} member `{name}`", declaring.name())
    };
    Err(Error::Configuration(message))
}
