//! Type descriptors — the introspection surface of a declaring type.
//!
//! Rust has no runtime reflection, so a model type publishes its read and
//! write members once, as typed function pointers. The builder erases them
//! behind `Any`-downcasting handles; a downcast that fails is reported as
//! [`WrongTarget`] and turned into a binding invocation error by the caller.
//!
//! ```rust
//! use element_binding::{TypeDescriptor, Value, ValueType};
//!
//! #[derive(Default)]
//! struct Patient { name: Option<Value> }
//!
//! impl Patient {
//!     fn name(&self) -> Option<&Value> { self.name.as_ref() }
//!     fn set_name(&mut self, v: Option<Value>) { self.name = v; }
//! }
//!
//! let descriptor = TypeDescriptor::builder::<Patient>()
//!     .scalar_getter("name", ValueType::String, Patient::name)
//!     .scalar_setter("set_name", ValueType::String, Patient::set_name)
//!     .build();
//! assert_eq!(descriptor.name(), "Patient");
//! ```

use std::any::{self, Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{SlotType, Value, ValueType};

// ============================================================================
// TypeInfo
// ============================================================================

/// Identity of a declaring type: its `TypeId` plus a short display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    name: &'static str,
    id: TypeId,
}

impl TypeInfo {
    pub fn of<T: Any>() -> Self {
        Self { name: short_type_name::<T>(), id: TypeId::of::<T>() }
    }

    pub fn name(&self) -> &'static str { self.name }
    pub fn id(&self) -> TypeId { self.id }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// `my_crate::model::Patient<X>` → `Patient`
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

// ============================================================================
// Erased member handles
// ============================================================================

/// The target passed to a member handle is not an instance of the
/// member's declaring type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WrongTarget;

pub(crate) trait ScalarRead: Send + Sync {
    fn read<'a>(&self, target: &'a dyn Any) -> Result<Option<&'a Value>, WrongTarget>;
}

pub(crate) trait ScalarWrite: Send + Sync {
    fn write(&self, target: &mut dyn Any, value: Option<Value>) -> Result<(), WrongTarget>;
}

pub(crate) trait ListRead: Send + Sync {
    fn read<'a>(&self, target: &'a dyn Any) -> Result<Option<&'a [Value]>, WrongTarget>;
    fn read_mut<'a>(&self, target: &'a mut dyn Any) -> Result<Option<&'a mut Vec<Value>>, WrongTarget>;
}

pub(crate) trait ListWrite: Send + Sync {
    fn write(&self, target: &mut dyn Any, list: Vec<Value>) -> Result<(), WrongTarget>;
}

struct FnScalarRead<T>(fn(&T) -> Option<&Value>);
struct FnScalarWrite<T>(fn(&mut T, Option<Value>));
struct FnListRead<T> {
    get: fn(&T) -> Option<&[Value]>,
    get_mut: fn(&mut T) -> Option<&mut Vec<Value>>,
}
struct FnListWrite<T>(fn(&mut T, Vec<Value>));

impl<T: Any> ScalarRead for FnScalarRead<T> {
    fn read<'a>(&self, target: &'a dyn Any) -> Result<Option<&'a Value>, WrongTarget> {
        target.downcast_ref::<T>().map(self.0).ok_or(WrongTarget)
    }
}

impl<T: Any> ScalarWrite for FnScalarWrite<T> {
    fn write(&self, target: &mut dyn Any, value: Option<Value>) -> Result<(), WrongTarget> {
        let target = target.downcast_mut::<T>().ok_or(WrongTarget)?;
        (self.0)(target, value);
        Ok(())
    }
}

impl<T: Any> ListRead for FnListRead<T> {
    fn read<'a>(&self, target: &'a dyn Any) -> Result<Option<&'a [Value]>, WrongTarget> {
        target.downcast_ref::<T>().map(self.get).ok_or(WrongTarget)
    }

    fn read_mut<'a>(&self, target: &'a mut dyn Any) -> Result<Option<&'a mut Vec<Value>>, WrongTarget> {
        target.downcast_mut::<T>().map(self.get_mut).ok_or(WrongTarget)
    }
}

impl<T: Any> ListWrite for FnListWrite<T> {
    fn write(&self, target: &mut dyn Any, list: Vec<Value>) -> Result<(), WrongTarget> {
        let target = target.downcast_mut::<T>().ok_or(WrongTarget)?;
        (self.0)(target, list);
        Ok(())
    }
}

#[derive(Clone)]
pub(crate) enum MemberHandle {
    ScalarRead(Arc<dyn ScalarRead>),
    ScalarWrite(Arc<dyn ScalarWrite>),
    ListRead(Arc<dyn ListRead>),
    ListWrite(Arc<dyn ListWrite>),
}

// ============================================================================
// Member
// ============================================================================

/// Whether a member reads the slot or writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Read,
    Write,
}

/// One published read or write member of a declaring type.
#[derive(Clone)]
pub struct Member {
    name: String,
    kind: MemberKind,
    /// Return type for reads, parameter type for writes.
    slot_type: SlotType,
    handle: MemberHandle,
}

impl Member {
    pub fn name(&self) -> &str { &self.name }
    pub fn kind(&self) -> MemberKind { self.kind }
    pub fn slot_type(&self) -> SlotType { self.slot_type }

    pub(crate) fn handle(&self) -> &MemberHandle { &self.handle }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("slot_type", &self.slot_type)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TypeDescriptor
// ============================================================================

/// The published members of one declaring type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    info: TypeInfo,
    members: Vec<Member>,
}

impl TypeDescriptor {
    pub fn builder<T: Any>() -> DescriptorBuilder<T> {
        DescriptorBuilder { members: Vec::new(), _marker: PhantomData }
    }

    pub fn info(&self) -> TypeInfo { self.info }
    pub fn name(&self) -> &'static str { self.info.name() }
    pub fn members(&self) -> &[Member] { &self.members }

    /// Find a member by kind, name and exact slot type. Members sharing the
    /// name but declared with another type are skipped.
    pub fn find(&self, kind: MemberKind, name: &str, slot_type: SlotType) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.kind == kind && m.name == name && m.slot_type == slot_type)
    }

    /// Whether any member of the given kind carries this name, regardless
    /// of its type.
    pub fn has_member(&self, kind: MemberKind, name: &str) -> bool {
        self.members.iter().any(|m| m.kind == kind && m.name == name)
    }
}

/// Collects the members of `T` into a [`TypeDescriptor`].
pub struct DescriptorBuilder<T> {
    members: Vec<Member>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any> DescriptorBuilder<T> {
    pub fn scalar_getter(
        self,
        name: impl Into<String>,
        ty: ValueType,
        get: fn(&T) -> Option<&Value>,
    ) -> Self {
        self.push(name, MemberKind::Read, SlotType::Scalar(ty), MemberHandle::ScalarRead(Arc::new(FnScalarRead(get))))
    }

    pub fn scalar_setter(
        self,
        name: impl Into<String>,
        ty: ValueType,
        set: fn(&mut T, Option<Value>),
    ) -> Self {
        self.push(name, MemberKind::Write, SlotType::Scalar(ty), MemberHandle::ScalarWrite(Arc::new(FnScalarWrite(set))))
    }

    /// A list read member needs both a shared and an exclusive view so the
    /// collection mutator can append in place.
    pub fn list_getter(
        self,
        name: impl Into<String>,
        ty: ValueType,
        get: fn(&T) -> Option<&[Value]>,
        get_mut: fn(&mut T) -> Option<&mut Vec<Value>>,
    ) -> Self {
        let handle = MemberHandle::ListRead(Arc::new(FnListRead { get, get_mut }));
        self.push(name, MemberKind::Read, SlotType::List(ty), handle)
    }

    pub fn list_setter(
        self,
        name: impl Into<String>,
        ty: ValueType,
        set: fn(&mut T, Vec<Value>),
    ) -> Self {
        self.push(name, MemberKind::Write, SlotType::List(ty), MemberHandle::ListWrite(Arc::new(FnListWrite(set))))
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor { info: TypeInfo::of::<T>(), members: self.members }
    }

    fn push(mut self, name: impl Into<String>, kind: MemberKind, slot_type: SlotType, handle: MemberHandle) -> Self {
        self.members.push(Member { name: name.into(), kind, slot_type, handle });
        self
    }
}
