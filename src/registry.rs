//! Model registry.
//!
//! Resolves every declared slot of a model type once, at registration, and
//! keeps the resulting `ElementDefinition` for the life of the registry.
//! Definitions are handed out as `Arc`s and are read-only, so any number of
//! threads may use them at once.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::{TypeDescriptor, TypeInfo};
use crate::slot::{NamingConvention, SlotDecl, SlotDefinition};
use crate::{Error, Result};

// ============================================================================
// Model trait
// ============================================================================

/// A structural model type: publishes its members and declares its slots.
pub trait Model: Any {
    fn descriptor() -> TypeDescriptor;
    fn slots() -> Vec<SlotDecl>;
}

// ============================================================================
// ElementDefinition
// ============================================================================

/// All resolved slots of one model type, in declaration order.
#[derive(Debug)]
pub struct ElementDefinition {
    info: TypeInfo,
    slots: Vec<Arc<SlotDefinition>>,
    by_name: HashMap<String, usize>,
}

impl ElementDefinition {
    /// Resolve every slot in `decls` against `descriptor`. The first failing
    /// slot fails the whole definition.
    ///
    /// Two declarations that resolve to the same read member (`birthDate`
    /// and `birth_date`) are duplicates.
    pub fn resolve(
        descriptor: &TypeDescriptor,
        decls: &[SlotDecl],
        naming: &NamingConvention,
    ) -> Result<Self> {
        let mut slots = Vec::with_capacity(decls.len());
        let mut by_name = HashMap::with_capacity(decls.len());
        let mut bound_members = HashSet::with_capacity(decls.len());
        for decl in decls {
            let slot = SlotDefinition::resolve_with(descriptor, decl, naming)?;
            let member = naming.read_member(slot.element_name());
            if !bound_members.insert(member.clone()) {
                return Err(Error::Configuration(format!(
                    "`{}` declares element `{}` more than once (member `{member}` is already bound)",
                    descriptor.name(),
                    slot.element_name()
                )));
            }
            by_name.insert(slot.element_name().to_string(), slots.len());
            slots.push(Arc::new(slot));
        }
        Ok(Self { info: descriptor.info(), slots, by_name })
    }

    pub fn info(&self) -> TypeInfo { self.info }
    pub fn name(&self) -> &'static str { self.info.name() }

    pub fn slot(&self, element_name: &str) -> Option<&Arc<SlotDefinition>> {
        self.by_name.get(element_name).map(|&i| &self.slots[i])
    }

    pub fn slots(&self) -> &[Arc<SlotDefinition>] { &self.slots }
    pub fn len(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
}

// ============================================================================
// ModelRegistry
// ============================================================================

/// Registration-time cache of element definitions, keyed by `TypeId`.
pub struct ModelRegistry {
    naming: NamingConvention,
    definitions: RwLock<HashMap<TypeId, Arc<ElementDefinition>>>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::with_naming(NamingConvention::default())
    }

    pub fn with_naming(naming: NamingConvention) -> Self {
        Self { naming, definitions: RwLock::new(HashMap::new()) }
    }

    pub fn naming(&self) -> &NamingConvention { &self.naming }

    /// Resolve and cache `T`'s slots. A type that is already registered is
    /// returned as-is without resolving again. On failure nothing is cached.
    ///
    /// No lock is held while `T::descriptor()` and `T::slots()` run, so a
    /// model may register its child types from there.
    pub fn register<T: Model>(&self) -> Result<Arc<ElementDefinition>> {
        let id = TypeId::of::<T>();
        if let Some(existing) = self.definitions.read().get(&id) {
            return Ok(Arc::clone(existing));
        }

        let resolved = ElementDefinition::resolve(&T::descriptor(), &T::slots(), &self.naming)?;

        let mut defs = self.definitions.write();
        // First insert wins when two threads resolved T at the same time.
        if let Some(existing) = defs.get(&id) {
            return Ok(Arc::clone(existing));
        }
        let definition = Arc::new(resolved);
        tracing::debug!(
            model = definition.name(),
            slots = definition.len(),
            "registered model definition"
        );
        defs.insert(id, Arc::clone(&definition));
        Ok(definition)
    }

    pub fn definition<T: Model>(&self) -> Option<Arc<ElementDefinition>> {
        self.definitions.read().get(&TypeId::of::<T>()).cloned()
    }

    /// Definition for the runtime type of `target`, if registered.
    pub fn definition_of(&self, target: &dyn Any) -> Option<Arc<ElementDefinition>> {
        self.definitions.read().get(&target.type_id()).cloned()
    }

    pub fn len(&self) -> usize { self.definitions.read().len() }
    pub fn is_empty(&self) -> bool { self.definitions.read().is_empty() }
}
