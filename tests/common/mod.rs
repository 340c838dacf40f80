//! Shared model fixtures for the integration tests.

#![allow(dead_code)]

use element_binding::{Model, SlotDecl, TypeDescriptor, Value, ValueType, UNBOUNDED};

// ============================================================================
// Patient — scalar and list slots with conventional members
// ============================================================================

#[derive(Debug, Default)]
pub struct Patient {
    pub name: Option<Value>,
    pub birth_date: Option<Value>,
    pub extension: Option<Value>,
    pub tag: Option<Vec<Value>>,
    /// Number of times `set_tag` installed a list.
    pub tag_installs: usize,
}

impl Patient {
    pub fn name(&self) -> Option<&Value> { self.name.as_ref() }
    pub fn set_name(&mut self, v: Option<Value>) { self.name = v; }

    pub fn birth_date(&self) -> Option<&Value> { self.birth_date.as_ref() }
    pub fn set_birth_date(&mut self, v: Option<Value>) { self.birth_date = v; }

    pub fn extension(&self) -> Option<&Value> { self.extension.as_ref() }
    pub fn set_extension(&mut self, v: Option<Value>) { self.extension = v; }

    pub fn tag(&self) -> Option<&[Value]> { self.tag.as_deref() }
    pub fn tag_mut(&mut self) -> Option<&mut Vec<Value>> { self.tag.as_mut() }
    pub fn set_tag(&mut self, v: Vec<Value>) {
        self.tag_installs += 1;
        self.tag = Some(v);
    }
}

impl Model for Patient {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Patient>()
            .scalar_getter("name", ValueType::String, Patient::name)
            .scalar_setter("set_name", ValueType::String, Patient::set_name)
            .scalar_getter("birth_date", ValueType::Date, Patient::birth_date)
            .scalar_setter("set_birth_date", ValueType::Date, Patient::set_birth_date)
            .scalar_getter("extension", ValueType::Any, Patient::extension)
            .scalar_setter("set_extension", ValueType::Any, Patient::set_extension)
            .list_getter("tag", ValueType::String, Patient::tag, Patient::tag_mut)
            .list_setter("set_tag", ValueType::String, Patient::set_tag)
            .build()
    }

    fn slots() -> Vec<SlotDecl> {
        vec![
            SlotDecl::scalar("name", ValueType::String),
            SlotDecl::scalar("birthDate", ValueType::Date),
            SlotDecl::scalar("extension", ValueType::Any),
            SlotDecl::list("tag", ValueType::String),
        ]
    }
}

// ============================================================================
// Observation — an unrelated type, used as a wrong target
// ============================================================================

#[derive(Debug, Default)]
pub struct Observation {
    pub status: Option<Value>,
}

impl Observation {
    pub fn status(&self) -> Option<&Value> { self.status.as_ref() }
    pub fn set_status(&mut self, v: Option<Value>) { self.status = v; }
}

impl Model for Observation {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Observation>()
            .scalar_getter("status", ValueType::String, Observation::status)
            .scalar_setter("set_status", ValueType::String, Observation::set_status)
            .build()
    }

    fn slots() -> Vec<SlotDecl> {
        vec![SlotDecl::new("status", 1, 1, element_binding::SlotType::scalar(ValueType::String))]
    }
}

// ============================================================================
// Sloppy — list setter that drops the list it is given
// ============================================================================

#[derive(Debug, Default)]
pub struct Sloppy {
    pub item: Option<Vec<Value>>,
}

impl Sloppy {
    pub fn item(&self) -> Option<&[Value]> { self.item.as_deref() }
    pub fn item_mut(&mut self) -> Option<&mut Vec<Value>> { self.item.as_mut() }
    pub fn set_item(&mut self, _v: Vec<Value>) {}
}

impl Model for Sloppy {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Sloppy>()
            .list_getter("item", ValueType::Any, Sloppy::item, Sloppy::item_mut)
            .list_setter("set_item", ValueType::Any, Sloppy::set_item)
            .build()
    }

    fn slots() -> Vec<SlotDecl> {
        vec![SlotDecl::list("item", ValueType::Any)]
    }
}

// ============================================================================
// Incomplete — declares a slot it has no setter for
// ============================================================================

#[derive(Debug, Default)]
pub struct Incomplete {
    pub code: Option<Value>,
}

impl Incomplete {
    pub fn code(&self) -> Option<&Value> { self.code.as_ref() }
}

impl Model for Incomplete {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Incomplete>()
            .scalar_getter("code", ValueType::String, Incomplete::code)
            .build()
    }

    fn slots() -> Vec<SlotDecl> {
        vec![SlotDecl::scalar("code", ValueType::String)]
    }
}

// ============================================================================
// Duplicated — declares the same element twice
// ============================================================================

#[derive(Debug, Default)]
pub struct Duplicated {
    pub note: Option<Vec<Value>>,
}

impl Duplicated {
    pub fn note(&self) -> Option<&[Value]> { self.note.as_deref() }
    pub fn note_mut(&mut self) -> Option<&mut Vec<Value>> { self.note.as_mut() }
    pub fn set_note(&mut self, v: Vec<Value>) { self.note = Some(v); }
}

impl Model for Duplicated {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Duplicated>()
            .list_getter("note", ValueType::String, Duplicated::note, Duplicated::note_mut)
            .list_setter("set_note", ValueType::String, Duplicated::set_note)
            .build()
    }

    fn slots() -> Vec<SlotDecl> {
        vec![
            SlotDecl::list("note", ValueType::String),
            SlotDecl::list("note", ValueType::String).with_cardinality(1, UNBOUNDED),
        ]
    }
}

// ============================================================================
// BeanPatient — `get_` / `set_` members
// ============================================================================

#[derive(Debug, Default)]
pub struct BeanPatient {
    pub gender: Option<Value>,
}

impl BeanPatient {
    pub fn get_gender(&self) -> Option<&Value> { self.gender.as_ref() }
    pub fn set_gender(&mut self, v: Option<Value>) { self.gender = v; }
}

impl Model for BeanPatient {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<BeanPatient>()
            .scalar_getter("get_gender", ValueType::String, BeanPatient::get_gender)
            .scalar_setter("set_gender", ValueType::String, BeanPatient::set_gender)
            .build()
    }

    fn slots() -> Vec<SlotDecl> {
        vec![SlotDecl::scalar("gender", ValueType::String)]
    }
}

/// Resolve one of `T`'s declared slots by element name.
pub fn slot_of<T: Model>(element_name: &str) -> element_binding::SlotDefinition {
    let decl = T::slots()
        .into_iter()
        .find(|d| d.element_name == element_name)
        .unwrap_or_else(|| panic!("no slot `{element_name}` declared"));
    element_binding::SlotDefinition::resolve(&T::descriptor(), &decl).unwrap()
}

// ============================================================================
// Aliased — two spellings of the same element
// ============================================================================

#[derive(Debug, Default)]
pub struct Aliased {
    pub birth_date: Option<Value>,
}

impl Aliased {
    pub fn birth_date(&self) -> Option<&Value> { self.birth_date.as_ref() }
    pub fn set_birth_date(&mut self, v: Option<Value>) { self.birth_date = v; }
}

impl Model for Aliased {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Aliased>()
            .scalar_getter("birth_date", ValueType::Date, Aliased::birth_date)
            .scalar_setter("set_birth_date", ValueType::Date, Aliased::set_birth_date)
            .build()
    }

    fn slots() -> Vec<SlotDecl> {
        vec![
            SlotDecl::scalar("birthDate", ValueType::Date),
            SlotDecl::scalar("birth_date", ValueType::Date),
        ]
    }
}

// ============================================================================
// Padded — element name declared with surrounding whitespace
// ============================================================================

#[derive(Debug, Default)]
pub struct Padded {
    pub code: Option<Value>,
}

impl Padded {
    pub fn code(&self) -> Option<&Value> { self.code.as_ref() }
    pub fn set_code(&mut self, v: Option<Value>) { self.code = v; }
}

impl Model for Padded {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Padded>()
            .scalar_getter("code", ValueType::String, Padded::code)
            .scalar_setter("set_code", ValueType::String, Padded::set_code)
            .build()
    }

    fn slots() -> Vec<SlotDecl> {
        vec![SlotDecl::scalar(" code ", ValueType::String)]
    }
}
