//! Declared slot type: a single value or an ordered sequence of values.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::ValueType;

/// The declared type of a child slot, as found on the declaring type.
///
/// `List` is the ordered-sequence container. It is the only shape that
/// selects the collection binding; everything else binds as a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", content = "of", rename_all = "camelCase")]
pub enum SlotType {
    Scalar(ValueType),
    List(ValueType),
}

impl SlotType {
    pub fn scalar(ty: ValueType) -> Self { SlotType::Scalar(ty) }
    pub fn list(ty: ValueType) -> Self { SlotType::List(ty) }

    pub fn is_list(&self) -> bool { matches!(self, SlotType::List(_)) }

    /// Type of the individual values held by the slot.
    pub fn value_type(&self) -> ValueType {
        match self {
            SlotType::Scalar(ty) | SlotType::List(ty) => *ty,
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotType::Scalar(ty) => write!(f, "{ty}"),
            SlotType::List(ty) => write!(f, "list<{ty}>"),
        }
    }
}
