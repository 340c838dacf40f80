//! Naming convention mapping an element name to its read/write members.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How element names map to member names on a declaring type.
///
/// The element name is converted from lowerCamelCase to snake_case and
/// prefixed. The default is the usual Rust accessor pair: `birthDate` reads
/// through `birth_date` and writes through `set_birth_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConvention {
    pub read_prefix: String,
    pub write_prefix: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self { read_prefix: String::new(), write_prefix: "set_".into() }
    }
}

impl NamingConvention {
    /// `get_` / `set_` prefixed members.
    pub fn bean() -> Self {
        Self { read_prefix: "get_".into(), write_prefix: "set_".into() }
    }

    pub fn read_member(&self, element_name: &str) -> String {
        format!("{}{}", self.read_prefix, to_snake_case(element_name))
    }

    pub fn write_member(&self, element_name: &str) -> String {
        format!("{}{}", self.write_prefix, to_snake_case(element_name))
    }

    /// The write prefix must not be blank.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.write_prefix.trim().is_empty() {
            return Err(Error::Configuration(
                "naming convention write prefix must not be blank".into(),
            ));
        }
        Ok(())
    }
}

/// `birthDate` → `birth_date`, `valueURI` → `value_uri`, `HTMLBody` → `html_body`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
