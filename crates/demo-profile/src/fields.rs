//! Allow-listed profile fields and their dispatch table
//!
//! Every externally updatable field has exactly one [`FieldSpec`] in
//! [`FIELD_TABLE`]. A spec knows how to convert a raw string into the field's
//! type and where in a [`Profile`] to write it. A name absent from the table
//! cannot be updated.

use crate::error::{ProfileError, ProfileResult};
use crate::model::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields that may be updated by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileField {
    /// Display name
    Name,
    /// Email address
    Email,
    /// Age in years (integer)
    Age,
    /// City
    City,
    /// State or region
    State,
    /// Country
    Country,
    /// Favorite color
    FavoriteColor,
}

impl ProfileField {
    /// All allow-listed fields, in table order
    pub const ALL: [ProfileField; 7] = [
        Self::Name,
        Self::Email,
        Self::Age,
        Self::City,
        Self::State,
        Self::Country,
        Self::FavoriteColor,
    ];

    /// Canonical field name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Age => "Age",
            Self::City => "City",
            Self::State => "State",
            Self::Country => "Country",
            Self::FavoriteColor => "FavoriteColor",
        }
    }

    /// Dispatch table entry for this field
    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        // Table is indexed in `ALL` order
        &FIELD_TABLE[self as usize]
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileField {
    type Err = ProfileError;

    /// Case-insensitive lookup against the allow-list
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldSpec::lookup(s).map(|spec| spec.field)
    }
}

type TextSlot = fn(&mut Profile) -> &mut String;
type IntegerSlot = fn(&mut Profile) -> &mut i32;

#[derive(Clone, Copy)]
enum Slot {
    Text(TextSlot),
    Integer(IntegerSlot),
}

/// Dispatch table entry: one allow-listed field with its typed setter
#[derive(Clone, Copy)]
pub struct FieldSpec {
    field: ProfileField,
    slot: Slot,
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.slot {
            Slot::Text(_) => "text",
            Slot::Integer(_) => "integer",
        };
        f.debug_struct("FieldSpec")
            .field("field", &self.field)
            .field("kind", &kind)
            .finish()
    }
}

fn name_slot(p: &mut Profile) -> &mut String {
    &mut p.name
}

fn email_slot(p: &mut Profile) -> &mut String {
    &mut p.email
}

fn age_slot(p: &mut Profile) -> &mut i32 {
    &mut p.age
}

fn city_slot(p: &mut Profile) -> &mut String {
    &mut p.city
}

fn state_slot(p: &mut Profile) -> &mut String {
    &mut p.state
}

fn country_slot(p: &mut Profile) -> &mut String {
    &mut p.country
}

fn favorite_color_slot(p: &mut Profile) -> &mut String {
    &mut p.favorite_color
}

/// The allow-list. Order matches [`ProfileField::ALL`].
pub static FIELD_TABLE: [FieldSpec; 7] = [
    FieldSpec {
        field: ProfileField::Name,
        slot: Slot::Text(name_slot),
    },
    FieldSpec {
        field: ProfileField::Email,
        slot: Slot::Text(email_slot),
    },
    FieldSpec {
        field: ProfileField::Age,
        slot: Slot::Integer(age_slot),
    },
    FieldSpec {
        field: ProfileField::City,
        slot: Slot::Text(city_slot),
    },
    FieldSpec {
        field: ProfileField::State,
        slot: Slot::Text(state_slot),
    },
    FieldSpec {
        field: ProfileField::Country,
        slot: Slot::Text(country_slot),
    },
    FieldSpec {
        field: ProfileField::FavoriteColor,
        slot: Slot::Text(favorite_color_slot),
    },
];

impl FieldSpec {
    /// Find the entry for `name`, ignoring ASCII case
    ///
    /// # Errors
    /// Returns [`ProfileError::Validation`] if the name is not allow-listed
    pub fn lookup(name: &str) -> ProfileResult<&'static FieldSpec> {
        FIELD_TABLE
            .iter()
            .find(|spec| spec.field.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ProfileError::validation(name))
    }

    /// Field this entry writes
    #[inline]
    #[must_use]
    pub fn field(&self) -> ProfileField {
        self.field
    }

    /// Convert `raw` into a ready-to-apply assignment
    ///
    /// Integer fields tolerate surrounding whitespace; text fields take the
    /// value verbatim.
    ///
    /// # Errors
    /// Returns [`ProfileError::Conversion`] if `raw` does not parse
    pub fn prepare(&self, raw: &str) -> ProfileResult<Assignment> {
        let value = match self.slot {
            Slot::Text(slot) => Value::Text(slot, raw.to_string()),
            Slot::Integer(slot) => {
                let parsed = raw
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| ProfileError::conversion(self.field, raw, e))?;
                Value::Integer(slot, parsed)
            }
        };
        Ok(Assignment {
            field: self.field,
            value,
        })
    }
}

#[derive(Clone)]
enum Value {
    Text(TextSlot, String),
    Integer(IntegerSlot, i32),
}

/// A converted value bound to its destination field
///
/// Produced by [`FieldSpec::prepare`]; applying it cannot fail.
#[derive(Clone)]
pub struct Assignment {
    field: ProfileField,
    value: Value,
}

impl Assignment {
    /// Target field
    #[inline]
    #[must_use]
    pub fn field(&self) -> ProfileField {
        self.field
    }

    /// Write the value into `profile`
    pub(crate) fn apply(self, profile: &mut Profile) {
        match self.value {
            Value::Text(slot, v) => *slot(profile) = v,
            Value::Integer(slot, v) => *slot(profile) = v,
        }
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Assignment");
        s.field("field", &self.field);
        match &self.value {
            Value::Text(_, v) => s.field("value", v),
            Value::Integer(_, v) => s.field("value", v),
        };
        s.finish()
    }
}
