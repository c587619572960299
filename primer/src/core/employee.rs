//! Nested record composition: an employee built from independent sub-records.
//!
//! Records are plain data. No validation is applied; empty strings and
//! out-of-range ages are accepted as-is and left to callers to police.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Personal identity details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub house_number: i64,
    pub area: String,
    pub state: String,
}

/// Aggregate of identity, contact and address.
///
/// `Employee::default()` is the zero-valued record; fields can then be filled
/// one at a time or replaced as whole sub-records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub identity: Identity,
    pub contact: Contact,
    pub address: Address,
}

impl Employee {
    pub fn new(identity: Identity, contact: Contact, address: Address) -> Self {
        Self {
            identity,
            contact,
            address,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.first_name, self.last_name, self.age)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.email, self.phone)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.house_number, self.area, self.state)
    }
}

impl fmt::Display for Employee {
    /// Nested-brace rendering, e.g. `{{Ada Lovelace 36} {a@b.c 123} {1 X Y}}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.identity, self.contact, self.address)
    }
}
