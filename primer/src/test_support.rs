//! Test-only fixture builders.

use crate::core::employee::{Address, Contact, Employee, Identity};
use crate::core::record_store::RecordStore;

/// Store seeded with four student grades.
pub fn grades_store() -> RecordStore {
    [("Hemel", 100), ("Hasnine", 90), ("Mamud", 20), ("Sifat", 180)]
        .into_iter()
        .collect()
}

pub fn sample_identity() -> Identity {
    Identity {
        first_name: "Hasnine".to_string(),
        last_name: "Mamud".to_string(),
        age: 24,
    }
}

pub fn sample_contact() -> Contact {
    Contact {
        email: "hasnine@gmail.com".to_string(),
        phone: "0199882928839".to_string(),
    }
}

pub fn sample_address() -> Address {
    Address {
        house_number: 12,
        area: "Bhola".to_string(),
        state: "Barisal".to_string(),
    }
}

/// Employee composed from the three sample sub-records.
pub fn sample_employee() -> Employee {
    Employee::new(sample_identity(), sample_contact(), sample_address())
}
