//! People domain module.
//!
//! Immutable, validated value objects describing a person. Pure domain logic
//! only (no IO, no storage).

pub mod name;
pub mod person;
pub mod year_of_birth;

pub use name::PersonName;
pub use person::Person;
pub use year_of_birth::YearOfBirth;
