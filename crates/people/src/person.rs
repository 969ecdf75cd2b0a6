use roster_core::{DomainResult, ValueObject};

use crate::name::PersonName;
use crate::year_of_birth::YearOfBirth;

/// Value object: a person identified entirely by name and year of birth.
///
/// Both fields are validated at construction and never change afterwards.
/// Equality and hashing are derived from the two fields, so equal people
/// always hash equally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: PersonName,
    year_of_birth: YearOfBirth,
}

impl Person {
    /// Build a person, validating the name first and then the year.
    pub fn new(name: impl Into<String>, year_of_birth: i16) -> DomainResult<Self> {
        let name = PersonName::new(name)?;
        let year_of_birth = YearOfBirth::new(year_of_birth)?;
        Ok(Self::from_parts(name, year_of_birth))
    }

    /// Build a person from input where the name may be missing.
    pub fn from_option(name: Option<&str>, year_of_birth: i16) -> DomainResult<Self> {
        let name = PersonName::from_option(name)?;
        let year_of_birth = YearOfBirth::new(year_of_birth)?;
        Ok(Self::from_parts(name, year_of_birth))
    }

    pub fn from_parts(name: PersonName, year_of_birth: YearOfBirth) -> Self {
        Self { name, year_of_birth }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn year_of_birth(&self) -> i16 {
        self.year_of_birth.value()
    }

    pub fn person_name(&self) -> &PersonName {
        &self.name
    }

    pub fn birth_year(&self) -> YearOfBirth {
        self.year_of_birth
    }

    pub fn into_parts(self) -> (PersonName, YearOfBirth) {
        (self.name, self.year_of_birth)
    }

    /// Stable 32-bit hash: `31 * h(name) + year_of_birth`.
    ///
    /// `h` is the base-31 polynomial over the name's UTF-16 code units. All
    /// arithmetic wraps. Unlike `Hash`, the result does not depend on the
    /// hasher, so it can be compared across processes.
    pub fn content_hash(&self) -> i32 {
        31i32
            .wrapping_mul(polynomial_hash(self.name.as_str()))
            .wrapping_add(i32::from(self.year_of_birth.value()))
    }
}

impl ValueObject for Person {}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.year_of_birth)
    }
}

fn polynomial_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
