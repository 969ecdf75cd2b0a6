use roster_core::{DomainError, DomainResult, ValueObject};

/// Year of birth, strictly between [`YearOfBirth::EXCLUSIVE_MIN`] and
/// [`YearOfBirth::EXCLUSIVE_MAX`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct YearOfBirth(i16);

impl YearOfBirth {
    pub const EXCLUSIVE_MIN: i16 = 1900;
    pub const EXCLUSIVE_MAX: i16 = 2019;
    pub const OUT_OF_RANGE: &'static str = "year of birth is out of range.";

    pub fn new(year: i16) -> DomainResult<Self> {
        if year <= Self::EXCLUSIVE_MIN || year >= Self::EXCLUSIVE_MAX {
            tracing::debug!(
                field = "year_of_birth",
                year,
                reason = Self::OUT_OF_RANGE,
                "rejected year of birth"
            );
            return Err(DomainError::invalid_argument(Self::OUT_OF_RANGE));
        }
        Ok(Self(year))
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

impl ValueObject for YearOfBirth {}

impl core::fmt::Display for YearOfBirth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i16> for YearOfBirth {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<YearOfBirth> for i16 {
    fn from(value: YearOfBirth) -> Self {
        value.0
    }
}
