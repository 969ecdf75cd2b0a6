use roster_core::{DomainError, DomainResult, ValueObject};

/// A person's name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    pub const MANDATORY: &'static str = "name is mandatory.";

    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            tracing::debug!(field = "name", reason = Self::MANDATORY, "rejected person name");
            return Err(DomainError::invalid_argument(Self::MANDATORY));
        }
        Ok(Self(name))
    }

    /// Like [`PersonName::new`], but treats an absent name as invalid.
    pub fn from_option(name: Option<&str>) -> DomainResult<Self> {
        match name {
            Some(name) => Self::new(name),
            None => {
                tracing::debug!(field = "name", reason = Self::MANDATORY, "rejected absent person name");
                Err(DomainError::invalid_argument(Self::MANDATORY))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for PersonName {}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PersonName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
