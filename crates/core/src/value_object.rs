//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// The trait requires:
/// - **Clone**: values are copied, not shared by reference
/// - **Eq + Hash**: equal values must hash equally, so value objects can be
///   used as map keys and set members
/// - **Debug**: helpful for logging and tests
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Nickname(String);
///
/// impl ValueObject for Nickname {}
///
/// assert_eq!(Nickname("ada".into()), Nickname("ada".into()));
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
