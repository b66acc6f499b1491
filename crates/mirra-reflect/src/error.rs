//! Reflection errors

use thiserror::Error;

/// Errors raised by direct property lookups.
///
/// Only the single-property operations (`property_value`,
/// `property_by_name`, `public_property_by_name`) produce these. Bulk
/// extraction (`to_map*`, `properties_where`, `properties_of_type`) never
/// fails; a miss in a bulk query silently filters to an empty result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReflectError {
    /// No property with the given name exists on the type
    #[error("type `{type_name}` has no property named `{name}`")]
    PropertyNotFound {
        /// Name of the owning type
        type_name: &'static str,
        /// Property name that failed to resolve
        name: String,
    },

    /// The property exists but is not part of the type's public contract
    #[error("property `{name}` of type `{type_name}` is not public")]
    PropertyNotAccessible {
        /// Name of the owning type
        type_name: &'static str,
        /// Name of the non-public property
        name: String,
    },
}

/// Result alias for reflection lookups
pub type ReflectResult<T> = Result<T, ReflectError>;
