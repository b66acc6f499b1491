//! Property descriptors
//!
//! A [`Property`] describes one named, typed member of a structured type:
//! its name, its accessibility, the declared value type, and a getter that
//! reads the current value from an instance. The full descriptor table for
//! a type is discovered once (at first use) and is a fixed read-only view
//! for the lifetime of the process; see the [`reflectable!`] macro.
//!
//! [`reflectable!`]: crate::reflectable

use std::any::TypeId;
use std::fmt;

use crate::value::Value;

/// Accessibility of a property.
///
/// Only `Public` properties participate in map extraction; `NonPublic`
/// properties stay visible to the descriptor-level queries
/// (`properties_where`, `properties_of_type`, `property_by_name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Part of the type's externally visible contract
    Public,
    /// Internal; excluded from map extraction
    NonPublic,
}

impl Visibility {
    /// Check for `Public`
    pub const fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Identity of a declared property type.
///
/// Equality is exact `TypeId` equality; no subtype or coercion matching.
/// The captured name is the compiler's type path and is for diagnostics
/// only; comparisons never use it.
#[derive(Debug, Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Create the token for a concrete type
    pub fn of<U: 'static>() -> Self {
        Self {
            id: TypeId::of::<U>(),
            name: std::any::type_name::<U>(),
        }
    }

    /// The underlying `TypeId`
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Diagnostic name of the type
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether the token denotes exactly `U`
    pub fn is<U: 'static>(&self) -> bool {
        self.id == TypeId::of::<U>()
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

/// Descriptor for one named property of a structured type `T`.
///
/// Descriptors are immutable and discovered, not constructed by callers:
/// the table for a type is built once and handed out as `&'static` slices.
/// The owning type is the `T` parameter, a read-only backward reference.
pub struct Property<T> {
    name: &'static str,
    visibility: Visibility,
    value_type: TypeToken,
    getter: fn(&T) -> Value,
}

impl<T> Property<T> {
    /// Create a descriptor
    pub const fn new(
        name: &'static str,
        visibility: Visibility,
        value_type: TypeToken,
        getter: fn(&T) -> Value,
    ) -> Self {
        Self {
            name,
            visibility,
            value_type,
            getter,
        }
    }

    /// Property name, unique within the owning type
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Property accessibility
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Check for `Public` accessibility
    pub const fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Declared type of the property value
    pub const fn value_type(&self) -> &TypeToken {
        &self.value_type
    }

    /// Read the current value from an instance
    pub fn value_of(&self, instance: &T) -> Value {
        (self.getter)(instance)
    }
}

// Manual impl: the getter is opaque and `T` itself need not be Debug.
impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("value_type", &self.value_type)
            .finish()
    }
}

/// Capability trait for structured types that opt into reflection.
///
/// Implementations are normally generated by the [`reflectable!`] macro,
/// which builds the descriptor table once behind a lazy static. A manual
/// impl is the escape hatch for types whose shape the macro cannot
/// express; it must return descriptors in declaration order with names
/// unique within the type.
///
/// [`reflectable!`]: crate::reflectable
pub trait Reflect: Sized + 'static {
    /// Name of the type as declared
    fn type_name() -> &'static str;

    /// All property descriptors, both visibilities, in declaration order
    fn properties() -> &'static [Property<Self>];
}
