//! Reflective extraction and descriptor queries
//!
//! The map-building operations enumerate the `Public` properties of a
//! value in declaration order and emit them into a fresh [`PropertyMap`].
//! They never fail: names that match nothing (in an exclude or include
//! set) are silently ignored, since absence of a match in a bulk query is
//! a valid outcome.
//!
//! The descriptor-level queries (`properties_where`, `properties_of_type`,
//! `property_by_name`) see *both* visibilities, while the `to_map*`
//! family and the name/value lookups are public-only. Only the direct
//! lookups (`property_value`, `property_by_name`,
//! `public_property_by_name`) return errors.

use rustc_hash::FxHashSet;

use crate::descriptor::{Property, Reflect};
use crate::error::{ReflectError, ReflectResult};
use crate::keys;
use crate::map::PropertyMap;
use crate::value::Value;

// Shared walk: declaration order, public-only, filter on the original
// name, rename only the emitted key.
fn collect<T, K, R>(value: &T, keep: K, rename: R, drop_null: bool) -> PropertyMap
where
    T: Reflect,
    K: Fn(&Property<T>) -> bool,
    R: Fn(&str) -> String,
{
    let mut map = PropertyMap::new();
    for prop in T::properties() {
        if !prop.is_public() || !keep(prop) {
            continue;
        }
        let read = prop.value_of(value);
        if drop_null && read.is_null() {
            continue;
        }
        map.insert(rename(prop.name()), read);
    }
    map
}

fn name_set<'a>(names: &[&'a str]) -> FxHashSet<&'a str> {
    names.iter().copied().collect()
}

/// Extract all public properties of `value` into a map, in declaration
/// order.
pub fn to_map<T: Reflect>(value: &T) -> PropertyMap {
    to_map_excluding(value, &[])
}

/// As [`to_map`], dropping properties whose name is in `exclude`.
///
/// Exclusion operates on original property names; names that match no
/// property are ignored.
pub fn to_map_excluding<T: Reflect>(value: &T, exclude: &[&str]) -> PropertyMap {
    let excluded = name_set(exclude);
    collect(
        value,
        |p| !excluded.contains(p.name()),
        str::to_string,
        false,
    )
}

/// As [`to_map_excluding`], with the exclusion set given as descriptor
/// references instead of raw names.
///
/// Descriptors are resolved to their names before filtering, so the
/// exclusion survives renames that go through the descriptor table.
pub fn to_map_excluding_properties<T: Reflect>(
    value: &T,
    exclude: &[&Property<T>],
) -> PropertyMap {
    let names: Vec<&str> = exclude.iter().map(|p| p.name()).collect();
    to_map_excluding(value, &names)
}

/// As [`to_map_excluding`], additionally omitting entries whose read
/// value is [`Value::Null`].
///
/// Absent values are skipped, never an error.
pub fn to_map_not_null<T: Reflect>(value: &T, exclude: &[&str]) -> PropertyMap {
    let excluded = name_set(exclude);
    collect(
        value,
        |p| !excluded.contains(p.name()),
        str::to_string,
        true,
    )
}

/// Extract only the public properties whose name is in `include`, in
/// declaration order.
///
/// Included names that do not exist on the type, or that name a
/// non-public property, are silently absent from the result.
pub fn to_map_including<T: Reflect>(value: &T, include: &[&str]) -> PropertyMap {
    let included = name_set(include);
    collect(
        value,
        |p| included.contains(p.name()),
        str::to_string,
        false,
    )
}

/// As [`to_map_excluding`], emitting each key as `transform(name)`.
///
/// Exclusion is evaluated against the original name, before the
/// transform runs.
pub fn to_map_with_keys<T, R>(value: &T, transform: R, exclude: &[&str]) -> PropertyMap
where
    T: Reflect,
    R: Fn(&str) -> String,
{
    let excluded = name_set(exclude);
    collect(value, |p| !excluded.contains(p.name()), transform, false)
}

/// [`to_map_with_keys`] specialized to the snake-case transform.
pub fn to_map_snake_case<T: Reflect>(value: &T, exclude: &[&str]) -> PropertyMap {
    to_map_with_keys(value, keys::snake_case, exclude)
}

/// Read the current value of the named property.
///
/// Fails with [`ReflectError::PropertyNotFound`] when no property with
/// that name exists, and [`ReflectError::PropertyNotAccessible`] when it
/// exists but is non-public.
pub fn property_value<T: Reflect>(value: &T, name: &str) -> ReflectResult<Value> {
    let prop = property_by_name::<T>(name)?;
    if !prop.is_public() {
        return Err(ReflectError::PropertyNotAccessible {
            type_name: T::type_name(),
            name: name.to_string(),
        });
    }
    Ok(prop.value_of(value))
}

/// Check whether a public property with the given name exists.
///
/// Non-public properties answer `false`. Never fails.
pub fn has_property<T: Reflect>(name: &str) -> bool {
    T::properties()
        .iter()
        .any(|p| p.is_public() && p.name() == name)
}

/// Names of all public properties, in declaration order.
///
/// Names are unique within a type, so the sequence is also a set.
pub fn property_names<T: Reflect>() -> Vec<&'static str> {
    T::properties()
        .iter()
        .filter(|p| p.is_public())
        .map(|p| p.name())
        .collect()
}

/// Look up a property descriptor by exact name, either visibility.
pub fn property_by_name<T: Reflect>(name: &str) -> ReflectResult<&'static Property<T>> {
    T::properties()
        .iter()
        .find(|p| p.name() == name)
        .ok_or_else(|| ReflectError::PropertyNotFound {
            type_name: T::type_name(),
            name: name.to_string(),
        })
}

/// Look up a property descriptor by exact name among public properties
/// only.
///
/// A name that resolves to a non-public property fails with
/// [`ReflectError::PropertyNotFound`], as if it did not exist.
pub fn public_property_by_name<T: Reflect>(name: &str) -> ReflectResult<&'static Property<T>> {
    T::properties()
        .iter()
        .find(|p| p.is_public() && p.name() == name)
        .ok_or_else(|| ReflectError::PropertyNotFound {
            type_name: T::type_name(),
            name: name.to_string(),
        })
}

/// All property descriptors satisfying `predicate`, in declaration order.
///
/// Unlike the map-building operations this does not filter to public
/// properties; non-public descriptors are surfaced too.
pub fn properties_where<T, P>(predicate: P) -> Vec<&'static Property<T>>
where
    T: Reflect,
    P: Fn(&Property<T>) -> bool,
{
    T::properties().iter().filter(|p| predicate(p)).collect()
}

/// All property descriptors whose declared type is exactly `U`, in
/// declaration order.
///
/// Matching is `TypeId` equality (no subtype or coercion matching) and,
/// like [`properties_where`], spans both visibilities.
pub fn properties_of_type<T: Reflect, U: 'static>() -> Vec<&'static Property<T>> {
    properties_where(|p| p.value_type().is::<U>())
}

/// Extension methods mirroring the free functions on any [`Reflect`]
/// value.
pub trait ReflectExt: Reflect {
    /// See [`to_map`]
    fn to_map(&self) -> PropertyMap {
        to_map(self)
    }

    /// See [`to_map_excluding`]
    fn to_map_excluding(&self, exclude: &[&str]) -> PropertyMap {
        to_map_excluding(self, exclude)
    }

    /// See [`to_map_not_null`]
    fn to_map_not_null(&self, exclude: &[&str]) -> PropertyMap {
        to_map_not_null(self, exclude)
    }

    /// See [`to_map_including`]
    fn to_map_including(&self, include: &[&str]) -> PropertyMap {
        to_map_including(self, include)
    }

    /// See [`to_map_with_keys`]
    fn to_map_with_keys<R: Fn(&str) -> String>(&self, transform: R, exclude: &[&str]) -> PropertyMap {
        to_map_with_keys(self, transform, exclude)
    }

    /// See [`to_map_snake_case`]
    fn to_map_snake_case(&self, exclude: &[&str]) -> PropertyMap {
        to_map_snake_case(self, exclude)
    }

    /// See [`property_value`]
    fn property_value(&self, name: &str) -> ReflectResult<Value> {
        property_value(self, name)
    }

    /// See [`has_property`]
    fn has_property(&self, name: &str) -> bool {
        has_property::<Self>(name)
    }

    /// See [`property_names`]
    fn property_names(&self) -> Vec<&'static str> {
        property_names::<Self>()
    }
}

impl<T: Reflect> ReflectExt for T {}
