//! Mirra reflective property mapping
//!
//! This crate turns record-like values into ordered name→value maps under
//! a selection policy: exclude-lists, include-lists, or key transforms.
//! Extraction is one-level and non-recursive: it reads the accessible
//! named properties of a value, nothing deeper. It is not a serialization
//! framework.
//!
//! Types opt in with the [`reflectable!`] macro, which generates a static
//! descriptor table (built once, read-only, safe for concurrent readers):
//!
//! ```rust,ignore
//! use mirra_reflect::{reflectable, ReflectExt};
//!
//! struct Account {
//!     id: i64,
//!     name: String,
//!     secret: String,
//! }
//!
//! reflectable! {
//!     Account {
//!         pub id: i64,
//!         pub name: String,
//!         secret: String,
//!     }
//! }
//!
//! let account = Account { id: 1, name: "ann".into(), secret: "x".into() };
//! let map = account.to_map();
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec!["id", "name"]);
//! assert!(account.property_value("secret").is_err());
//! ```
//!
//! Only `pub`-marked properties participate in map extraction; the
//! descriptor-level queries in [`reflector`] also see non-public ones.
//! Direct lookups fail with [`ReflectError`]; bulk extraction never does.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod descriptor;
pub mod error;
pub mod keys;
mod macros;
pub mod map;
pub mod reflector;
pub mod value;

pub use descriptor::{Property, Reflect, TypeToken, Visibility};
pub use error::{ReflectError, ReflectResult};
pub use map::PropertyMap;
pub use reflector::ReflectExt;
pub use value::{IntoValue, Value};

// Support for macro expansions in downstream crates; not public API.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
