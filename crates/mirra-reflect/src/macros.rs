//! The `reflectable!` registration macro
//!
//! Generates a [`Reflect`] impl for an existing struct from a re-listing
//! of its fields. Fields marked `pub` in the invocation become `Public`
//! properties, unmarked fields become `NonPublic`. The markers declare the
//! *reflective* contract; they normally mirror the Rust field visibility
//! but are free to diverge (e.g. a crate-public field kept out of maps).
//!
//! The generated table lives behind a lazy static: built once on first
//! use, read-only afterwards, safe for concurrent readers. Getters are
//! non-capturing closures over the real fields, so a renamed or retyped
//! field fails at compile time rather than at extraction time.
//!
//! Field types must be `Clone` and implement [`IntoValue`].
//!
//! ```ignore
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
//! ```
//!
//! [`Reflect`]: crate::Reflect
//! [`IntoValue`]: crate::IntoValue

/// Implement [`Reflect`](crate::Reflect) for a struct.
///
/// See the [module docs](self) for the invocation shape.
#[macro_export]
macro_rules! reflectable {
    ($ty:ident { $($fields:tt)* }) => {
        impl $crate::Reflect for $ty {
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            fn properties() -> &'static [$crate::Property<Self>] {
                static PROPERTIES: $crate::__private::Lazy<
                    Vec<$crate::Property<$ty>>,
                > = $crate::__private::Lazy::new(|| {
                    let mut table = Vec::new();
                    $crate::reflectable!(@fields $ty, table, $($fields)*);
                    table
                });
                &PROPERTIES
            }
        }
    };

    // Field munchers: `pub` marks a Public property, bare marks NonPublic.
    (@fields $ty:ident, $table:ident,) => {};
    (@fields $ty:ident, $table:ident, pub $name:ident : $fty:ty) => {
        $crate::reflectable!(@push $ty, $table, Public, $name, $fty);
    };
    (@fields $ty:ident, $table:ident, pub $name:ident : $fty:ty, $($rest:tt)*) => {
        $crate::reflectable!(@push $ty, $table, Public, $name, $fty);
        $crate::reflectable!(@fields $ty, $table, $($rest)*);
    };
    (@fields $ty:ident, $table:ident, $name:ident : $fty:ty) => {
        $crate::reflectable!(@push $ty, $table, NonPublic, $name, $fty);
    };
    (@fields $ty:ident, $table:ident, $name:ident : $fty:ty, $($rest:tt)*) => {
        $crate::reflectable!(@push $ty, $table, NonPublic, $name, $fty);
        $crate::reflectable!(@fields $ty, $table, $($rest)*);
    };

    (@push $ty:ident, $table:ident, $vis:ident, $name:ident, $fty:ty) => {
        $table.push($crate::Property::new(
            stringify!($name),
            $crate::Visibility::$vis,
            $crate::TypeToken::of::<$fty>(),
            |value: &$ty| {
                $crate::IntoValue::into_value(::core::clone::Clone::clone(&value.$name))
            },
        ));
    };
}
