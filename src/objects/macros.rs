//! Macros for reducing boilerplate when defining object types
//!
//! Every object type is a newtype over [`Component`](crate::core::Component).
//! These macros generate the trait implementations shared by all of them.

/// Implement the common traits for a component newtype
///
/// Generates `Deref<Target = Component>`, `build()`, conversions into
/// `Component` and `FieldValue`, `Serialize`, and equality against
/// `serde_json::Value`.
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Confirm(Component);
///
/// impl_component!(Confirm, "confirm");
/// ```
#[macro_export]
macro_rules! impl_component {
    ($type:ident, $kind:expr) => {
        impl $type {
            /// Component kind used in violation reports
            pub const KIND: &'static str = $kind;

            /// Serialize into a plain JSON object
            pub fn build(&self) -> $crate::__private::serde_json::Value {
                self.0.build()
            }

            /// Borrow the underlying component
            pub fn as_component(&self) -> &$crate::core::Component {
                &self.0
            }
        }

        impl ::std::ops::Deref for $type {
            type Target = $crate::core::Component;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::convert::From<$type> for $crate::core::Component {
            fn from(value: $type) -> Self {
                value.0
            }
        }

        impl ::std::convert::From<$type> for $crate::core::FieldValue {
            fn from(value: $type) -> Self {
                $crate::core::FieldValue::from(value.0)
            }
        }

        impl $crate::__private::serde::Serialize for $type {
            fn serialize<S: $crate::__private::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl ::std::cmp::PartialEq<$crate::__private::serde_json::Value> for $type {
            fn eq(&self, other: &$crate::__private::serde_json::Value) -> bool {
                self.0 == *other
            }
        }
    };
}
