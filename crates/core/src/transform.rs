//! Transformer (describe-to-string) capability, resolved at compile time
//!
//! Resolution has two tiers:
//! 1. an exact-type override registered for the concrete type
//! 2. otherwise the default registered for the type's root category
//!
//! Each concrete type is bound to exactly one of the two through the
//! `transformer!` macro, so a call site never sees two candidates. A type with
//! no binding (every physics quantity) has no `Transformer` impl and
//! [`describe`] on it does not compile.

use crate::core_types::registry::{IntBased, Opaque, RootCategory, StringBased};
use crate::core_types::text::{TInt1, TInt2, TString1, TString2};

/// Category-level default transformer.
pub trait CategoryTransformer: RootCategory {
    fn transform_default(repr: &Self::Repr) -> String;
}

impl CategoryTransformer for StringBased {
    fn transform_default(repr: &String) -> String {
        format!("string transformer: {repr}")
    }
}

impl CategoryTransformer for IntBased {
    fn transform_default(repr: &i64) -> String {
        format!("int transformer: {repr}")
    }
}

/// Resolved transformer for one concrete type.
pub trait Transformer: Opaque {
    fn transform(&self) -> String;
}

/// Describe a value with its resolved transformer.
#[inline]
pub fn describe<T: Transformer>(value: &T) -> String {
    value.transform()
}

/// Bind a concrete type to its transformer.
///
/// `transformer!(T => default)` inherits the category default;
/// `transformer!(T => |v| expr)` registers an exact-type override.
macro_rules! transformer {
    ($ty:ty => default) => {
        impl crate::transform::Transformer for $ty {
            #[inline]
            fn transform(&self) -> String {
                <<$ty as crate::core_types::registry::Opaque>::Category
                    as crate::transform::CategoryTransformer>::transform_default(
                    crate::core_types::registry::Opaque::repr(self),
                )
            }
        }
    };
    ($ty:ty => |$value:ident| $body:expr) => {
        impl crate::transform::Transformer for $ty {
            #[inline]
            fn transform(&self) -> String {
                let $value = self;
                $body
            }
        }
    };
}

transformer!(TString1 => default);
transformer!(TString2 => |v| format!("tString2 transformer: {}", v.as_str()));
transformer!(TInt1 => default);
transformer!(TInt2 => |v| format!("tInt2 transformer: {}", v.value()));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_default_for_string() {
        assert_eq!(describe(&TString1::new("Hello")), "string transformer: Hello");
    }

    #[test]
    fn test_override_wins_for_exact_type() {
        assert_eq!(describe(&TString2::new("Hello2")), "tString2 transformer: Hello2");
    }

    #[test]
    fn test_int_family() {
        assert_eq!(describe(&TInt1::new(5)), "int transformer: 5");
        assert_eq!(describe(&TInt2::new(-3)), "tInt2 transformer: -3");
    }

    #[test]
    fn test_default_reachable_directly() {
        let s = String::from("raw");
        assert_eq!(StringBased::transform_default(&s), "string transformer: raw");
        assert_eq!(IntBased::transform_default(&0), "int transformer: 0");
    }
}
