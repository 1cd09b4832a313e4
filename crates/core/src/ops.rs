//! Operator dispatch table
//!
//! Typed products are ordinary `std::ops::Mul` impls, one per declared
//! `(Lhs, Rhs)` pair. Coherence rejects a second entry for the same key and a
//! pairing with no entry simply has no `Mul` impl, so both failure modes are
//! compile errors. Entries are asymmetric: declaring `Acceleration * Time` says
//! nothing about `Time * Acceleration`.

use serde::Serialize;
use std::fmt;

/// One row of a product table, by type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProductEntry {
    pub lhs: &'static str,
    pub rhs: &'static str,
    pub output: &'static str,
}

impl fmt::Display for ProductEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {} -> {}", self.lhs, self.rhs, self.output)
    }
}

/// Find the entry for `lhs * rhs` in `table`.
///
/// This is a listing query only; the arithmetic itself never goes through it.
pub fn lookup(table: &[ProductEntry], lhs: &str, rhs: &str) -> Option<ProductEntry> {
    table
        .iter()
        .copied()
        .find(|entry| entry.lhs == lhs && entry.rhs == rhs)
}

/// Declare the closed product table for a set of `DoubleBased` units.
///
/// Each `Lhs * Rhs => Output` row becomes `impl Mul<Rhs> for Lhs` multiplying
/// the unwrapped values and re-wrapping as `Output`. The rows are also listed
/// in a `&[ProductEntry]` constant named by the caller.
macro_rules! product_table {
    (
        $(#[$meta:meta])*
        $vis:vis const $table:ident = {
            $($lhs:ident * $rhs:ident => $out:ident),+ $(,)?
        }
    ) => {
        $(
            impl std::ops::Mul<$rhs> for $lhs {
                type Output = $out;
                #[inline]
                fn mul(self, rhs: $rhs) -> $out {
                    $out::new(self.as_double() * rhs.as_double())
                }
            }
        )+

        $(#[$meta])*
        $vis const $table: &[crate::ops::ProductEntry] = &[
            $(
                crate::ops::ProductEntry {
                    lhs: stringify!($lhs),
                    rhs: stringify!($rhs),
                    output: stringify!($out),
                },
            )+
        ];
    };
}

pub(crate) use product_table;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::physics::PRODUCTS;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_lookup_finds_declared_pair() {
        let entry = lookup(PRODUCTS, "Acceleration", "Time").unwrap();
        assert_eq!(entry.output, "Velocity");
        assert_eq!(entry.to_string(), "Acceleration * Time -> Velocity");
    }

    #[test]
    fn test_lookup_is_asymmetric() {
        assert!(lookup(PRODUCTS, "Time", "Acceleration").is_none());
        assert!(lookup(PRODUCTS, "Velocity", "Velocity").is_none());
    }

    #[test]
    fn test_table_keys_are_unique() {
        let keys: FxHashSet<_> = PRODUCTS.iter().map(|e| (e.lhs, e.rhs)).collect();
        assert_eq!(keys.len(), PRODUCTS.len());
    }
}
