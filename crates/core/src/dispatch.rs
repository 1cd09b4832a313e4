//! Runtime transformer table
//!
//! The same two-tier lookup as [`crate::transform`], performed explicitly at
//! runtime so that values whose concrete type is only known dynamically
//! (e.g. a `Vec<Box<dyn AnyOpaque>>`) can still be described:
//!
//! 1. exact-type override, keyed by the concrete type's `TypeId`
//! 2. category default, keyed by the root category's `TypeId`
//!
//! A miss is reported as [`TransformError::Unregistered`]. That is strictly
//! weaker than the static path, where a missing transformer is a compile error.

use crate::core_types::registry::{IntBased, Opaque, RootCategory, StringBased};
use crate::core_types::text::{TInt2, TString2};
use crate::error::{TransformError, TransformResult};
use crate::transform::{CategoryTransformer, Transformer};
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};
use std::fmt;
use tracing::{debug, warn};

/// Object-safe view of any unit value.
pub trait AnyOpaque: Send + Sync {
    fn unit_type_id(&self) -> TypeId;
    fn category_id(&self) -> TypeId;
    fn type_name(&self) -> &'static str;
    fn category_name(&self) -> &'static str;
    /// The value itself
    fn as_any(&self) -> &dyn Any;
    /// The underlying primitive
    fn repr_any(&self) -> &dyn Any;
}

impl<T: Opaque> AnyOpaque for T {
    fn unit_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn category_id(&self) -> TypeId {
        TypeId::of::<T::Category>()
    }

    fn type_name(&self) -> &'static str {
        T::NAME
    }

    fn category_name(&self) -> &'static str {
        <T::Category as RootCategory>::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn repr_any(&self) -> &dyn Any {
        self.repr()
    }
}

/// Which tier answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Override,
    CategoryDefault,
}

type DescribeFn = Box<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;

struct Entry {
    name: &'static str,
    describe: DescribeFn,
}

/// Two-tier transformer registry.
#[derive(Default)]
pub struct TransformerTable {
    overrides: FxHashMap<TypeId, Entry>,
    defaults: FxHashMap<TypeId, Entry>,
}

impl TransformerTable {
    /// Empty table; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table matching the compile-time registrations in [`crate::transform`]
    pub fn standard() -> Self {
        Self::new()
            .register_default::<StringBased, _>(StringBased::transform_default)
            .register_default::<IntBased, _>(IntBased::transform_default)
            .register_override::<TString2, _>(TString2::transform)
            .register_override::<TInt2, _>(TInt2::transform)
    }

    /// Register (or replace) the default for every member of category `C`.
    pub fn register_default<C, F>(mut self, f: F) -> Self
    where
        C: RootCategory,
        F: Fn(&C::Repr) -> String + Send + Sync + 'static,
    {
        let describe: DescribeFn =
            Box::new(move |repr: &dyn Any| repr.downcast_ref::<C::Repr>().map(&f));
        let replaced = self
            .defaults
            .insert(
                TypeId::of::<C>(),
                Entry {
                    name: C::NAME,
                    describe,
                },
            )
            .is_some();
        debug!(category = C::NAME, replaced, "Registered category default transformer");
        self
    }

    /// Register (or replace) the override for exactly `T`.
    pub fn register_override<T, F>(mut self, f: F) -> Self
    where
        T: Opaque,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let describe: DescribeFn =
            Box::new(move |value: &dyn Any| value.downcast_ref::<T>().map(&f));
        let replaced = self
            .overrides
            .insert(
                TypeId::of::<T>(),
                Entry {
                    name: T::NAME,
                    describe,
                },
            )
            .is_some();
        debug!(unit = T::NAME, replaced, "Registered exact-type transformer override");
        self
    }

    /// Which tier would answer for `value`, if any.
    pub fn resolution(&self, value: &dyn AnyOpaque) -> Option<Resolution> {
        if self.overrides.contains_key(&value.unit_type_id()) {
            Some(Resolution::Override)
        } else if self.defaults.contains_key(&value.category_id()) {
            Some(Resolution::CategoryDefault)
        } else {
            None
        }
    }

    /// Describe a statically typed value.
    ///
    /// # Errors
    ///
    /// [`TransformError::Unregistered`] if neither tier has an entry.
    pub fn describe<T: Opaque>(&self, value: &T) -> TransformResult<String> {
        self.describe_dyn(value)
    }

    /// Describe a value through the two-tier lookup.
    ///
    /// # Errors
    ///
    /// [`TransformError::Unregistered`] if neither tier has an entry.
    pub fn describe_dyn(&self, value: &dyn AnyOpaque) -> TransformResult<String> {
        let type_name = value.type_name();

        let by_override = self.overrides.get(&value.unit_type_id()).and_then(|entry| {
            debug!(unit = type_name, "Resolved exact-type override");
            (entry.describe)(value.as_any())
        });
        if let Some(text) = by_override {
            return Ok(text);
        }

        // An entry whose downcast fails is treated as absent
        let by_default = self.defaults.get(&value.category_id()).and_then(|entry| {
            debug!(unit = type_name, category = entry.name, "Resolved category default");
            (entry.describe)(value.repr_any())
        });
        if let Some(text) = by_default {
            return Ok(text);
        }

        warn!(
            unit = type_name,
            category = value.category_name(),
            "No transformer registered"
        );
        Err(TransformError::Unregistered {
            type_name,
            category: value.category_name(),
        })
    }
}

impl fmt::Debug for TransformerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut overrides: Vec<_> = self.overrides.values().map(|e| e.name).collect();
        let mut defaults: Vec<_> = self.defaults.values().map(|e| e.name).collect();
        overrides.sort_unstable();
        defaults.sort_unstable();
        f.debug_struct("TransformerTable")
            .field("overrides", &overrides)
            .field("defaults", &defaults)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::physics::Velocity;
    use crate::core_types::text::{TInt1, TString1};
    use crate::transform::describe;

    #[test]
    fn test_standard_table_matches_static_dispatch() {
        let table = TransformerTable::standard();
        let s1 = TString1::new("Hello");
        let s2 = TString2::new("Hello2");
        let i1 = TInt1::new(1);
        let i2 = TInt2::new(2);
        assert_eq!(table.describe(&s1).unwrap(), describe(&s1));
        assert_eq!(table.describe(&s2).unwrap(), describe(&s2));
        assert_eq!(table.describe(&i1).unwrap(), describe(&i1));
        assert_eq!(table.describe(&i2).unwrap(), describe(&i2));
    }

    #[test]
    fn test_unregistered_category_is_an_error() {
        let table = TransformerTable::standard();
        let err = table.describe(&Velocity::new(1.0)).unwrap_err();
        assert_eq!(
            err,
            TransformError::Unregistered {
                type_name: "Velocity",
                category: "DoubleBased",
            }
        );
    }

    #[test]
    fn test_override_registered_later_takes_precedence() {
        let table = TransformerTable::new()
            .register_default::<StringBased, _>(|s| format!("default: {s}"));
        assert_eq!(table.resolution(&TString1::new("a")), Some(Resolution::CategoryDefault));

        let table = table.register_override::<TString1, _>(|v| format!("exact: {v}"));
        assert_eq!(table.resolution(&TString1::new("a")), Some(Resolution::Override));
        assert_eq!(table.describe(&TString1::new("a")).unwrap(), "exact: a");
        // Sibling without an override keeps the default
        assert_eq!(table.describe(&TString2::new("b")).unwrap(), "default: b");
    }

    #[test]
    fn test_heterogeneous_values() {
        let table = TransformerTable::standard();
        let values: Vec<Box<dyn AnyOpaque>> = vec![
            Box::new(TString1::new("x")),
            Box::new(TInt2::new(9)),
            Box::new(Velocity::new(3.0)),
        ];
        let out: Vec<_> = values.iter().map(|v| table.describe_dyn(&**v)).collect();
        assert_eq!(out[0].as_deref(), Ok("string transformer: x"));
        assert_eq!(out[1].as_deref(), Ok("tInt2 transformer: 9"));
        assert!(out[2].is_err());
    }

    /// Claims to be a `TString1` but carries an `i64`
    struct Mislabelled(i64);

    impl AnyOpaque for Mislabelled {
        fn unit_type_id(&self) -> TypeId {
            TypeId::of::<TString1>()
        }

        fn category_id(&self) -> TypeId {
            TypeId::of::<StringBased>()
        }

        fn type_name(&self) -> &'static str {
            "Mislabelled"
        }

        fn category_name(&self) -> &'static str {
            StringBased::NAME
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn repr_any(&self) -> &dyn Any {
            &self.0
        }
    }

    #[test]
    fn test_mislabelled_value_is_unregistered() {
        let table = TransformerTable::standard()
            .register_override::<TString1, _>(|v| format!("exact: {v}"));
        let err = table.describe_dyn(&Mislabelled(3)).unwrap_err();
        assert_eq!(
            err,
            TransformError::Unregistered {
                type_name: "Mislabelled",
                category: "StringBased",
            }
        );
    }

    #[test]
    fn test_debug_lists_registrations() {
        let dbg = format!("{:?}", TransformerTable::standard());
        assert!(dbg.contains("TString2"));
        assert!(dbg.contains("StringBased"));
    }
}
