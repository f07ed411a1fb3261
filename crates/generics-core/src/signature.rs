//! Signature maps: argument position → type slot, per template class.
//!
//! Built once per concrete template class from its [`TemplateDescriptor`] and
//! cached process-wide in [`SignatureRegistry`]. The build correlates two
//! independently declared name lists: the canonical slot names on the
//! designated declaration method, and each other public method's parameter
//! names. Positions with no canonical match carry no constraint.
//!
//! # Concurrency
//!
//! The registry is shared mutable state keyed by class name. `get_or_build`
//! holds the cache lock across the build, so "build-if-absent, else read" is
//! atomic per class: two threads can never observe diverging or partially
//! populated maps for the same class.

use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::metadata::{GENERIC_METHOD, TemplateDescriptor};
use crate::GenericError;

/// Per-class table correlating each public method's argument positions to
/// type slots.
///
/// Immutable once built; shared read-only via `Arc` by every proxy wrapping
/// the class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMap {
    class_name: &'static str,
    slot_names: Vec<&'static str>,
    methods: FxHashMap<&'static str, FxHashMap<usize, usize>>,
}

impl SignatureMap {
    /// Build the signature map for a template class.
    ///
    /// The canonical slot names are the declaration method's documented
    /// parameter names, in order. Every other public method is matched
    /// against them by exact parameter name; duplicated canonical names
    /// resolve to the leftmost occurrence.
    pub fn build(descriptor: &TemplateDescriptor) -> Result<Self, GenericError> {
        let slot_names: Vec<&'static str> = descriptor
            .declaration()
            .map(|decl| decl.doc_params.to_vec())
            .unwrap_or_default();
        if slot_names.is_empty() {
            return Err(descriptor.missing_declaration());
        }

        let mut methods = FxHashMap::default();
        for method in descriptor.methods {
            if method.name == GENERIC_METHOD {
                continue;
            }
            let mut positions = FxHashMap::default();
            for (offset, name) in method.param_names().iter().enumerate() {
                if let Some(slot) = slot_names.iter().position(|s| s == name) {
                    positions.insert(offset, slot);
                }
            }
            methods.insert(method.name, positions);
        }

        Ok(Self {
            class_name: descriptor.class_name,
            slot_names,
            methods,
        })
    }

    /// The template class this map was built for.
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// The canonical slot names, in declaration order.
    pub fn slot_names(&self) -> &[&'static str] {
        &self.slot_names
    }

    /// Number of type slots this instantiation declares.
    pub fn slot_count(&self) -> usize {
        self.slot_names.len()
    }

    /// The slot index constrained at `(method, position)`, if any.
    pub fn slot_for(&self, method: &str, position: usize) -> Option<usize> {
        self.methods.get(method)?.get(&position).copied()
    }

    /// All constrained positions for a method.
    pub fn positions(&self, method: &str) -> Option<&FxHashMap<usize, usize>> {
        self.methods.get(method)
    }
}

lazy_static! {
    static ref SIGNATURES: Mutex<FxHashMap<&'static str, Arc<SignatureMap>>> =
        Mutex::new(FxHashMap::default());
}

/// Process-wide cache of built signature maps, keyed by template class name.
pub struct SignatureRegistry;

impl SignatureRegistry {
    /// Return the cached map for the descriptor's class, building it first if
    /// absent. Build failures are not cached; a later call retries.
    pub fn get_or_build(descriptor: &TemplateDescriptor) -> Result<Arc<SignatureMap>, GenericError> {
        let mut cache = SIGNATURES.lock().expect("signature cache lock poisoned");
        if let Some(map) = cache.get(descriptor.class_name) {
            return Ok(Arc::clone(map));
        }
        let built = Arc::new(SignatureMap::build(descriptor)?);
        cache.insert(descriptor.class_name, Arc::clone(&built));
        Ok(built)
    }

    /// The cached map for a class, if one has been built.
    pub fn cached(class_name: &str) -> Option<Arc<SignatureMap>> {
        let cache = SIGNATURES.lock().expect("signature cache lock poisoned");
        cache.get(class_name).map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MethodMetadata;

    static MAP_LIKE: TemplateDescriptor = TemplateDescriptor::new(
        "TestMapLike",
        &[
            MethodMetadata::new(GENERIC_METHOD, &[], &["key", "value"]),
            MethodMetadata::new("all", &[], &[]),
            MethodMetadata::new("get", &["key"], &["key"]),
            MethodMetadata::new("set", &["key", "value"], &["key", "value"]),
            MethodMetadata::new("key", &["value"], &["value"]),
        ],
    );

    static NO_DECLARATION: TemplateDescriptor = TemplateDescriptor::new(
        "TestNoDeclaration",
        &[
            MethodMetadata::new(GENERIC_METHOD, &[], &[]),
            MethodMetadata::new("add", &["item"], &[]),
        ],
    );

    static DOC_ONLY: TemplateDescriptor = TemplateDescriptor::new(
        "TestDocOnly",
        &[
            MethodMetadata::new(GENERIC_METHOD, &[], &["item"]),
            // No actual parameter names; matching falls back to doc names.
            MethodMetadata::new("add", &[], &["item", "extra"]),
        ],
    );

    static DUPLICATE_SLOTS: TemplateDescriptor = TemplateDescriptor::new(
        "TestDuplicateSlots",
        &[
            MethodMetadata::new(GENERIC_METHOD, &[], &["item", "item"]),
            MethodMetadata::new("add", &["item"], &[]),
        ],
    );

    #[test]
    fn builds_position_to_slot_table() {
        let map = SignatureMap::build(&MAP_LIKE).unwrap();
        assert_eq!(map.slot_names(), &["key", "value"]);
        assert_eq!(map.slot_for("get", 0), Some(0));
        assert_eq!(map.slot_for("set", 0), Some(0));
        assert_eq!(map.slot_for("set", 1), Some(1));
        // key() looks up by value, so its position 0 maps to the value slot.
        assert_eq!(map.slot_for("key", 0), Some(1));
    }

    #[test]
    fn unmatched_positions_are_unconstrained() {
        let map = SignatureMap::build(&MAP_LIKE).unwrap();
        assert_eq!(map.slot_for("all", 0), None);
        assert_eq!(map.slot_for("set", 2), None);
        assert_eq!(map.slot_for("missing", 0), None);
    }

    #[test]
    fn empty_declaration_fails() {
        let err = SignatureMap::build(&NO_DECLARATION).unwrap_err();
        assert_eq!(
            err,
            GenericError::MissingDeclaration {
                class: "TestNoDeclaration".to_string(),
                method: GENERIC_METHOD,
            }
        );
    }

    #[test]
    fn falls_back_to_documented_names() {
        let map = SignatureMap::build(&DOC_ONLY).unwrap();
        assert_eq!(map.slot_for("add", 0), Some(0));
        // "extra" has no canonical match.
        assert_eq!(map.slot_for("add", 1), None);
    }

    #[test]
    fn duplicate_slot_names_match_leftmost() {
        let map = SignatureMap::build(&DUPLICATE_SLOTS).unwrap();
        assert_eq!(map.slot_count(), 2);
        assert_eq!(map.slot_for("add", 0), Some(0));
    }

    #[test]
    fn building_twice_is_idempotent() {
        let a = SignatureMap::build(&MAP_LIKE).unwrap();
        let b = SignatureMap::build(&MAP_LIKE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn registry_returns_the_same_shared_map() {
        let a = SignatureRegistry::get_or_build(&MAP_LIKE).unwrap();
        let b = SignatureRegistry::get_or_build(&MAP_LIKE).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(SignatureRegistry::cached("TestMapLike").is_some());
    }

    #[test]
    fn registry_does_not_cache_failures() {
        assert!(SignatureRegistry::get_or_build(&NO_DECLARATION).is_err());
        assert!(SignatureRegistry::cached("TestNoDeclaration").is_none());
        // Still fails the same way on retry.
        assert!(SignatureRegistry::get_or_build(&NO_DECLARATION).is_err());
    }
}
