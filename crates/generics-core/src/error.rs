//! Unified error type for the typed-proxy engine.
//!
//! All failures are synchronous and carry a human-readable message naming the
//! expected vs. actual identifiers (for mismatches) or the class/method (for
//! missing methods and declarations). Nothing is retried or downgraded: a
//! failed call leaves the proxy usable, a failed construction yields no proxy.

use thiserror::Error;

use crate::TypeIdentifier;

/// Errors raised during proxy construction, classification, and dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenericError {
    /// The designated declaration method has no discoverable parameter-name
    /// metadata. Fatal at construction.
    #[error("missing parameter metadata on {class}::{method}() declaration")]
    MissingDeclaration {
        class: String,
        method: &'static str,
    },

    /// The number of declared types does not match the template's canonical
    /// slot count. Fatal at construction.
    #[error("{class} declares {expected} type slots but {actual} types were given")]
    DeclaredTypeArity {
        class: String,
        expected: usize,
        actual: usize,
    },

    /// A value to classify falls outside the fixed type universe.
    #[error("generic type given is not supported")]
    UnsupportedType,

    /// A forwarded argument classified to an identifier different from its
    /// declared slot type. Raised before the template method runs.
    #[error("expecting {expected} type argument but received {actual} instead")]
    TypeMismatch {
        expected: TypeIdentifier,
        actual: TypeIdentifier,
    },

    /// Dispatch targeted a method absent from the template's public surface.
    #[error("generic {class}::{method}() method does not exist")]
    UnknownMethod { class: String, method: String },

    /// A class name passed to the template resolver has no registered
    /// constructor.
    #[error("template class {class} is not registered")]
    UnknownTemplate { class: String },

    /// A template method was invoked with the wrong number of arguments.
    #[error("{method}() expects {expected} arguments but received {actual}")]
    ArgumentCount {
        method: String,
        expected: usize,
        actual: usize,
    },

    /// Map lookup for a key that is not set.
    #[error("the key {key} is not set in the map")]
    MissingKey { key: String },

    /// Map reverse lookup for a value that is not set.
    #[error("the value is not set in the map")]
    MissingValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_identifiers() {
        let err = GenericError::TypeMismatch {
            expected: TypeIdentifier::class("User"),
            actual: TypeIdentifier::class("Duck"),
        };
        assert_eq!(
            err.to_string(),
            "expecting User type argument but received Duck instead"
        );
    }

    #[test]
    fn unknown_method_message_names_class_and_method() {
        let err = GenericError::UnknownMethod {
            class: "Map".to_string(),
            method: "push".to_string(),
        };
        assert_eq!(err.to_string(), "generic Map::push() method does not exist");
    }

    #[test]
    fn declaration_message_names_class_and_method() {
        let err = GenericError::MissingDeclaration {
            class: "Broken".to_string(),
            method: "generic",
        };
        assert_eq!(
            err.to_string(),
            "missing parameter metadata on Broken::generic() declaration"
        );
    }
}
