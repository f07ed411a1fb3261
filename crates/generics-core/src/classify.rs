//! Runtime type classification.
//!
//! Maps any [`Value`] to a canonical [`TypeIdentifier`]. Classification is
//! deterministic and total over the supported universe; only [`Value::Void`]
//! falls outside it.
//!
//! Declaring types and classifying supplied values are deliberately
//! asymmetric: a string *value* always classifies to the built-in `string`
//! kind, but a string passed as a *type declaration* is read as a literal
//! identifier (`"User"` declares the class `User`, `"string"` declares the
//! built-in kind). See [`resolve_declared`].

use crate::{GenericError, TypeIdentifier, Value};

/// Classify a runtime value into its canonical type identifier.
///
/// Priority order for values that could satisfy several predicates: object
/// (class identity) first, then array, callable, boolean, integer, float,
/// null, string, resource. A callable stored as an object classifies by its
/// class, never as `callable`.
pub fn classify(value: &Value) -> Result<TypeIdentifier, GenericError> {
    match value {
        Value::Object(obj) => Ok(TypeIdentifier::class(obj.class_name())),
        Value::Array(_) => Ok(TypeIdentifier::ARRAY),
        Value::Callable(_) => Ok(TypeIdentifier::CALLABLE),
        Value::Bool(_) => Ok(TypeIdentifier::BOOLEAN),
        Value::Int(_) => Ok(TypeIdentifier::INTEGER),
        Value::Float(_) => Ok(TypeIdentifier::FLOAT),
        Value::Null => Ok(TypeIdentifier::NULL),
        Value::Str(_) => Ok(TypeIdentifier::STRING),
        Value::Resource(_) => Ok(TypeIdentifier::RESOURCE),
        Value::Void => Err(GenericError::UnsupportedType),
    }
}

/// Resolve a type *declaration* argument into an identifier.
///
/// A string declaration is taken as a literal identifier rather than being
/// classified; every other value goes through [`classify`], so passing an
/// exemplar instance declares its class.
pub fn resolve_declared(value: &Value) -> Result<TypeIdentifier, GenericError> {
    match value {
        Value::Str(name) => Ok(TypeIdentifier::parse(name)),
        other => classify(other),
    }
}

/// Resolve a list of declaration arguments, preserving order.
pub fn resolve_declared_all(values: &[Value]) -> Result<Vec<TypeIdentifier>, GenericError> {
    values.iter().map(resolve_declared).collect()
}
