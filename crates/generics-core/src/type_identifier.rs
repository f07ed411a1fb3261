//! Type identity for declarations and classification.
//!
//! A [`TypeIdentifier`] is either one of the fixed built-in kinds or an
//! arbitrary class/interface name. Identifiers are compared by exact equality
//! only; there is no subtype or supertype matching.

use std::fmt;

/// The fixed enumeration of built-in kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    /// Composite value.
    Array,
    /// Boolean value.
    Boolean,
    /// Function value.
    Callable,
    /// Floating point value.
    Float,
    /// Integer value.
    Integer,
    /// Null.
    Null,
    /// Opaque process-level handle.
    Resource,
    /// String value.
    String,
}

impl BuiltinKind {
    /// The canonical display name for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinKind::Array => "array",
            BuiltinKind::Boolean => "boolean",
            BuiltinKind::Callable => "callable",
            BuiltinKind::Float => "float",
            BuiltinKind::Integer => "integer",
            BuiltinKind::Null => "null",
            BuiltinKind::Resource => "resource",
            BuiltinKind::String => "string",
        }
    }

    /// Parse a canonical built-in name. Exact match only.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "array" => Some(BuiltinKind::Array),
            "boolean" => Some(BuiltinKind::Boolean),
            "callable" => Some(BuiltinKind::Callable),
            "float" => Some(BuiltinKind::Float),
            "integer" => Some(BuiltinKind::Integer),
            "null" => Some(BuiltinKind::Null),
            "resource" => Some(BuiltinKind::Resource),
            "string" => Some(BuiltinKind::String),
            _ => None,
        }
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built-in kind name or a class/interface name.
///
/// # Examples
///
/// ```
/// use generics_core::TypeIdentifier;
///
/// let s = TypeIdentifier::parse("string");
/// assert_eq!(s, TypeIdentifier::STRING);
///
/// let user = TypeIdentifier::parse("User");
/// assert_eq!(user.to_string(), "User");
/// assert_ne!(s, user);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeIdentifier {
    /// One of the fixed built-in kinds.
    Builtin(BuiltinKind),
    /// An arbitrary class/interface name.
    Class(String),
}

impl TypeIdentifier {
    pub const ARRAY: TypeIdentifier = TypeIdentifier::Builtin(BuiltinKind::Array);
    pub const BOOLEAN: TypeIdentifier = TypeIdentifier::Builtin(BuiltinKind::Boolean);
    pub const CALLABLE: TypeIdentifier = TypeIdentifier::Builtin(BuiltinKind::Callable);
    pub const FLOAT: TypeIdentifier = TypeIdentifier::Builtin(BuiltinKind::Float);
    pub const INTEGER: TypeIdentifier = TypeIdentifier::Builtin(BuiltinKind::Integer);
    pub const NULL: TypeIdentifier = TypeIdentifier::Builtin(BuiltinKind::Null);
    pub const RESOURCE: TypeIdentifier = TypeIdentifier::Builtin(BuiltinKind::Resource);
    pub const STRING: TypeIdentifier = TypeIdentifier::Builtin(BuiltinKind::String);

    /// Create a class identifier.
    pub fn class(name: impl Into<String>) -> Self {
        TypeIdentifier::Class(name.into())
    }

    /// Parse a bare identifier string.
    ///
    /// Exact canonical built-in names map to [`TypeIdentifier::Builtin`];
    /// anything else is a class name. Note this means `"int"` is a *class*
    /// named `int`, not the integer kind; declarations use canonical names.
    pub fn parse(name: &str) -> Self {
        match BuiltinKind::parse(name) {
            Some(kind) => TypeIdentifier::Builtin(kind),
            None => TypeIdentifier::Class(name.to_string()),
        }
    }

    /// Check if this is a built-in kind.
    pub fn is_builtin(&self) -> bool {
        matches!(self, TypeIdentifier::Builtin(_))
    }

    /// The identifier as a display string slice.
    pub fn as_str(&self) -> &str {
        match self {
            TypeIdentifier::Builtin(kind) => kind.name(),
            TypeIdentifier::Class(name) => name,
        }
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TypeIdentifier {
    fn from(s: &str) -> Self {
        TypeIdentifier::parse(s)
    }
}

impl From<String> for TypeIdentifier {
    fn from(s: String) -> Self {
        TypeIdentifier::parse(&s)
    }
}

impl From<BuiltinKind> for TypeIdentifier {
    fn from(kind: BuiltinKind) -> Self {
        TypeIdentifier::Builtin(kind)
    }
}
