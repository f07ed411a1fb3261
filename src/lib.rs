//! Runtime generics: typed proxies over untyped container templates.
//!
//! Declare, once, the concrete type(s) a container's elements (or a map's
//! keys and values) must hold; every subsequent mutating call is checked
//! against that declaration:
//!
//! ```
//! use generics::{Generic, ProxyConfig, Value};
//! use generics::templates::Map;
//!
//! // A map of string keys to integer values.
//! let mut scores = Generic::with_config(
//!     Map::default().into(),
//!     vec![Value::from("string"), Value::from("integer")],
//!     &ProxyConfig::enabled(),
//! ).unwrap();
//!
//! scores.call("set", vec![Value::from("alice"), Value::Int(3)]).unwrap();
//! assert_eq!(scores.call("get", vec![Value::from("alice")]), Ok(Value::Int(3)));
//!
//! // Wrong key type: rejected before the template ever runs.
//! let err = scores.call("set", vec![Value::Int(0), Value::Int(1)]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "expecting string type argument but received integer instead",
//! );
//! ```
//!
//! The engine lives in `generics-core` and is re-exported here; this crate
//! adds the built-in [`templates`].

pub mod templates;

pub use generics_core::{
    // Classification
    classify, resolve_declared, resolve_declared_all,
    // Errors
    GenericError,
    // Metadata contract
    GENERIC_METHOD, MethodMetadata, Template, TemplateDescriptor,
    // Proxy
    ENV_VARIABLE, Generic, ProxyConfig,
    // Resolution
    resolve, TemplateRegistry, TemplateSource,
    // Signature maps
    SignatureMap, SignatureRegistry,
    // Type identity
    BuiltinKind, TypeIdentifier,
    // Values
    Callable, ClassObject, Object, ResourceHandle, Value,
};

pub use templates::{register_builtin_templates, Collection, Map};
