//! Core engine for runtime generics: typed proxies over untyped templates.
//!
//! This crate retrofits parametric-type discipline onto call sites of
//! otherwise untyped container objects. A caller declares, once, the concrete
//! type each generic slot must hold; the proxy enforces the declaration on
//! every forwarded call and raises a descriptive error the instant an
//! incompatible value is supplied.
//!
//! # Architecture
//!
//! ```text
//! Generic (typed proxy)
//! ├── resolver       - TemplateSource -> live template instance
//! ├── signature      - per-class method/position -> slot table (cached)
//! ├── classify       - runtime value -> type identifier
//! └── metadata       - descriptor contract templates implement
//! ```
//!
//! Construction resolves the template, resolves the declared slot types, and
//! reads (building on first use) the template class's signature map from the
//! process-wide cache. Every subsequent call classifies the constrained
//! arguments, compares against the declared slot identifiers by exact
//! equality, and forwards to the template.
//!
//! Templates are ordinary objects that implement [`Template`]: a static
//! [`TemplateDescriptor`] naming every public method's parameters, with the
//! canonical slot names documented on the designated `generic` method.

pub mod classify;
pub mod error;
pub mod metadata;
pub mod proxy;
pub mod resolver;
pub mod signature;
pub mod type_identifier;
pub mod value;

pub use classify::{classify, resolve_declared, resolve_declared_all};
pub use error::GenericError;
pub use metadata::{GENERIC_METHOD, MethodMetadata, Template, TemplateDescriptor};
pub use proxy::{ENV_VARIABLE, Generic, ProxyConfig};
pub use resolver::{resolve, TemplateRegistry, TemplateSource};
pub use signature::{SignatureMap, SignatureRegistry};
pub use type_identifier::{BuiltinKind, TypeIdentifier};
pub use value::{Callable, ClassObject, Object, ResourceHandle, Value};
