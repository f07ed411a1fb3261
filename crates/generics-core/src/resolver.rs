//! Template resolution: turning a constructor argument into a live template.
//!
//! The proxy constructor accepts three shapes of template argument, resolved
//! in order: an already-built instance (ownership transfers, nothing is
//! copied), a zero-argument factory whose result is resolved recursively
//! (one or more levels of indirection), or a class name looked up in the
//! process-wide constructor registry.
//!
//! No capability validation happens here. A resolved instance whose
//! declaration metadata is missing fails later, in the signature-map builder.

use std::fmt;
use std::sync::Mutex;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::metadata::Template;
use crate::GenericError;

/// A constructor argument for the untyped template.
pub enum TemplateSource {
    /// An already-constructed template instance.
    Instance(Box<dyn Template>),
    /// A zero-argument factory producing another source.
    Factory(Box<dyn FnOnce() -> TemplateSource + Send>),
    /// A class name to construct via the registry.
    ClassName(String),
}

impl TemplateSource {
    /// Wrap a factory closure as a source.
    pub fn factory<F>(f: F) -> Self
    where
        F: FnOnce() -> TemplateSource + Send + 'static,
    {
        TemplateSource::Factory(Box::new(f))
    }
}

impl fmt::Debug for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Instance(t) => {
                write!(f, "Instance({})", t.descriptor().class_name)
            }
            TemplateSource::Factory(_) => write!(f, "Factory(...)"),
            TemplateSource::ClassName(name) => write!(f, "ClassName({:?})", name),
        }
    }
}

impl<T: Template + 'static> From<T> for TemplateSource {
    fn from(template: T) -> Self {
        TemplateSource::Instance(Box::new(template))
    }
}

impl From<&str> for TemplateSource {
    fn from(class_name: &str) -> Self {
        TemplateSource::ClassName(class_name.to_string())
    }
}

impl From<String> for TemplateSource {
    fn from(class_name: String) -> Self {
        TemplateSource::ClassName(class_name)
    }
}

/// Resolve a source into a template instance.
pub fn resolve(source: TemplateSource) -> Result<Box<dyn Template>, GenericError> {
    match source {
        TemplateSource::Instance(template) => Ok(template),
        TemplateSource::Factory(factory) => resolve(factory()),
        TemplateSource::ClassName(name) => TemplateRegistry::construct(&name),
    }
}

type Constructor = fn() -> Box<dyn Template>;

lazy_static! {
    static ref TEMPLATES: Mutex<FxHashMap<String, Constructor>> =
        Mutex::new(FxHashMap::default());
}

fn construct_default<T: Template + Default + 'static>() -> Box<dyn Template> {
    Box::new(T::default())
}

/// Process-wide registry of named template constructors.
///
/// Registration is idempotent: re-registering a name replaces its
/// constructor.
pub struct TemplateRegistry;

impl TemplateRegistry {
    /// Register a constructor under a class name.
    pub fn register(class_name: &str, constructor: Constructor) {
        let mut registry = TEMPLATES.lock().expect("template registry lock poisoned");
        registry.insert(class_name.to_string(), constructor);
    }

    /// Register a `Default`-constructible template under its own class name.
    pub fn register_default<T: Template + Default + 'static>() {
        let class_name = T::default().descriptor().class_name;
        Self::register(class_name, construct_default::<T>);
    }

    /// Check whether a class name has a registered constructor.
    pub fn contains(class_name: &str) -> bool {
        let registry = TEMPLATES.lock().expect("template registry lock poisoned");
        registry.contains_key(class_name)
    }

    /// Construct a registered template by class name.
    pub fn construct(class_name: &str) -> Result<Box<dyn Template>, GenericError> {
        let constructor = {
            let registry = TEMPLATES.lock().expect("template registry lock poisoned");
            registry.get(class_name).copied()
        };
        match constructor {
            Some(constructor) => Ok(constructor()),
            None => Err(GenericError::UnknownTemplate {
                class: class_name.to_string(),
            }),
        }
    }
}
