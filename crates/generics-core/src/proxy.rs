//! The typed proxy: the user-facing object wrapping an untyped template.
//!
//! A [`Generic`] owns exactly one resolved template instance, the resolved
//! identifiers for its type slots, and a shared reference to the template
//! class's cached signature map. Every call flows through [`Generic::call`],
//! which validates constrained argument positions and then forwards to the
//! template unchanged. Return values are never checked.

use std::sync::{Arc, OnceLock};

use crate::classify::{classify, resolve_declared_all};
use crate::resolver::{resolve, TemplateSource};
use crate::signature::{SignatureMap, SignatureRegistry};
use crate::metadata::Template;
use crate::{GenericError, TypeIdentifier, Value};

/// Name of the environment toggle that disables type enforcement.
///
/// A truthy value (`1`, `true`, `yes`, `on`; case-insensitive) disables
/// enforcement for every proxy in the process. Absent or falsy means
/// enforcement is on. Type checks cost time at every call site; production
/// deployments that already ran the checks in CI can switch them off.
pub const ENV_VARIABLE: &str = "RUST_GENERICS_DISABLE";

static ENV_ENFORCE: OnceLock<bool> = OnceLock::new();

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Resolve the environment toggle, reading it at most once per process.
fn enforcement_from_env() -> bool {
    *ENV_ENFORCE.get_or_init(|| match std::env::var(ENV_VARIABLE) {
        Ok(value) => !is_truthy(&value),
        Err(_) => true,
    })
}

/// Enforcement configuration for a proxy.
///
/// The default path reads the process environment once and caches the
/// result; tests and embedders inject an explicit setting instead of
/// manipulating the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Whether type declarations are resolved and calls are checked.
    pub enforce: bool,
}

impl ProxyConfig {
    /// Enforcement on.
    pub const fn enabled() -> Self {
        Self { enforce: true }
    }

    /// Enforcement off: declarations are ignored and calls forward unchecked.
    pub const fn disabled() -> Self {
        Self { enforce: false }
    }

    /// Resolve from the process environment (cached process-wide).
    pub fn from_env() -> Self {
        Self {
            enforce: enforcement_from_env(),
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// A typed proxy over an untyped template instance.
///
/// # Examples
///
/// ```
/// use generics_core::{Generic, GenericError, MethodMetadata, ProxyConfig,
///     Template, TemplateDescriptor, Value, GENERIC_METHOD};
///
/// static LIST: TemplateDescriptor = TemplateDescriptor::new(
///     "List",
///     &[
///         MethodMetadata::new(GENERIC_METHOD, &[], &["item"]),
///         MethodMetadata::new("add", &["item"], &[]),
///     ],
/// );
///
/// #[derive(Default)]
/// struct List(Vec<Value>);
///
/// impl Template for List {
///     fn descriptor(&self) -> &'static TemplateDescriptor {
///         &LIST
///     }
///
///     fn invoke(&mut self, method: &str, mut args: Vec<Value>) -> Result<Value, GenericError> {
///         match method {
///             "add" => {
///                 self.0.push(args.remove(0));
///                 Ok(Value::Null)
///             }
///             _ => Err(GenericError::UnknownMethod {
///                 class: "List".into(),
///                 method: method.into(),
///             }),
///         }
///     }
/// }
///
/// let mut ints = Generic::with_config(
///     List::default().into(),
///     vec![Value::from("integer")],
///     &ProxyConfig::enabled(),
/// ).unwrap();
///
/// assert!(ints.call("add", vec![Value::Int(1)]).is_ok());
/// assert!(ints.call("add", vec![Value::from("one")]).is_err());
/// ```
#[derive(Debug)]
pub struct Generic {
    template: Box<dyn Template>,
    types: Vec<TypeIdentifier>,
    signatures: Option<Arc<SignatureMap>>,
    enforce: bool,
}

impl Generic {
    /// Construct a typed proxy.
    ///
    /// `source` is resolved into a template instance (ownership transfers).
    /// When enforcement is enabled, `types` are resolved in order into the
    /// per-slot identifiers (bare strings pass through as literal
    /// identifiers, other values classify) and the class's signature map is
    /// fetched from the process-wide cache, building it on first use.
    pub fn new(
        source: impl Into<TemplateSource>,
        types: Vec<Value>,
    ) -> Result<Self, GenericError> {
        Self::with_config(source.into(), types, &ProxyConfig::from_env())
    }

    /// Factory alias for [`Generic::new`], same argument order.
    pub fn make(
        source: impl Into<TemplateSource>,
        types: Vec<Value>,
    ) -> Result<Self, GenericError> {
        Self::new(source, types)
    }

    /// Construct with an explicit enforcement setting.
    pub fn with_config(
        source: TemplateSource,
        types: Vec<Value>,
        config: &ProxyConfig,
    ) -> Result<Self, GenericError> {
        let template = resolve(source)?;

        if !config.enforce {
            // Skip type resolution and signature building entirely.
            return Ok(Self {
                template,
                types: Vec::new(),
                signatures: None,
                enforce: false,
            });
        }

        let descriptor = template.descriptor();
        let types = resolve_declared_all(&types)?;
        let signatures = SignatureRegistry::get_or_build(descriptor)?;
        if types.len() != signatures.slot_count() {
            return Err(GenericError::DeclaredTypeArity {
                class: descriptor.class_name.to_string(),
                expected: signatures.slot_count(),
                actual: types.len(),
            });
        }

        Ok(Self {
            template,
            types,
            signatures: Some(signatures),
            enforce: true,
        })
    }

    /// Dispatch a method call through the proxy.
    ///
    /// Fails with [`GenericError::UnknownMethod`] when the template does not
    /// expose `method`. With enforcement on, every argument position the
    /// signature map constrains is classified and compared exactly against
    /// its slot's declared identifier; a mismatch is raised before the
    /// template method runs. The call then forwards with the original
    /// arguments and returns the template's result unchanged.
    pub fn call(&mut self, method: &str, args: Vec<Value>) -> Result<Value, GenericError> {
        let descriptor = self.template.descriptor();
        if !descriptor.has_method(method) {
            return Err(GenericError::UnknownMethod {
                class: descriptor.class_name.to_string(),
                method: method.to_string(),
            });
        }

        if self.enforce {
            if let Some(signatures) = &self.signatures {
                for (index, value) in args.iter().enumerate() {
                    // Only assert when the position was templated as a
                    // generic parameter.
                    if let Some(slot) = signatures.slot_for(method, index) {
                        let actual = classify(value)?;
                        let expected = &self.types[slot];
                        if *expected != actual {
                            return Err(GenericError::TypeMismatch {
                                expected: expected.clone(),
                                actual,
                            });
                        }
                    }
                }
            }
        }

        self.template.invoke(method, args)
    }

    /// The wrapped template's class name.
    pub fn class_name(&self) -> &'static str {
        self.template.descriptor().class_name
    }

    /// The resolved per-slot type identifiers. Empty when enforcement is
    /// disabled.
    pub fn declared_types(&self) -> &[TypeIdentifier] {
        &self.types
    }

    /// Whether this proxy checks types.
    pub fn is_enforcing(&self) -> bool {
        self.enforce
    }

    /// The shared signature map this proxy consults, when enforcing.
    pub fn signature_map(&self) -> Option<&Arc<SignatureMap>> {
        self.signatures.as_ref()
    }
}
