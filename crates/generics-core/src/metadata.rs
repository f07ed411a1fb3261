//! Template metadata contract and the template capability trait.
//!
//! The signature-map builder operates purely on declared parameter-name
//! lists; it needs no language reflection. Each template class supplies a
//! static [`TemplateDescriptor`] covering its whole public surface, and the
//! designated declaration method (named [`GENERIC_METHOD`]) carries the
//! canonical slot names in its *documented* parameter list.
//!
//! Two name sources are supported per method because template authors may
//! rely on either: the actual declared parameter names, or the documented
//! ones. [`MethodMetadata::param_names`] prefers actual names and falls back
//! to documented names.

use std::fmt;

use crate::{GenericError, Value};

/// Well-known name of the designated generic-declaration method.
pub const GENERIC_METHOD: &str = "generic";

/// Parameter-name metadata for one public method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodMetadata {
    /// Method name.
    pub name: &'static str,
    /// Actual declared parameter names, in order. May be empty.
    pub params: &'static [&'static str],
    /// Documented parameter names, in order. May be empty.
    pub doc_params: &'static [&'static str],
}

impl MethodMetadata {
    /// Create method metadata.
    pub const fn new(
        name: &'static str,
        params: &'static [&'static str],
        doc_params: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            params,
            doc_params,
        }
    }

    /// The parameter names used for slot matching: actual names when present,
    /// documented names otherwise.
    pub fn param_names(&self) -> &'static [&'static str] {
        if self.params.is_empty() {
            self.doc_params
        } else {
            self.params
        }
    }
}

/// The full public surface of a template class.
///
/// Static data: one descriptor per template class, shared by every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// The template's class name (the key for process-wide caches).
    pub class_name: &'static str,
    /// Metadata for every public method, including the declaration method.
    pub methods: &'static [MethodMetadata],
}

impl TemplateDescriptor {
    /// Create a descriptor.
    pub const fn new(class_name: &'static str, methods: &'static [MethodMetadata]) -> Self {
        Self {
            class_name,
            methods,
        }
    }

    /// Look up a method's metadata by name.
    pub fn method(&self, name: &str) -> Option<&MethodMetadata> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Check whether the template exposes `name` as a public method.
    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// The designated declaration method's metadata, if declared.
    pub fn declaration(&self) -> Option<&MethodMetadata> {
        self.method(GENERIC_METHOD)
    }

    /// Missing-declaration error for this class.
    pub(crate) fn missing_declaration(&self) -> GenericError {
        GenericError::MissingDeclaration {
            class: self.class_name.to_string(),
            method: GENERIC_METHOD,
        }
    }
}

/// Capability contract every template class implements.
///
/// Templates are ordinary objects accessed through an explicit
/// method-registry dispatch: the proxy calls [`Template::invoke`] with a
/// method name and arguments instead of relying on dynamic method-missing
/// hooks. The descriptor defines the public surface the proxy will accept.
pub trait Template: Send {
    /// The static metadata for this template class.
    fn descriptor(&self) -> &'static TemplateDescriptor;

    /// Dispatch a method call by name.
    ///
    /// Implementations match on the method name and return
    /// [`GenericError::UnknownMethod`] for anything outside their surface.
    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, GenericError>;
}

impl fmt::Debug for dyn Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("class", &self.descriptor().class_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DESCRIPTOR: TemplateDescriptor = TemplateDescriptor::new(
        "Sample",
        &[
            MethodMetadata::new(GENERIC_METHOD, &[], &["item"]),
            MethodMetadata::new("add", &["item"], &[]),
            MethodMetadata::new("legacy", &[], &["item"]),
        ],
    );

    #[test]
    fn method_lookup() {
        assert!(DESCRIPTOR.has_method("add"));
        assert!(!DESCRIPTOR.has_method("push"));
        assert_eq!(DESCRIPTOR.method("legacy").unwrap().name, "legacy");
    }

    #[test]
    fn declaration_is_the_generic_method() {
        let decl = DESCRIPTOR.declaration().unwrap();
        assert_eq!(decl.name, GENERIC_METHOD);
        assert_eq!(decl.doc_params, &["item"]);
    }

    #[test]
    fn param_names_prefer_actual_over_documented() {
        let add = DESCRIPTOR.method("add").unwrap();
        assert_eq!(add.param_names(), &["item"]);

        let legacy = DESCRIPTOR.method("legacy").unwrap();
        assert_eq!(legacy.param_names(), &["item"]);
    }
}
