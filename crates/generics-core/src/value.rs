//! Runtime value universe for untyped templates.
//!
//! Every argument forwarded through a typed proxy and every element stored in
//! a template is a [`Value`]. The enum is closed: templates and proxies only
//! ever see this fixed universe, which is what makes runtime classification
//! total (see `classify`).
//!
//! Objects and callables are shared handles compared by identity, not by
//! contents. This mirrors strict (`===`) lookup semantics: a reverse lookup
//! for an object finds the exact instance that was stored, never a
//! structurally equal twin.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A dynamic value that can flow through a typed proxy into a template.
///
/// `Value` is `Clone`: primitives copy, arrays deep-clone, and object/callable
/// handles bump their reference count.
#[derive(Clone)]
pub enum Value {
    /// Composite value (ordered list of values).
    Array(Vec<Value>),
    /// Boolean value.
    Bool(bool),
    /// Function value, identity-compared.
    Callable(Callable),
    /// Floating point value (f32 widens to f64).
    Float(f64),
    /// Integer value (all integer widths stored as i64).
    Int(i64),
    /// Null.
    Null,
    /// Class instance handle, identity-compared.
    Object(Object),
    /// Opaque process-level handle.
    Resource(ResourceHandle),
    /// String value (owned).
    Str(String),
    /// Empty/uninhabited value. Outside the supported universe: the
    /// classifier rejects it.
    Void,
}

impl Value {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is void.
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Wrap a class instance as an object value.
    pub fn object<T: ClassObject>(instance: T) -> Self {
        Value::Object(Object::new(instance))
    }

    /// Wrap a function as a callable value.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    {
        Value::Callable(Callable::new(f))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Bool(v) => write!(f, "Bool({})", v),
            Value::Callable(_) => write!(f, "Callable(...)"),
            Value::Float(v) => write!(f, "Float({})", v),
            Value::Int(v) => write!(f, "Int({})", v),
            Value::Null => write!(f, "Null"),
            Value::Object(o) => write!(f, "Object({})", o.class_name()),
            Value::Resource(r) => write!(f, "Resource({})", r.0),
            Value::Str(s) => write!(f, "Str({:?})", s),
            Value::Void => write!(f, "Void"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Array(items) => write!(f, "array({})", items.len()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Callable(_) => write!(f, "callable"),
            Value::Float(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Null => write!(f, "null"),
            Value::Object(o) => write!(f, "{}", o.class_name()),
            Value::Resource(r) => write!(f, "resource#{}", r.0),
            Value::Str(s) => write!(f, "{}", s),
            Value::Void => write!(f, "void"),
        }
    }
}

impl PartialEq for Value {
    /// Strict equality: primitives by value, arrays element-wise,
    /// objects and callables by handle identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Resource(a), Value::Resource(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Void, Value::Void) => true,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Value::Object(v)
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Value::Callable(v)
    }
}

impl From<ResourceHandle> for Value {
    fn from(v: ResourceHandle) -> Self {
        Value::Resource(v)
    }
}

/// Capability trait for class instances stored as [`Value::Object`].
///
/// Implementors name their class (the identifier the classifier reports) and
/// expose themselves as `Any` for downcasting.
pub trait ClassObject: Any + Send + Sync {
    /// The class/interface name used as this instance's type identifier.
    fn class_name(&self) -> &str;

    /// Upcast for downcasting back to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a class instance.
///
/// Cloning shares the instance; equality is handle identity.
#[derive(Clone)]
pub struct Object(Arc<dyn ClassObject>);

impl Object {
    /// Wrap a class instance.
    pub fn new<T: ClassObject>(instance: T) -> Self {
        Object(Arc::new(instance))
    }

    /// The wrapped instance's class name.
    pub fn class_name(&self) -> &str {
        self.0.class_name()
    }

    /// Check whether the wrapped instance is a `T`.
    pub fn is<T: ClassObject>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Borrow the wrapped instance as a `T`, if it is one.
    pub fn downcast_ref<T: ClassObject>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.class_name()).finish()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        // Identity: same heap instance, not structural equality.
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }
}

/// Shared handle to a function value.
///
/// Cloning shares the function; equality is handle identity.
#[derive(Clone)]
pub struct Callable(Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>);

impl Callable {
    /// Wrap a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    {
        Callable(Arc::new(f))
    }

    /// Invoke the wrapped function.
    pub fn call(&self, args: Vec<Value>) -> Value {
        (self.0)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").finish_non_exhaustive()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }
}

/// Opaque process-level handle (file descriptors, connections, and the like).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceHandle(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    struct User;

    impl ClassObject for User {
        fn class_name(&self) -> &str {
            "User"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn primitive_equality() {
        assert_eq!(Value::Int(1), Value::Int(1));
        assert_ne!(Value::Int(1), Value::Int(2));
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::Str("a".into()), Value::from("a"));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn array_equality_is_element_wise() {
        let a = Value::Array(vec![Value::Int(1), Value::Str("x".into())]);
        let b = Value::Array(vec![Value::Int(1), Value::Str("x".into())]);
        assert_eq!(a, b);
    }

    #[test]
    fn object_equality_is_identity() {
        let user = Object::new(User);
        let a = Value::Object(user.clone());
        let b = Value::Object(user);
        assert_eq!(a, b);

        let other = Value::object(User);
        assert_ne!(a, other);
    }

    #[test]
    fn callable_equality_is_identity() {
        let f = Callable::new(|_| Value::Null);
        assert_eq!(Value::Callable(f.clone()), Value::Callable(f));

        let g = Value::callable(|_| Value::Null);
        let h = Value::callable(|_| Value::Null);
        assert_ne!(g, h);
    }

    #[test]
    fn object_downcast() {
        let obj = Object::new(User);
        assert!(obj.is::<User>());
        assert!(obj.downcast_ref::<User>().is_some());
        assert_eq!(obj.class_name(), "User");
    }

    #[test]
    fn callable_invokes() {
        let double = Callable::new(|args| match args.first() {
            Some(Value::Int(n)) => Value::Int(n * 2),
            _ => Value::Null,
        });
        assert_eq!(double.call(vec![Value::Int(21)]), Value::Int(42));
    }
}
