//! Built-in untyped templates the typed proxy can wrap.
//!
//! These are ordinary data structures; the proxy forwards calls into them.
//! Each supplies the declaration metadata the signature-map builder needs and
//! a convenience `generic` factory returning a ready proxy.

mod collection;
mod map;

pub use collection::Collection;
pub use map::Map;

use generics_core::{GenericError, TemplateRegistry, Value};

/// Register the built-in templates so class-name resolution can construct
/// them (e.g. `Generic::make("Map".into(), ...)`).
pub fn register_builtin_templates() {
    TemplateRegistry::register_default::<Collection>();
    TemplateRegistry::register_default::<Map>();
}

/// Unpack an exact argument count for a template method.
fn expect_args<const N: usize>(
    method: &str,
    args: Vec<Value>,
) -> Result<[Value; N], GenericError> {
    let actual = args.len();
    <[Value; N]>::try_from(args).map_err(|_| GenericError::ArgumentCount {
        method: method.to_string(),
        expected: N,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_args_unpacks_exact_counts() {
        let [a, b] = expect_args::<2>("set", vec![Value::Int(1), Value::Int(2)]).unwrap();
        assert_eq!(a, Value::Int(1));
        assert_eq!(b, Value::Int(2));
    }

    #[test]
    fn expect_args_rejects_wrong_counts() {
        let err = expect_args::<2>("set", vec![Value::Int(1)]).unwrap_err();
        assert_eq!(
            err,
            GenericError::ArgumentCount {
                method: "set".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn builtins_register_by_class_name() {
        register_builtin_templates();
        assert!(TemplateRegistry::contains("Collection"));
        assert!(TemplateRegistry::contains("Map"));
    }
}
