//! Untyped key/value map template.
//!
//! Insertion-ordered, with strict-equality key search: any supported value
//! may key the map, and objects match by identity. Two generic slots: key
//! type and value type.

use generics_core::{
    GENERIC_METHOD, Generic, GenericError, MethodMetadata, Template, TemplateDescriptor, Value,
};

use super::expect_args;

static DESCRIPTOR: TemplateDescriptor = TemplateDescriptor::new(
    "Map",
    &[
        MethodMetadata::new(GENERIC_METHOD, &[], &["key", "value"]),
        MethodMetadata::new("all", &[], &[]),
        MethodMetadata::new("get", &["key"], &["key"]),
        MethodMetadata::new("set", &["key", "value"], &["key", "value"]),
        MethodMetadata::new("unset", &["key"], &["key"]),
        // Reverse lookup: the parameter is a *value*, so the signature map
        // checks it against the value slot.
        MethodMetadata::new("key", &["value"], &["value"]),
    ],
);

/// Untyped hash-map-like template.
#[derive(Debug, Default)]
pub struct Map {
    entries: Vec<(Value, Value)>,
}

impl Map {
    /// Make a typed proxy over a fresh map.
    ///
    /// `key` and `value` declare the slot types: bare strings are literal
    /// identifiers, any other value declares its classified type.
    pub fn generic(
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<Generic, GenericError> {
        Generic::make(Map::default(), vec![key.into(), value.into()])
    }

    fn all(&self) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|(k, v)| Value::Array(vec![k.clone(), v.clone()]))
                .collect(),
        )
    }

    fn get(&self, key: &Value) -> Result<Value, GenericError> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .ok_or_else(|| GenericError::MissingKey {
                key: key.to_string(),
            })
    }

    fn set(&mut self, key: Value, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    fn unset(&mut self, key: &Value) {
        self.entries.retain(|(k, _)| k != key);
    }

    fn key(&self, value: &Value) -> Result<Value, GenericError> {
        self.entries
            .iter()
            .find(|(_, v)| v == value)
            .map(|(k, _)| k.clone())
            .ok_or(GenericError::MissingValue)
    }
}

impl Template for Map {
    fn descriptor(&self) -> &'static TemplateDescriptor {
        &DESCRIPTOR
    }

    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, GenericError> {
        match method {
            "all" => {
                expect_args::<0>(method, args)?;
                Ok(self.all())
            }
            "get" => {
                let [key] = expect_args::<1>(method, args)?;
                self.get(&key)
            }
            "set" => {
                let [key, value] = expect_args::<2>(method, args)?;
                self.set(key, value);
                Ok(Value::Null)
            }
            "unset" => {
                let [key] = expect_args::<1>(method, args)?;
                self.unset(&key);
                Ok(Value::Null)
            }
            "key" => {
                let [value] = expect_args::<1>(method, args)?;
                self.key(&value)
            }
            _ => Err(GenericError::UnknownMethod {
                class: DESCRIPTOR.class_name.to_string(),
                method: method.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke(map: &mut Map, method: &str, args: Vec<Value>) -> Value {
        map.invoke(method, args).unwrap()
    }

    #[test]
    fn set_get_round_trip() {
        let mut m = Map::default();
        invoke(&mut m, "set", vec![Value::from("foo"), Value::Int(1)]);
        assert_eq!(
            invoke(&mut m, "get", vec![Value::from("foo")]),
            Value::Int(1)
        );
    }

    #[test]
    fn set_replaces_an_existing_key() {
        let mut m = Map::default();
        invoke(&mut m, "set", vec![Value::from("foo"), Value::Int(1)]);
        invoke(&mut m, "set", vec![Value::from("foo"), Value::Int(2)]);
        assert_eq!(
            invoke(&mut m, "get", vec![Value::from("foo")]),
            Value::Int(2)
        );
        assert_eq!(
            invoke(&mut m, "all", vec![]),
            Value::Array(vec![Value::Array(vec![
                Value::from("foo"),
                Value::Int(2)
            ])])
        );
    }

    #[test]
    fn get_of_missing_key_fails() {
        let mut m = Map::default();
        let err = m.invoke("get", vec![Value::from("nope")]).unwrap_err();
        assert_eq!(err.to_string(), "the key nope is not set in the map");
    }

    #[test]
    fn unset_removes_a_key() {
        let mut m = Map::default();
        invoke(&mut m, "set", vec![Value::from("foo"), Value::Int(1)]);
        invoke(&mut m, "unset", vec![Value::from("foo")]);
        assert!(m.invoke("get", vec![Value::from("foo")]).is_err());
    }

    #[test]
    fn reverse_lookup_by_value() {
        let mut m = Map::default();
        invoke(&mut m, "set", vec![Value::from("foo"), Value::Int(7)]);
        assert_eq!(
            invoke(&mut m, "key", vec![Value::Int(7)]),
            Value::from("foo")
        );
        assert_eq!(
            m.invoke("key", vec![Value::Int(8)]).unwrap_err(),
            GenericError::MissingValue
        );
    }

    #[test]
    fn integer_keys_are_distinct_from_string_keys() {
        let mut m = Map::default();
        invoke(&mut m, "set", vec![Value::Int(0), Value::from("a")]);
        invoke(&mut m, "set", vec![Value::from("0"), Value::from("b")]);
        assert_eq!(invoke(&mut m, "get", vec![Value::Int(0)]), Value::from("a"));
        assert_eq!(
            invoke(&mut m, "get", vec![Value::from("0")]),
            Value::from("b")
        );
    }
}
