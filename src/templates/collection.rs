//! Untyped append/remove list template.

use generics_core::{
    GENERIC_METHOD, Generic, GenericError, MethodMetadata, Template, TemplateDescriptor, Value,
};

use super::expect_args;

static DESCRIPTOR: TemplateDescriptor = TemplateDescriptor::new(
    "Collection",
    &[
        MethodMetadata::new(GENERIC_METHOD, &[], &["item"]),
        MethodMetadata::new("all", &[], &[]),
        MethodMetadata::new("add", &["item"], &["item"]),
        MethodMetadata::new("remove", &["item"], &["item"]),
    ],
);

/// Untyped list of items. One generic slot: the item type.
#[derive(Debug, Default)]
pub struct Collection {
    items: Vec<Value>,
}

impl Collection {
    /// Make a typed proxy over a fresh collection.
    ///
    /// `item` declares the item type: a bare string is a literal identifier,
    /// any other value declares its classified type.
    pub fn generic(item: impl Into<Value>) -> Result<Generic, GenericError> {
        Generic::make(Collection::default(), vec![item.into()])
    }

    fn all(&self) -> Value {
        Value::Array(self.items.clone())
    }

    fn add(&mut self, item: Value) {
        self.items.push(item);
    }

    fn remove(&mut self, item: &Value) {
        // Strict equality: objects match by identity.
        if let Some(index) = self.items.iter().position(|v| v == item) {
            self.items.remove(index);
        }
    }
}

impl Template for Collection {
    fn descriptor(&self) -> &'static TemplateDescriptor {
        &DESCRIPTOR
    }

    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, GenericError> {
        match method {
            "all" => {
                expect_args::<0>(method, args)?;
                Ok(self.all())
            }
            "add" => {
                let [item] = expect_args::<1>(method, args)?;
                self.add(item);
                Ok(Value::Null)
            }
            "remove" => {
                let [item] = expect_args::<1>(method, args)?;
                self.remove(&item);
                Ok(Value::Null)
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

    fn invoke(collection: &mut Collection, method: &str, args: Vec<Value>) -> Value {
        collection.invoke(method, args).unwrap()
    }

    #[test]
    fn add_then_all() {
        let mut c = Collection::default();
        invoke(&mut c, "add", vec![Value::Int(1)]);
        invoke(&mut c, "add", vec![Value::Int(2)]);
        assert_eq!(
            invoke(&mut c, "all", vec![]),
            Value::Array(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn remove_drops_first_match_only() {
        let mut c = Collection::default();
        invoke(&mut c, "add", vec![Value::Int(1)]);
        invoke(&mut c, "add", vec![Value::Int(1)]);
        invoke(&mut c, "remove", vec![Value::Int(1)]);
        assert_eq!(invoke(&mut c, "all", vec![]), Value::Array(vec![Value::Int(1)]));
    }

    #[test]
    fn remove_of_absent_item_is_a_no_op() {
        let mut c = Collection::default();
        invoke(&mut c, "add", vec![Value::Int(1)]);
        invoke(&mut c, "remove", vec![Value::Int(9)]);
        assert_eq!(invoke(&mut c, "all", vec![]), Value::Array(vec![Value::Int(1)]));
    }

    #[test]
    fn unknown_method_is_rejected() {
        let mut c = Collection::default();
        assert_eq!(
            c.invoke("push", vec![]).unwrap_err(),
            GenericError::UnknownMethod {
                class: "Collection".to_string(),
                method: "push".to_string(),
            }
        );
    }
}
