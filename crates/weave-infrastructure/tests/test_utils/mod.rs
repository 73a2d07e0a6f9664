//! Shared targets for infrastructure tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use weave_domain::error::{Error, Result};
use weave_domain::ports::Invocable;
use weave_domain::value_objects::{ParamType, TargetDescriptor, Value, Visibility};

pub const MODULE: &str = "app::numbers";

/// Target with one cacheable method, one string method and one private method
#[derive(Default)]
pub struct Doubler {
    calls: AtomicUsize,
}

impl Doubler {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Invocable for Doubler {
    fn descriptors(&self) -> Vec<TargetDescriptor> {
        vec![
            TargetDescriptor::new(MODULE, "Doubler", "double").with_params(vec![ParamType::I64]),
            TargetDescriptor::new(MODULE, "Doubler", "shout").with_params(vec![ParamType::Str]),
            TargetDescriptor::new(MODULE, "Doubler", "halve")
                .with_params(vec![ParamType::I64])
                .with_visibility(Visibility::Private),
        ]
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match (method, args) {
            ("double", [Value::I64(n)]) => Ok(Value::I64(n * 2)),
            ("halve", [Value::I64(n)]) => Ok(Value::I64(n / 2)),
            ("shout", [Value::Str(s)]) => Ok(Value::Str(s.to_uppercase())),
            _ => Err(Error::method_not_found("app::numbers::Doubler", method)),
        }
    }
}
