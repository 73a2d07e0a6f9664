//! Shared targets for provider tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::sleep;
use std::time::Duration;
use weave_domain::error::{Error, Result};
use weave_domain::ports::Invocable;
use weave_domain::value_objects::{ParamType, TargetDescriptor, Value};

pub const MODULE: &str = "demo::math";

/// Target computing `n * 10`, optionally slowly, counting real calls
///
/// Negative inputs fail, so failure propagation can be exercised through
/// the same method the cache is attached to.
#[derive(Default)]
pub struct SlowTenfold {
    pub delay: Duration,
    calls: AtomicUsize,
}

impl SlowTenfold {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Invocable for SlowTenfold {
    fn descriptors(&self) -> Vec<TargetDescriptor> {
        vec![
            TargetDescriptor::new(MODULE, "SlowTenfold", "tenfold").with_params(vec![ParamType::I64]),
            TargetDescriptor::new(MODULE, "SlowTenfold", "label").with_params(vec![ParamType::Str]),
        ]
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay);
        }
        match (method, args) {
            ("tenfold", [Value::I64(n)]) if *n < 0 => {
                Err(Error::target(format!("negative input {}", n)))
            }
            ("tenfold", [Value::I64(n)]) => Ok(Value::I64(n * 10)),
            ("label", [Value::Str(s)]) => Ok(Value::Str(format!("<{}>", s))),
            _ => Err(Error::method_not_found("demo::math::SlowTenfold", method)),
        }
    }
}

pub fn tenfold_descriptor() -> TargetDescriptor {
    TargetDescriptor::new(MODULE, "SlowTenfold", "tenfold").with_params(vec![ParamType::I64])
}
