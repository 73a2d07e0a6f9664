//! Factorial calculators
//!
//! Two interchangeable [`Calculator`] implementations that describe
//! themselves as [`Invocable`] targets, and [`CalculatorProxy`], which
//! puts the typed trait back in front of a proxied calculator.
//!
//! Both implementations fail with a target error on negative input or
//! when the result does not fit in an `i64` (beyond `20!`).

use std::fmt;
use weave_application::Proxy;
use weave_domain::error::{Error, Result};
use weave_domain::ports::Invocable;
use weave_domain::value_objects::{ParamType, TargetDescriptor, Value};

const FACTORIAL: &str = "factorial";

/// Computes factorials
pub trait Calculator: Send + Sync {
    /// `num!`
    fn factorial(&self, num: i64) -> Result<i64>;
}

/// Recursive implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct RecCalculator;

impl Calculator for RecCalculator {
    fn factorial(&self, num: i64) -> Result<i64> {
        check_non_negative(num)?;
        if num <= 1 {
            return Ok(1);
        }
        let rest = self.factorial(num - 1)?;
        num.checked_mul(rest).ok_or_else(|| overflow(num))
    }
}

/// Iterative implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct ImpeCalculator;

impl Calculator for ImpeCalculator {
    fn factorial(&self, num: i64) -> Result<i64> {
        check_non_negative(num)?;
        (2..=num).try_fold(1_i64, |acc, n| acc.checked_mul(n).ok_or_else(|| overflow(num)))
    }
}

fn check_non_negative(num: i64) -> Result<()> {
    if num < 0 {
        return Err(Error::target(format!(
            "factorial is undefined for negative input {}",
            num
        )));
    }
    Ok(())
}

fn overflow(num: i64) -> Error {
    Error::target(format!("{}! overflows i64", num))
}

fn factorial_descriptor(type_name: &str) -> TargetDescriptor {
    TargetDescriptor::new(module_path!(), type_name, FACTORIAL).with_params(vec![ParamType::I64])
}

fn dispatch(calculator: &dyn Calculator, method: &str, args: &[Value], owner: &str) -> Result<Value> {
    match (method, args) {
        (FACTORIAL, [Value::I64(num)]) => calculator.factorial(*num).map(Value::I64),
        (FACTORIAL, _) => Err(Error::invalid_argument(format!(
            "{}::{} expects (i64), got ({})",
            owner,
            FACTORIAL,
            Value::render_list(args)
        ))),
        _ => Err(Error::method_not_found(owner, method)),
    }
}

impl Invocable for RecCalculator {
    fn descriptors(&self) -> Vec<TargetDescriptor> {
        vec![factorial_descriptor("RecCalculator")]
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        dispatch(self, method, args, "RecCalculator")
    }
}

impl Invocable for ImpeCalculator {
    fn descriptors(&self) -> Vec<TargetDescriptor> {
        vec![factorial_descriptor("ImpeCalculator")]
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        dispatch(self, method, args, "ImpeCalculator")
    }
}

/// Typed [`Calculator`] in front of a proxied calculator
///
/// Calls go through the proxy's advice chain, so callers keep using the
/// trait exactly as they would the unwrapped calculator.
pub struct CalculatorProxy<T: Invocable + ?Sized> {
    proxy: Proxy<T>,
}

impl<T: Invocable + ?Sized> CalculatorProxy<T> {
    /// Wrap a proxy whose target exposes `factorial(i64)`
    pub fn new(proxy: Proxy<T>) -> Self {
        Self { proxy }
    }

    /// The underlying proxy
    pub fn proxy(&self) -> &Proxy<T> {
        &self.proxy
    }
}

impl<T: Invocable + ?Sized> Calculator for CalculatorProxy<T> {
    fn factorial(&self, num: i64) -> Result<i64> {
        let value = self.proxy.invoke(FACTORIAL, &[Value::I64(num)])?;
        value.as_i64().ok_or_else(|| {
            Error::internal(format!("{} returned a non-integer value {}", FACTORIAL, value))
        })
    }
}

impl<T: Invocable + ?Sized> fmt::Debug for CalculatorProxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorProxy")
            .field("proxy", &self.proxy)
            .finish()
    }
}
