//! # Callables
//!
//! [`HookFn`] is the handle a hook stores and later invokes. Identity matters:
//! removing or looking up a callback compares handles, not behaviour, so keep
//! a clone of the handle you registered if you intend to remove it again.

use crate::{error::BoxError, value::Value};
use std::{
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

type ErasedFn = dyn Fn(&[Value]) -> Result<Value, BoxError>;

/// A reference-counted callable that can be attached to a hook.
///
/// Cloning is cheap and the clone compares equal to the original. Two handles
/// constructed separately never compare equal, even around identical code.
///
/// # Example
///
/// ```rust,ignore
/// let shout = HookFn::new(|args| args[0].to_string().to_uppercase());
/// registry.add_filter("title", shout.clone(), 10, 1);
/// registry.remove_filter("title", &shout, None);
/// ```
#[derive(Clone)]
pub struct HookFn(Rc<ErasedFn>);

impl HookFn {
    /// Wrap a closure.
    ///
    /// The closure may return anything implementing [`IntoCallbackResult`]:
    /// `()` for actions, a value for filters, or a `Result` for fallible
    /// callbacks.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&[Value]) -> R + 'static,
        R: IntoCallbackResult,
    {
        Self(Rc::new(move |args: &[Value]| f(args).into_callback_result()))
    }

    /// Wrap a plain function pointer, as used by static registrations.
    pub fn from_fn(f: fn(&[Value]) -> Result<Value, BoxError>) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callable with exactly the given arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, BoxError> {
        (self.0)(args)
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast::<()>()
    }
}

impl PartialEq for HookFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.addr(), other.addr())
    }
}

impl Eq for HookFn {}

impl Hash for HookFn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for HookFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HookFn").field(&self.addr()).finish()
    }
}

/// Trait for converting a callback's return value into the registry's
/// uniform `Result<Value, BoxError>`.
///
/// # Default Implementations
///
/// - `()` → `Value::Null`
/// - `Value`, `bool`, integers, `f64`, strings → the corresponding value
/// - `Option<T>` → `None` becomes `Value::Null`
/// - `Result<T, E>` → delegates to `T` or reports the error as a failure
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a hook callback",
    label = "missing `IntoCallbackResult` implementation",
    note = "Return `()`, a `Value`, a type convertible to `Value`, or a `Result` of those."
)]
pub trait IntoCallbackResult {
    /// Convert the output into the running value or a failure.
    fn into_callback_result(self) -> Result<Value, BoxError>;
}

impl IntoCallbackResult for Value {
    fn into_callback_result(self) -> Result<Value, BoxError> {
        Ok(self)
    }
}

macro_rules! into_value_result {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoCallbackResult for $ty {
                fn into_callback_result(self) -> Result<Value, BoxError> {
                    Ok(Value::from(self))
                }
            }
        )*
    };
}

into_value_result!((), bool, i32, i64, u32, usize, f64, String, &'static str, HookFn);

impl<T: Into<Value>> IntoCallbackResult for Vec<T> {
    fn into_callback_result(self) -> Result<Value, BoxError> {
        Ok(Value::from(self))
    }
}

impl<T: IntoCallbackResult> IntoCallbackResult for Option<T> {
    fn into_callback_result(self) -> Result<Value, BoxError> {
        match self {
            Some(t) => t.into_callback_result(),
            None => Ok(Value::Null),
        }
    }
}

impl<T, E> IntoCallbackResult for Result<T, E>
where
    T: IntoCallbackResult,
    E: Into<BoxError>,
{
    fn into_callback_result(self) -> Result<Value, BoxError> {
        match self {
            Ok(t) => t.into_callback_result(),
            Err(e) => Err(e.into()),
        }
    }
}

/// A callable stored in a hook together with its argument cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    func: HookFn,
    accepted_args: usize,
}

impl Callback {
    /// Create a new callback entry.
    pub fn new(func: HookFn, accepted_args: usize) -> Self {
        Self {
            func,
            accepted_args,
        }
    }

    /// The stored callable.
    pub fn func(&self) -> &HookFn {
        &self.func
    }

    /// How many call-time arguments are forwarded.
    pub fn accepted_args(&self) -> usize {
        self.accepted_args
    }

    /// Invoke with at most `accepted_args` leading elements of `args`.
    ///
    /// Missing arguments are not padded.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, BoxError> {
        let take = self.accepted_args.min(args.len());
        self.func.call(&args[..take])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashSet};

    #[test]
    fn clones_share_identity() {
        let a = HookFn::new(|_| ());
        let b = a.clone();
        let c = HookFn::new(|_| ());
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<HookFn> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn return_types_convert() {
        let unit = HookFn::new(|_| ());
        assert_eq!(unit.call(&[]).unwrap(), Value::Null);

        let text = HookFn::new(|_| "done");
        assert_eq!(text.call(&[]).unwrap(), Value::from("done"));

        let none = HookFn::new(|_| Option::<i64>::None);
        assert_eq!(none.call(&[]).unwrap(), Value::Null);

        let failing = HookFn::new(|_| -> Result<(), &'static str> { Err("boom") });
        assert_eq!(failing.call(&[]).unwrap_err().to_string(), "boom");
    }

    #[test]
    fn invoke_truncates_without_padding() {
        let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let func = HookFn::new(move |args| sink.borrow_mut().push(args.len()));

        let args = [Value::from(1), Value::from(2), Value::from(3)];
        Callback::new(func.clone(), 2).invoke(&args).unwrap();
        Callback::new(func.clone(), 5).invoke(&args[..1]).unwrap();
        Callback::new(func, 0).invoke(&args).unwrap();

        assert_eq!(*seen.borrow(), vec![2, 1, 0]);
    }

    #[test]
    fn from_fn_wraps_function_pointer() {
        fn double(args: &[Value]) -> Result<Value, BoxError> {
            let n = args.first().and_then(Value::as_i64).unwrap_or_default();
            Ok(Value::from(n * 2))
        }

        let func = HookFn::from_fn(double);
        assert_eq!(func.call(&[Value::from(21)]).unwrap(), Value::from(42));
    }
}
