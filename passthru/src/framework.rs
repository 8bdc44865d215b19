// vim: tw=80
//! The seams between passthru, the caller's test framework, and the object
//! under test.

use std::{
    error::Error as StdError,
    fmt,
    rc::Rc
};

use crate::Value;

/// Something that can be called by method name.
///
/// Both the [`MockSurface`](crate::MockSurface) and the wrapper under test
/// implement this.  A wrapper typically matches on `method` and forwards to
/// its delegate.
///
/// # Examples
/// ```
/// # use passthru::*;
/// struct Logged<D>(D);
///
/// impl<D: Invoke> Invoke for Logged<D> {
///     fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
///         match method {
///             "get" | "set" => self.0.invoke(method, args),
///             _ => None
///         }
///     }
/// }
/// ```
pub trait Invoke {
    /// Call `method` with `args`.  Returns `None` if there is no such method.
    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value>;
}

impl<T: Invoke + ?Sized> Invoke for &T {
    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
        (**self).invoke(method, args)
    }
}

impl<T: Invoke + ?Sized> Invoke for Box<T> {
    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
        (**self).invoke(method, args)
    }
}

impl<T: Invoke + ?Sized> Invoke for Rc<T> {
    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
        (**self).invoke(method, args)
    }
}

/// A single mocked function, created by a [`TestFramework`].
pub trait Mock {
    fn call(&self, args: &[Value]) -> Value;
}

/// The two kinds of mock a framework may be asked to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MockKind {
    /// For methods that return nothing
    Void,
    /// For methods that must hand back the harness's sentinel
    Returning
}

impl fmt::Display for MockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MockKind::Void => f.write_str("void"),
            MockKind::Returning => f.write_str("returning")
        }
    }
}

/// Adapter to a concrete mocking and assertion framework.
///
/// Mock creation is split into two optional capabilities.  A framework
/// provides a capability by overriding its method to return `Some`.  The
/// harness checks for each capability before using it and fails with
/// [`Error::MissingCapability`](crate::Error::MissingCapability) if a
/// declaration needs one that isn't there.
pub trait TestFramework {
    type Mock: Mock;
    /// Failure reported by [`assert_called_once_with`].  Frameworks that
    /// panic instead may use [`std::convert::Infallible`].
    ///
    /// [`assert_called_once_with`]: TestFramework::assert_called_once_with
    type Failure: StdError + Send + Sync + 'static;

    /// Create a mock that returns nothing.
    fn create_void_mock(&self) -> Option<Self::Mock> {
        None
    }

    /// Create a mock that always returns `value`.
    fn create_returning_mock(&self, _value: Value) -> Option<Self::Mock> {
        None
    }

    /// Check that `mock` was called exactly once, with `args`.
    fn assert_called_once_with(&self, mock: &Self::Mock, args: &[Value])
        -> Result<(), Self::Failure>;
}
