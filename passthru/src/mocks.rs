// vim: tw=80
//! Mock synthesis: one mock per method, all sharing one return sentinel.

use std::{fmt, rc::Rc};

use passthru_syntax::{InsertionMap, MethodDescriptor};
use tracing::debug;

use crate::{
    Error,
    Invoke,
    Mock,
    MockKind,
    Sentinel,
    TestFramework,
    Value
};

/// The stand-in delegate handed to the wrapper factory.
///
/// Holds one mock per method, in declaration order, plus the sentinel that
/// every non-void mock returns.
pub struct MockSurface<M> {
    mocks: InsertionMap<String, Rc<M>>,
    sentinel: Sentinel
}

impl<M> MockSurface<M> {
    /// The mock standing in for `method`.
    pub fn get(&self, method: &str) -> Option<&M> {
        self.mocks.get(method).map(|mock| &**mock)
    }

    pub(crate) fn shared(&self, method: &str) -> Option<Rc<M>> {
        self.mocks.get(method).cloned()
    }

    /// Method names, in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.mocks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }

    /// The value returned by every non-void mock.
    pub fn sentinel(&self) -> Sentinel {
        self.sentinel
    }
}

impl<M> Clone for MockSurface<M> {
    fn clone(&self) -> Self {
        MockSurface {
            mocks: self.mocks.clone(),
            sentinel: self.sentinel
        }
    }
}

impl<M> fmt::Debug for MockSurface<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockSurface")
            .field("methods", &self.methods().collect::<Vec<_>>())
            .field("sentinel", &self.sentinel)
            .finish()
    }
}

impl<M: Mock> Invoke for MockSurface<M> {
    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
        self.get(method).map(|mock| mock.call(args))
    }
}

/// Create a mock for each method.
///
/// Void methods get a plain mock and the rest get a mock that returns a
/// freshly minted [`Sentinel`].  Fails if `framework` can't create a kind of
/// mock that `methods` needs.
pub fn build_mocks<F>(methods: &[MethodDescriptor], framework: &F)
    -> Result<MockSurface<F::Mock>, Error>
    where F: TestFramework
{
    let sentinel = Sentinel::mint();
    let mut mocks = InsertionMap::new();
    for method in methods {
        let mock = if method.is_void() {
            framework.create_void_mock()
                .ok_or(Error::MissingCapability(MockKind::Void))?
        } else {
            framework.create_returning_mock(Value::Sentinel(sentinel))
                .ok_or(Error::MissingCapability(MockKind::Returning))?
        };
        mocks.insert(method.name().to_owned(), Rc::new(mock));
    }
    debug!(count = mocks.len(), %sentinel, "built mocks");
    Ok(MockSurface { mocks, sentinel })
}

#[cfg(test)]
mod t {
    use super::*;
    use std::{cell::Cell, convert::Infallible};

    struct Canned(Value);

    impl Mock for Canned {
        fn call(&self, _args: &[Value]) -> Value {
            self.0.clone()
        }
    }

    /// Counts how often each capability is used
    #[derive(Default)]
    struct Counting {
        void: Cell<usize>,
        returning: Cell<usize>
    }

    impl TestFramework for Counting {
        type Mock = Canned;
        type Failure = Infallible;

        fn create_void_mock(&self) -> Option<Canned> {
            self.void.set(self.void.get() + 1);
            Some(Canned(Value::Unit))
        }

        fn create_returning_mock(&self, value: Value) -> Option<Canned> {
            self.returning.set(self.returning.get() + 1);
            Some(Canned(value))
        }

        fn assert_called_once_with(&self, _: &Canned, _: &[Value])
            -> Result<(), Infallible>
        {
            Ok(())
        }
    }

    struct VoidOnly;

    impl TestFramework for VoidOnly {
        type Mock = Canned;
        type Failure = Infallible;

        fn create_void_mock(&self) -> Option<Canned> {
            Some(Canned(Value::Unit))
        }

        fn assert_called_once_with(&self, _: &Canned, _: &[Value])
            -> Result<(), Infallible>
        {
            Ok(())
        }
    }

    fn methods() -> Vec<MethodDescriptor> {
        vec![
            MethodDescriptor::new("void_method", 0, true),
            MethodDescriptor::new("with_return", 1, false),
            MethodDescriptor::new("another_return", 0, false),
        ]
    }

    #[test]
    fn one_mock_per_method() {
        let framework = Counting::default();
        let surface = build_mocks(&methods(), &framework).unwrap();
        assert_eq!(vec!["void_method", "with_return", "another_return"],
            surface.methods().collect::<Vec<_>>());
        assert_eq!(1, framework.void.get());
        assert_eq!(2, framework.returning.get());
    }

    #[test]
    fn returning_mocks_share_the_sentinel() {
        let surface = build_mocks(&methods(), &Counting::default()).unwrap();
        let sentinel = Value::Sentinel(surface.sentinel());
        assert_eq!(Some(sentinel.clone()), surface.invoke("with_return", &[]));
        assert_eq!(Some(sentinel), surface.invoke("another_return", &[]));
        assert_eq!(Some(Value::Unit), surface.invoke("void_method", &[]));
        assert_eq!(None, surface.invoke("missing", &[]));
    }

    #[test]
    fn each_build_mints_a_sentinel() {
        let a = build_mocks(&methods(), &Counting::default()).unwrap();
        let b = build_mocks(&methods(), &Counting::default()).unwrap();
        assert_ne!(a.sentinel(), b.sentinel());
    }

    #[test]
    fn missing_returning_capability() {
        let e = build_mocks(&methods(), &VoidOnly).unwrap_err();
        assert!(matches!(e, Error::MissingCapability(MockKind::Returning)));
        assert!(e.to_string().contains("returning"), "{e}");
    }

    #[test]
    fn unneeded_capability_isnt_required() {
        let methods = [MethodDescriptor::new("void_method", 0, true)];
        let surface = build_mocks(&methods, &VoidOnly).unwrap();
        assert_eq!(1, surface.len());
    }
}
