// vim: tw=80
//! The built-in test framework: mocks that record their calls.

use std::cell::RefCell;

use predicates::prelude::*;
use predicates_tree::CaseTreeExt;
use thiserror::Error;

use crate::{Mock, TestFramework, Value};

/// A mock function that records the arguments of every call and returns a
/// fixed value.
#[derive(Debug, Default)]
pub struct RecordingMock {
    returns: Value,
    calls: RefCell<Vec<Vec<Value>>>
}

impl RecordingMock {
    /// A mock that returns `()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that returns `value`.
    pub fn returning(value: Value) -> Self {
        RecordingMock {
            returns: value,
            calls: RefCell::default()
        }
    }

    /// Argument lists of every call so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Mock for RecordingMock {
    fn call(&self, args: &[Value]) -> Value {
        self.calls.borrow_mut().push(args.to_vec());
        self.returns.clone()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallMismatch {
    #[error("Expectation called {actual} times instead of exactly once")]
    CallCount {
        actual: usize
    },
    #[error("Expectation didn't match arguments:\n{tree}")]
    Arguments {
        tree: String
    }
}

/// A [`TestFramework`] built on [`RecordingMock`].  It supports both kinds of
/// mock.
#[derive(Clone, Copy, Debug, Default)]
pub struct Recording;

impl TestFramework for Recording {
    type Mock = RecordingMock;
    type Failure = CallMismatch;

    fn create_void_mock(&self) -> Option<RecordingMock> {
        Some(RecordingMock::new())
    }

    fn create_returning_mock(&self, value: Value) -> Option<RecordingMock> {
        Some(RecordingMock::returning(value))
    }

    fn assert_called_once_with(&self, mock: &RecordingMock, args: &[Value])
        -> Result<(), CallMismatch>
    {
        let calls = mock.calls.borrow();
        let [actual] = calls.as_slice() else {
            return Err(CallMismatch::CallCount { actual: calls.len() });
        };
        let expected = predicate::eq(args.to_vec());
        match expected.find_case(false, actual) {
            Some(case) => Err(CallMismatch::Arguments {
                tree: case.tree().to_string()
            }),
            None => Ok(())
        }
    }
}

#[cfg(test)]
mod t {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn records_calls() {
        let mock = RecordingMock::returning(Value::Int(5));
        assert_eq!(Value::Int(5), mock.call(&[Value::Arg(0)]));
        assert_eq!(Value::Int(5), mock.call(&[]));
        assert_eq!(vec![vec![Value::Arg(0)], vec![]], mock.calls());
    }

    #[test]
    fn called_once_with_matching_args() {
        let mock = Recording.create_void_mock().unwrap();
        mock.call(&Value::args(2));
        assert_eq!(Ok(()),
            Recording.assert_called_once_with(&mock, &Value::args(2)));
    }

    #[test]
    fn never_called() {
        let mock = Recording.create_void_mock().unwrap();
        assert_eq!(Err(CallMismatch::CallCount { actual: 0 }),
            Recording.assert_called_once_with(&mock, &[]));
    }

    #[test]
    fn called_twice() {
        let mock = Recording.create_void_mock().unwrap();
        mock.call(&[]);
        mock.call(&[]);
        let e = Recording.assert_called_once_with(&mock, &[]).unwrap_err();
        assert_eq!("Expectation called 2 times instead of exactly once",
            e.to_string());
    }

    #[test]
    fn wrong_args() {
        let mock = Recording.create_void_mock().unwrap();
        mock.call(&[Value::Arg(1), Value::Arg(0)]);
        let e = Recording.assert_called_once_with(&mock, &Value::args(2))
            .unwrap_err();
        assert!(matches!(e, CallMismatch::Arguments { .. }), "{e:?}");
        assert!(e.to_string().starts_with("Expectation didn't match arguments"));
    }
}
