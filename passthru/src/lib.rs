// vim: tw=80
//! Generated tests for wrappers that pass calls through to a delegate.
//!
//! A pass-through wrapper forwards each call unchanged to an inner object and
//! hands back the inner object's return value unmodified.  Testing that by
//! hand means one near-identical test per method.  Passthru writes those
//! tests for you, using the declaration of the delegate's interface as the
//! list of methods to check.
//!
//! # Usage
//!
//! * Describe where the declaration lives with a [`TypeSelection`].  It
//!   names a Rust source file and, optionally, which `trait` or `impl` block
//!   in it to use and which of its methods to test.
//! * Write a wrapper factory.  It receives a [`MockSurface`], a stand-in
//!   delegate with one mock per method, and returns the wrapper under test.
//! * Call [`run_pass_through`] (or [`recording_pass_through`] to use the
//!   built-in [`Recording`] framework).  The result is one
//!   [`PassThroughCase`] per method.
//! * Execute each case.  It calls the method on the wrapper with synthetic
//!   arguments, checks that non-void methods returned the mock's sentinel,
//!   and checks that the mock was called exactly once with the same
//!   arguments.
//!
//! Rust has no reflective call-by-name, so both the wrapper and the mock
//! surface are driven through the [`Invoke`] trait.
//!
//! ## Getting Started
//! ```
//! use passthru::*;
//!
//! const STORE: &str = r#"
//!     trait Store {
//!         fn get(&self, key: String) -> u32;
//!         fn set(&self, key: String, value: u32);
//!     }
//! "#;
//!
//! struct Cached<D> {
//!     inner: D
//! }
//!
//! impl<D: Invoke> Invoke for Cached<D> {
//!     fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
//!         match method {
//!             "get" | "set" => self.inner.invoke(method, args),
//!             _ => None
//!         }
//!     }
//! }
//!
//! let selection = TypeSelection::from_text(STORE);
//! let cases = recording_pass_through(&selection, |inner| Cached { inner })
//!     .unwrap();
//! for case in cases.iter() {
//!     case.execute().unwrap();
//! }
//! ```
//!
//! ## Declarations
//!
//! A `trait` acts as an interface and an `impl` block as a class.  By
//! default the first one found, in document order, is used; see
//! [`type_by_name_finder`] and [`conditional_type_finder`] for other choices.
//! A method name that appears several times in one declaration is treated as
//! an overload set, and the variant with the most parameters is tested.
//!
//! A method is void if its return type is omitted or written as `()`.
//!
//! ## Other test frameworks
//!
//! Implement [`TestFramework`] to use another mocking library.  Only
//! [`TestFramework::assert_called_once_with`] is required; the two mock
//! constructors are optional, and the harness fails with
//! [`Error::MissingCapability`] if the declaration needs one that's missing.

use thiserror::Error;

mod engine;
mod framework;
mod mocks;
mod recording;
mod suite;
mod value;

pub use crate::engine::{
    CaseState,
    PassThroughCase,
    TypeSelection,
    run_pass_through
};
pub use crate::framework::{Invoke, Mock, MockKind, TestFramework};
pub use crate::mocks::{MockSurface, build_mocks};
pub use crate::recording::{CallMismatch, Recording, RecordingMock};
pub use crate::suite::{
    CaseOutcome,
    SuiteReport,
    recording_pass_through,
    run_cases
};
pub use crate::value::{Sentinel, Value};
pub use passthru_syntax::{
    Declaration,
    DeclarationKind,
    MethodDescriptor,
    Source,
    TypeFinder,
    conditional_type_finder,
    extract_methods,
    find_type,
    first_type_finder,
    type_by_name_finder
};
pub use passthru_syntax::Error as SyntaxError;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading, parsing or locating the declaration failed
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("the test framework can't create {0} mocks")]
    MissingCapability(MockKind),
    #[error("{method} returned {returned} instead of the pass-through value")]
    DidNotReturnPassThroughValue {
        method: String,
        returned: Value
    },
    #[error("the wrapper has no method named {method}")]
    NoSuchMethod {
        method: String
    },
    /// Raised by the test framework's own assertion
    #[error(transparent)]
    Assertion(Box<dyn std::error::Error + Send + Sync>)
}
