// vim: tw=80
//! Dynamic values exchanged between the harness, the wrapper and its mocks.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering}
};

/// Identity token returned by every non-void mock of one harness.
///
/// Sentinels can't be forged: the only way for a wrapper to return one is to
/// relay it from a mock.  Each call to [`build_mocks`](crate::build_mocks)
/// mints a new one, so independent harnesses never share a sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sentinel(u64);

impl Sentinel {
    pub(crate) fn mint() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Sentinel(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sentinel #{}>", self.0)
    }
}

/// An argument or return value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Unit,
    Bool(bool),
    Int(i64),
    Str(String),
    /// The synthetic argument in position `n`
    Arg(usize),
    Sentinel(Sentinel)
}

impl Value {
    /// The list of synthetic arguments for a method taking `n` parameters.
    pub fn args(n: usize) -> Vec<Value> {
        (0..n).map(Value::Arg).collect()
    }

    pub fn is_sentinel(&self, sentinel: Sentinel) -> bool {
        *self == Value::Sentinel(sentinel)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Arg(n) => write!(f, "{{ arg: {} }}", n),
            Value::Sentinel(s) => write!(f, "{}", s)
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Sentinel> for Value {
    fn from(s: Sentinel) -> Self {
        Value::Sentinel(s)
    }
}
