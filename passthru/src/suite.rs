// vim: tw=80
//! Running a batch of cases with the built-in [`Recording`] framework.

use tracing::{info, warn};

use crate::{
    Error,
    Invoke,
    MockSurface,
    PassThroughCase,
    Recording,
    RecordingMock,
    TestFramework,
    TypeSelection,
    run_pass_through
};

/// [`run_pass_through`] with the [`Recording`] framework.
pub fn recording_pass_through<W, F>(selection: &TypeSelection,
    wrapper_factory: F)
    -> Result<Vec<PassThroughCase<W, Recording>>, Error>
    where W: Invoke,
          F: FnOnce(MockSurface<RecordingMock>) -> W
{
    run_pass_through(selection, wrapper_factory, Recording)
}

/// Result of executing one case.
#[derive(Debug)]
pub struct CaseOutcome {
    pub method: String,
    pub result: Result<(), Error>
}

/// Results of a whole batch of cases, in the order they ran.
#[derive(Debug, Default)]
pub struct SuiteReport {
    outcomes: Vec<CaseOutcome>
}

impl SuiteReport {
    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Panic unless every case passed.  The panic message lists each failed
    /// method on its own line.
    #[track_caller]
    pub fn assert_passed(&self) {
        let failed: Vec<String> = self.failures()
            .filter_map(|o| o.result.as_ref().err()
                .map(|e| format!("should pass through {}: {}", o.method, e)))
            .collect();
        if !failed.is_empty() {
            panic!("{} of {} pass-through cases failed:\n{}", failed.len(),
                self.outcomes.len(), failed.join("\n"));
        }
    }
}

/// Execute every case, once each.  A failing case doesn't stop the others.
pub fn run_cases<W, A>(cases: &[PassThroughCase<W, A>]) -> SuiteReport
    where W: Invoke,
          A: TestFramework
{
    let outcomes = cases.iter().map(|case| {
        let result = case.execute();
        match &result {
            Ok(()) => info!(method = case.method_name(), "passed through"),
            Err(e) => warn!(method = case.method_name(), error = %e,
                "did not pass through")
        }
        CaseOutcome {
            method: case.method_name().to_owned(),
            result
        }
    }).collect();
    SuiteReport { outcomes }
}

/// Declare a `#[test]` that checks every method of a declaration passes
/// through.
///
/// The first argument names the test, the second is a [`TypeSelection`]
/// expression, and the third is the wrapper factory.  Cases use the
/// [`Recording`] framework.
///
/// # Examples
/// ```no_run
/// # use passthru::*;
/// struct Wrapper<D>(D);
/// impl<D: Invoke> Invoke for Wrapper<D> {
///     fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
///         self.0.invoke(method, args)
///     }
/// }
///
/// passthrough_test!(wrapper_passes_through,
///     TypeSelection::new("src/store.rs"),
///     Wrapper);
/// ```
#[macro_export]
macro_rules! passthrough_test {
    ($name:ident, $selection:expr, $factory:expr) => {
        #[test]
        fn $name() {
            let cases = $crate::recording_pass_through(&$selection, $factory)
                .expect("failed to build pass-through cases");
            $crate::run_cases(&cases).assert_passed();
        }
    };
}
