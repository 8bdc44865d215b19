// vim: tw=80
//! Building and running the pass-through cases.

use std::{
    cell::Cell,
    fmt,
    path::PathBuf,
    rc::Rc
};

use passthru_syntax::{
    MethodDescriptor,
    Source,
    TypeFinder,
    extract_methods
};
use tracing::debug;

use crate::{
    Error,
    Invoke,
    MockSurface,
    Sentinel,
    TestFramework,
    Value,
    build_mocks
};

type MethodFilter = Box<dyn Fn(&str) -> bool>;

/// Which declaration to test, and which of its methods.
///
/// By default the first trait or impl block in the source is used, and all of
/// its methods are tested.
///
/// # Examples
/// ```no_run
/// # use passthru::*;
/// let selection = TypeSelection::new("src/store.rs")
///     .type_finder(type_by_name_finder("Store"))
///     .method_filter(|name| name != "flush");
/// ```
pub struct TypeSelection {
    source: Source,
    type_finder: Option<TypeFinder>,
    method_filter: Option<MethodFilter>
}

impl TypeSelection {
    /// Select from the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        TypeSelection::from_source(Source::Path(path.into()))
    }

    /// Select from source text held in memory.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        TypeSelection::from_source(Source::Text(text.into()))
    }

    pub fn from_source(source: Source) -> Self {
        TypeSelection {
            source,
            type_finder: None,
            method_filter: None
        }
    }

    pub fn type_finder(mut self, type_finder: TypeFinder) -> Self {
        self.type_finder = Some(type_finder);
        self
    }

    /// Only test methods whose names satisfy `filter`.
    pub fn method_filter<F>(mut self, filter: F) -> Self
        where F: Fn(&str) -> bool + 'static
    {
        self.method_filter = Some(Box::new(filter));
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Parse the source, locate the declaration, and extract its methods.
    ///
    /// The source is parsed anew on every call.
    pub fn method_descriptors(&self) -> Result<Vec<MethodDescriptor>, Error> {
        let first = TypeFinder::first();
        let type_finder = self.type_finder.as_ref().unwrap_or(&first);
        let file = self.source.parse()?;
        let decl = type_finder.locate(&file)?;
        let methods = match &self.method_filter {
            Some(filter) => extract_methods(&decl, filter),
            None => extract_methods(&decl, |_| true)
        };
        Ok(methods)
    }
}

impl fmt::Debug for TypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSelection")
            .field("source", &self.source)
            .field("type_finder", &self.type_finder)
            .field("method_filter", &self.method_filter.is_some())
            .finish()
    }
}

/// Build one pass-through case per method of the selected declaration.
///
/// Everything happens up front: the source is parsed, the mocks are built,
/// and `wrapper_factory` is called exactly once with the mock surface.  The
/// cases themselves do nothing until they are executed.
#[tracing::instrument(skip_all, fields(source = %selection.source()))]
pub fn run_pass_through<A, W, F>(
    selection: &TypeSelection,
    wrapper_factory: F,
    framework: A
) -> Result<Vec<PassThroughCase<W, A>>, Error>
    where A: TestFramework,
          W: Invoke,
          F: FnOnce(MockSurface<A::Mock>) -> W
{
    let methods = selection.method_descriptors()?;
    let surface = build_mocks(&methods, &framework)?;
    let sentinel = surface.sentinel();
    let mut mocks = Vec::with_capacity(methods.len());
    for method in methods {
        let mock = surface.shared(method.name())
            .ok_or_else(|| Error::NoSuchMethod {
                method: method.name().to_owned()
            })?;
        mocks.push((method, mock));
    }
    let wrapper = Rc::new(wrapper_factory(surface));
    let framework = Rc::new(framework);
    let cases: Vec<_> = mocks.into_iter()
        .map(|(descriptor, mock)| PassThroughCase {
            descriptor,
            wrapper: Rc::clone(&wrapper),
            mock,
            sentinel,
            framework: Rc::clone(&framework),
            state: Cell::new(CaseState::Pending)
        }).collect();
    debug!(count = cases.len(), "built pass-through cases");
    Ok(cases)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseState {
    /// Not yet executed
    Pending,
    /// Executed at least once, successfully or not
    Executed
}

/// Invocation and verification of one method.
pub struct PassThroughCase<W, A: TestFramework> {
    descriptor: MethodDescriptor,
    wrapper: Rc<W>,
    mock: Rc<A::Mock>,
    sentinel: Sentinel,
    framework: Rc<A>,
    state: Cell<CaseState>
}

impl<W: Invoke, A: TestFramework> PassThroughCase<W, A> {
    pub fn method_name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &MethodDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> CaseState {
        self.state.get()
    }

    /// Call the method on the wrapper with one synthetic argument per
    /// parameter, then check that the wrapper returned the mock's sentinel
    /// (for non-void methods) and that the mock was called once with the same
    /// arguments.
    ///
    /// Executing a case twice calls the mock twice, so the second run will
    /// fail any "called once" assertion.
    pub fn execute(&self) -> Result<(), Error> {
        self.state.set(CaseState::Executed);
        let method = self.method_name();
        let args = Value::args(self.descriptor.num_parameters());
        let returned = self.wrapper.invoke(method, &args)
            .ok_or_else(|| Error::NoSuchMethod { method: method.to_owned() })?;
        if !self.descriptor.is_void() && !returned.is_sentinel(self.sentinel) {
            return Err(Error::DidNotReturnPassThroughValue {
                method: method.to_owned(),
                returned
            });
        }
        self.framework.assert_called_once_with(&self.mock, &args)
            .map_err(|e| Error::Assertion(Box::new(e)))
    }
}

impl<W, A: TestFramework> fmt::Debug for PassThroughCase<W, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassThroughCase")
            .field("descriptor", &self.descriptor)
            .field("sentinel", &self.sentinel)
            .field("state", &self.state.get())
            .finish()
    }
}
