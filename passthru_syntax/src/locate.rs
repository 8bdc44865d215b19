// vim: tw=80
//! Finding the one declaration that the caller cares about.

use std::fmt;

use syn::{
    ItemImpl,
    ItemTrait,
    visit::{self, Visit}
};
use tracing::debug;

use crate::{Declaration, Error};

type Predicate = dyn for<'a> Fn(&Declaration<'a>) -> bool;

/// Depth-first search of `file`, in document order, for the first trait or
/// impl block that satisfies `predicate`.
///
/// A declaration is tested before anything nested inside of it, so an impl
/// block always wins over a trait declared within one of its method bodies.
pub fn find_type<'ast, P>(file: &'ast syn::File, predicate: P)
    -> Option<Declaration<'ast>>
    where P: for<'a> Fn(&Declaration<'a>) -> bool
{
    let mut search = Search {
        predicate: &predicate,
        found: None
    };
    search.visit_file(file);
    search.found
}

struct Search<'ast, 'p> {
    predicate: &'p (dyn for<'a> Fn(&Declaration<'a>) -> bool + 'p),
    found: Option<Declaration<'ast>>
}

impl<'ast> Search<'ast, '_> {
    /// Test a candidate.  Returns true once the search is over.
    fn consider(&mut self, decl: Declaration<'ast>) -> bool {
        if self.found.is_none() && (self.predicate)(&decl) {
            self.found = Some(decl);
        }
        self.found.is_some()
    }
}

impl<'ast> Visit<'ast> for Search<'ast, '_> {
    fn visit_item(&mut self, node: &'ast syn::Item) {
        if self.found.is_none() {
            visit::visit_item(self, node);
        }
    }

    fn visit_item_impl(&mut self, node: &'ast ItemImpl) {
        if !self.consider(Declaration::Impl(node)) {
            visit::visit_item_impl(self, node);
        }
    }

    fn visit_item_trait(&mut self, node: &'ast ItemTrait) {
        if !self.consider(Declaration::Trait(node)) {
            visit::visit_item_trait(self, node);
        }
    }
}

enum Rule {
    First,
    ByName(String),
    Conditional(Box<Predicate>)
}

/// Selects a declaration from a parsed file.
pub struct TypeFinder(Rule);

impl TypeFinder {
    /// The first declaration of any kind.
    pub fn first() -> Self {
        TypeFinder(Rule::First)
    }

    /// The first declaration whose name is exactly `name`.
    pub fn by_name<S: Into<String>>(name: S) -> Self {
        TypeFinder(Rule::ByName(name.into()))
    }

    /// The first declaration that satisfies `predicate`.
    pub fn conditional<P>(predicate: P) -> Self
        where P: for<'a> Fn(&Declaration<'a>) -> bool + 'static
    {
        TypeFinder(Rule::Conditional(Box::new(predicate)))
    }

    pub fn matches(&self, decl: &Declaration<'_>) -> bool {
        match &self.0 {
            Rule::First => true,
            Rule::ByName(name) => decl.name().as_deref() == Some(name.as_str()),
            Rule::Conditional(predicate) => predicate(decl)
        }
    }

    /// Locate the declaration, or fail.  A missing declaration is always an
    /// error, never an empty set of methods.
    pub fn locate<'ast>(&self, file: &'ast syn::File)
        -> Result<Declaration<'ast>, Error>
    {
        match find_type(file, |decl| self.matches(decl)) {
            Some(decl) => {
                debug!(declaration = %decl, line = decl.line(),
                    "located declaration");
                Ok(decl)
            },
            None => Err(Error::TypeNotFound { finder: self.to_string() })
        }
    }
}

impl Default for TypeFinder {
    fn default() -> Self {
        TypeFinder::first()
    }
}

impl fmt::Display for TypeFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Rule::First => f.write_str("the first trait or impl block"),
            Rule::ByName(name) => {
                write!(f, "a trait or impl block named `{}`", name)
            },
            Rule::Conditional(_) => {
                f.write_str("a trait or impl block matching the predicate")
            }
        }
    }
}

impl fmt::Debug for TypeFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeFinder").field(&self.to_string()).finish()
    }
}

/// Shortcut for [`TypeFinder::first`]
pub fn first_type_finder() -> TypeFinder {
    TypeFinder::first()
}

/// Shortcut for [`TypeFinder::by_name`]
pub fn type_by_name_finder<S: Into<String>>(name: S) -> TypeFinder {
    TypeFinder::by_name(name)
}

/// Shortcut for [`TypeFinder::conditional`]
pub fn conditional_type_finder<P>(predicate: P) -> TypeFinder
    where P: for<'a> Fn(&Declaration<'a>) -> bool + 'static
{
    TypeFinder::conditional(predicate)
}
