// vim: tw=80
//! Method signature extraction and overload merging.

use tracing::{debug, trace};

use crate::{Declaration, InsertionMap};

/// The shape of one method after overloads have been merged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    name: String,
    num_parameters: usize,
    is_void: bool
}

impl MethodDescriptor {
    pub fn new<S: Into<String>>(name: S, num_parameters: usize, is_void: bool)
        -> Self
    {
        MethodDescriptor {
            name: name.into(),
            num_parameters,
            is_void
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_parameters(&self) -> usize {
        self.num_parameters
    }

    pub fn is_void(&self) -> bool {
        self.is_void
    }
}

/// Extract one descriptor per distinct method name accepted by
/// `is_valid_method`, in the order each name first appears.
///
/// When a name is declared more than once, the declaration with the most
/// parameters wins.  Ties go to the earliest declaration.
#[tracing::instrument(skip_all, fields(declaration = %decl))]
pub fn extract_methods<F>(decl: &Declaration<'_>, is_valid_method: F)
    -> Vec<MethodDescriptor>
    where F: Fn(&str) -> bool
{
    let mut widest = InsertionMap::<String, MethodDescriptor>::new();
    for method in decl.methods() {
        let name = method.name();
        if !is_valid_method(&name) {
            trace!(method = %name, "rejected by filter");
            continue;
        }
        let candidate = MethodDescriptor {
            num_parameters: method.num_parameters(),
            is_void: method.is_void(),
            name
        };
        let recorded = widest.get(candidate.name())
            .map(|r| r.num_parameters);
        match recorded {
            Some(kept) if kept >= candidate.num_parameters => {
                trace!(signature = %method.signature(), kept,
                    "discarded narrower overload");
            },
            _ => {
                trace!(signature = %method.signature(),
                    replaced = recorded.is_some(),
                    "recorded overload");
                widest.insert(candidate.name.clone(), candidate);
            }
        }
    }
    let methods = widest.into_values();
    debug!(count = methods.len(), "extracted methods");
    methods
}
