// vim: tw=80
//! Declaration lookup and signature extraction for passthru
//!
//! You probably don't want to use this crate directly.  Instead, you use its
//! reexports via the [`passthru`](../passthru/index.html) crate.
//!
//! Source text is parsed with `syn`.  Trait declarations stand in for
//! interfaces, and `impl` blocks for classes.  Method names may repeat within
//! one declaration; the repeats are treated as an overload set.

use std::{io, path::PathBuf};

use thiserror::Error;

pub mod collections;
mod declaration;
mod extract;
mod locate;
mod source;

pub use crate::collections::InsertionMap;
pub use crate::declaration::{
    Declaration,
    DeclarationKind,
    Member,
    Method,
    MethodForm
};
pub use crate::extract::{MethodDescriptor, extract_methods};
pub use crate::locate::{
    TypeFinder,
    conditional_type_finder,
    find_type,
    first_type_finder,
    type_by_name_finder
};
pub use crate::source::Source;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("failed to parse {origin} at line {}, column {}: {source}",
        .source.span().start().line, .source.span().start().column + 1)]
    Parse {
        origin: String,
        #[source]
        source: syn::Error
    },
    #[error("no declaration matched {finder}")]
    TypeNotFound {
        finder: String
    }
}
