// vim: tw=80
//! Loading and parsing the source text that holds the declaration.

use std::{
    fmt,
    fs,
    path::PathBuf
};

use tracing::debug;

use crate::Error;

/// Where the declaration's source text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// A file on disk, read once per parse.
    Path(PathBuf),
    /// Source text supplied directly by the caller.
    Text(String),
}

impl Source {
    pub fn read(&self) -> Result<String, Error> {
        match self {
            Source::Path(path) => {
                fs::read_to_string(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source
                })
            },
            Source::Text(text) => Ok(text.clone())
        }
    }

    /// Read and parse the source.  Nothing is cached: every call goes back to
    /// the file system.
    pub fn parse(&self) -> Result<syn::File, Error> {
        let text = self.read()?;
        debug!(origin = %self, bytes = text.len(), "parsing source");
        syn::parse_file(&text).map_err(|source| Error::Parse {
            origin: self.to_string(),
            source
        })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Text(_) => f.write_str("<inline source>")
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

#[cfg(test)]
mod t {
    use super::*;

    #[test]
    fn inline_text() {
        let source = Source::Text("trait Foo { fn foo(&self); }".to_owned());
        let file = source.parse().unwrap();
        assert_eq!(1, file.items.len());
    }

    #[test]
    fn missing_file() {
        let source = Source::Path(PathBuf::from("/nonexistent/passthru.rs"));
        let e = source.parse().unwrap_err();
        assert!(matches!(e, Error::Read { .. }), "{e:?}");
        assert!(e.to_string().contains("/nonexistent/passthru.rs"));
    }

    #[test]
    fn syntax_error() {
        let source = Source::Text("trait Foo { fn foo(&self) }".to_owned());
        let e = source.parse().unwrap_err();
        assert!(matches!(e, Error::Parse { .. }), "{e:?}");
        assert!(e.to_string().starts_with("failed to parse <inline source>"));
    }
}
