// vim: tw=80
//! Locating declarations in source files
use pretty_assertions::assert_eq;
use passthru_syntax::*;

fn class_file() -> syn::File {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/class.rs");
    Source::Path(path.into()).parse().unwrap()
}

fn method_names(decl: &Declaration<'_>) -> Vec<String> {
    decl.methods().map(|m| m.name()).collect()
}

#[test]
fn first_skips_structs() {
    let file = class_file();
    let decl = first_type_finder().locate(&file).unwrap();
    assert_eq!(DeclarationKind::Class, decl.kind());
    assert_eq!(Some("Class".to_owned()), decl.name());
    assert_eq!(6, decl.line());
}

#[test]
fn by_name() {
    let file = class_file();
    let decl = type_by_name_finder("Unrelated").locate(&file).unwrap();
    assert_eq!(DeclarationKind::Interface, decl.kind());
    assert_eq!(vec!["unrelated"], method_names(&decl));
}

#[test]
fn idempotent() {
    let file = class_file();
    let finder = type_by_name_finder("Class");
    let a = finder.locate(&file).unwrap();
    let b = finder.locate(&file).unwrap();
    assert_eq!(a.name(), b.name());
    assert_eq!(a.members().len(), b.members().len());
    assert_eq!(method_names(&a), method_names(&b));

    // A fresh parse of the same file yields the same content
    let reparsed = class_file();
    let c = finder.locate(&reparsed).unwrap();
    assert_eq!(a.name(), c.name());
    assert_eq!(method_names(&a), method_names(&c));
}

#[test]
fn absent_type_is_an_error() {
    let file = class_file();
    let e = type_by_name_finder("Nope").locate(&file).unwrap_err();
    assert_eq!("no declaration matched a trait or impl block named `Nope`",
        e.to_string());
}
