// vim: tw=80
//! Read-only views of the declarations that a wrapper may pass through to.
//!
//! A `trait` plays the part of an interface, and an `impl` block the part of a
//! class.  Both expose their members in declaration order.

use std::fmt;

use quote::ToTokens;
use syn::{
    ImplItem,
    ItemImpl,
    ItemTrait,
    ReturnType,
    Signature,
    TraitItem,
    Type,
    spanned::Spanned
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationKind {
    /// An `impl` block
    Class,
    /// A `trait`
    Interface
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Class => f.write_str("impl"),
            DeclarationKind::Interface => f.write_str("trait")
        }
    }
}

/// A class-or-interface declaration borrowed from a parsed file.
#[derive(Clone, Copy, Debug)]
pub enum Declaration<'ast> {
    Impl(&'ast ItemImpl),
    Trait(&'ast ItemTrait)
}

impl<'ast> Declaration<'ast> {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Impl(_) => DeclarationKind::Class,
            Declaration::Trait(_) => DeclarationKind::Interface
        }
    }

    /// The declared name.  For an `impl` block this is the last path segment
    /// of the self type, so `impl<T> fmt::Debug for Foo<T>` is named `Foo`.
    /// Impl blocks for non-path types, like `impl Tr for &str`, have no name.
    pub fn name(&self) -> Option<String> {
        match self {
            Declaration::Impl(item) => match item.self_ty.as_ref() {
                Type::Path(tp) => {
                    tp.path.segments.last().map(|seg| seg.ident.to_string())
                },
                _ => None
            },
            Declaration::Trait(item) => Some(item.ident.to_string())
        }
    }

    /// 1-based line on which the declaration starts.
    pub fn line(&self) -> usize {
        let span = match self {
            Declaration::Impl(item) => item.span(),
            Declaration::Trait(item) => item.span()
        };
        span.start().line
    }

    /// Every member, in declaration order.
    pub fn members(&self) -> Vec<Member<'ast>> {
        match *self {
            Declaration::Impl(item) => item.items.iter().map(|ii| match ii {
                ImplItem::Fn(f) => Member::Method(Method {
                    form: MethodForm::Declaration,
                    sig: &f.sig
                }),
                _ => Member::Property
            }).collect(),
            Declaration::Trait(item) => item.items.iter().map(|ti| match ti {
                TraitItem::Fn(f) => {
                    let form = if f.default.is_some() {
                        MethodForm::Declaration
                    } else {
                        MethodForm::Signature
                    };
                    Member::Method(Method { form, sig: &f.sig })
                },
                _ => Member::Property
            }).collect()
        }
    }

    /// Only the members that are methods, in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = Method<'ast>> {
        self.members().into_iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            Member::Property => None
        })
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} {}", self.kind(), name),
            None => write!(f, "unnamed {}", self.kind())
        }
    }
}

/// Whether a method carries a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodForm {
    Declaration,
    Signature
}

#[derive(Clone, Copy, Debug)]
pub enum Member<'ast> {
    Method(Method<'ast>),
    /// Associated consts, types, macros and anything else that isn't a method
    Property
}

#[derive(Clone, Copy, Debug)]
pub struct Method<'ast> {
    form: MethodForm,
    sig: &'ast Signature
}

impl<'ast> Method<'ast> {
    pub fn form(&self) -> MethodForm {
        self.form
    }

    pub fn name(&self) -> String {
        self.sig.ident.to_string()
    }

    /// Number of positional parameters.  The receiver doesn't count.
    pub fn num_parameters(&self) -> usize {
        self.sig.inputs.iter()
            .filter(|arg| matches!(arg, syn::FnArg::Typed(_)))
            .count()
    }

    /// Does the signature declare a unit return?
    ///
    /// Only the written annotation matters: an omitted return type and
    /// `-> ()` are void.  Anything else, even a type alias for `()`, is not.
    pub fn is_void(&self) -> bool {
        match &self.sig.output {
            ReturnType::Default => true,
            ReturnType::Type(_, ty) => is_unit(ty)
        }
    }

    /// The signature as written, for diagnostics.
    pub fn signature(&self) -> String {
        self.sig.to_token_stream().to_string()
    }
}

fn is_unit(ty: &Type) -> bool {
    match ty {
        Type::Tuple(tuple) => tuple.elems.is_empty(),
        Type::Paren(paren) => is_unit(&paren.elem),
        Type::Group(group) => is_unit(&group.elem),
        _ => false
    }
}
