//! Procedural macros for declaring `contexts` specs.
//!
//! - `#[spec]`: placed on an inherent `impl` block, generates a `contexts::Spec` implementation whose method
//!   table lists every step-shaped method of the block, in declaration order.
//!
//! A method is step-shaped when it takes only `&self` or `&mut self`, is neither `async` nor generic, and returns
//! `()`, `StepResult`, or a `Result<(), E>` whose error converts into `contexts::StepError`. Other methods
//! (helpers returning values, constructors) are left alone.
//!
//! Methods may carry an explicit role tag, which takes precedence over naming conventions:
//! `#[setup]`, `#[action]`, `#[assertion]`, `#[teardown]`, `#[examples]`. Tags are consumed by the macro and
//! never reach the compiler.
//!
//! # Example
//! ```ignore
//! #[derive(Default)]
//! struct WhenAddingNumbers {
//!     total: i64,
//! }
//!
//! #[contexts::spec]
//! impl WhenAddingNumbers {
//!     fn given_an_empty_total(&mut self) {
//!         self.total = 0;
//!     }
//!
//!     fn because_two_and_three_are_added(&mut self) {
//!         self.total = 2 + 3;
//!     }
//!
//!     fn it_should_be_five(&self) {
//!         assert_eq!(self.total, 5);
//!     }
//!
//!     #[assertion]
//!     fn total_is_positive(&self) {
//!         assert!(self.total > 0);
//!     }
//! }
//!
//! // Generates:
//! impl contexts::Spec for WhenAddingNumbers {
//!     fn spec_info() -> contexts::SpecInfo {
//!         contexts::SpecInfo::new("WhenAddingNumbers", module_path!())
//!     }
//!     fn methods() -> Vec<contexts::MethodDef<Self>> { /* one entry per step */ }
//! }
//! ```

use contexts_core::roles::{self, Role};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{FnArg, GenericArgument, ImplItem, ImplItemFn, ItemImpl, PathArguments, ReturnType, Type, parse_macro_input};

/// Generates a `contexts::Spec` implementation for the annotated `impl` block.
#[proc_macro_attribute]
pub fn spec(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(Span::call_site(), "#[spec] does not take arguments")
            .to_compile_error()
            .into();
    }
    let mut item = parse_macro_input!(item as ItemImpl);
    match expand_spec(&mut item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_spec(item: &mut ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[spec] must be placed on an inherent impl block",
        ));
    }

    let type_name = type_name(&item.self_ty)?;

    let mut entries = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let tag = take_role_tag(method)?;
        if !is_step_signature(method) {
            if tag.is_some() {
                return Err(syn::Error::new_spanned(
                    &method.sig,
                    "tagged spec methods must take only `&self` or `&mut self` and return `()` or `Result<(), E>`",
                ));
            }
            continue;
        }

        let ident = &method.sig.ident;
        let name = ident.to_string();
        let tag = match tag {
            Some(role) => {
                let variant = role_variant(role);
                quote!(::core::option::Option::Some(::contexts::Role::#variant))
            }
            None => quote!(::core::option::Option::None),
        };
        let body = if returns_unit(&method.sig.output) {
            quote! {
                |spec: &mut Self| {
                    spec.#ident();
                    ::core::result::Result::Ok(())
                }
            }
        } else {
            quote! {
                |spec: &mut Self| spec.#ident().map_err(::core::convert::Into::into)
            }
        };
        entries.push(quote!(::contexts::MethodDef::new(#type_name, #name, #tag, #body)));
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    Ok(quote! {
        #item

        impl #impl_generics ::contexts::Spec for #self_ty #where_clause {
            fn spec_info() -> ::contexts::SpecInfo {
                ::contexts::SpecInfo::new(#type_name, ::core::module_path!())
            }

            fn methods() -> ::std::vec::Vec<::contexts::MethodDef<Self>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

/// The last path segment of the implementing type (`crate::specs::WhenAdding<T>` → `WhenAdding`).
fn type_name(ty: &Type) -> syn::Result<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .ok_or_else(|| syn::Error::new_spanned(ty, "expected a named type")),
        _ => Err(syn::Error::new_spanned(ty, "#[spec] can only be applied to impl blocks of named types")),
    }
}

/// Removes role tag attributes from a method and returns the role they name.
fn take_role_tag(method: &mut ImplItemFn) -> syn::Result<Option<Role>> {
    let mut found: Option<(Role, &'static str)> = None;
    let mut conflict = None;

    method.attrs.retain(|attr| {
        let Some(ident) = attr.path().get_ident() else {
            return true;
        };
        let Some(role) = roles::from_attribute(&ident.to_string()) else {
            return true;
        };
        match found {
            Some((previous, previous_name)) if previous != role => {
                conflict = Some(syn::Error::new_spanned(
                    attr,
                    format!(
                        "conflicting role tags: `#[{}]` and `#[{}]`",
                        previous_name,
                        roles::as_attribute(role)
                    ),
                ));
            }
            _ => found = Some((role, roles::as_attribute(role))),
        }
        false
    });

    match conflict {
        Some(err) => Err(err),
        None => Ok(found.map(|(role, _)| role)),
    }
}

fn is_step_signature(method: &ImplItemFn) -> bool {
    let sig = &method.sig;
    if sig.asyncness.is_some() || !sig.generics.params.is_empty() || sig.inputs.len() != 1 {
        return false;
    }
    let takes_self_by_ref = matches!(sig.inputs.first(), Some(FnArg::Receiver(receiver)) if receiver.reference.is_some());
    if !takes_self_by_ref {
        return false;
    }
    if returns_unit(&sig.output) {
        return true;
    }
    match &sig.output {
        ReturnType::Type(_, ty) => is_step_result(ty),
        ReturnType::Default => false,
    }
}

/// `StepResult`, or any `Result` whose success type is `()`.
fn is_step_result(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident == "StepResult" {
        return segment.arguments.is_none();
    }
    if segment.ident != "Result" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    matches!(
        args.args.first(),
        Some(GenericArgument::Type(Type::Tuple(tuple))) if tuple.elems.is_empty()
    )
}

fn returns_unit(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => true,
        ReturnType::Type(_, ty) => matches!(ty.as_ref(), Type::Tuple(tuple) if tuple.elems.is_empty()),
    }
}

fn role_variant(role: Role) -> proc_macro2::Ident {
    let name = match role {
        Role::Setup => "Setup",
        Role::Action => "Action",
        Role::Assertion => "Assertion",
        Role::Teardown => "Teardown",
        Role::Examples => "Examples",
    };
    proc_macro2::Ident::new(name, Span::call_site())
}
