//! Attribute macros for registering hook callbacks at link time.
//!
//! - `#[action("hook", priority = N, accepted_args = N)]`
//! - `#[filter(...)]` - same expansion; actions and filters share storage
//!
//! The annotated function stays callable as written. Alongside it the macro
//! submits a `StaticRegistration` to `inventory`, which the shared default
//! registry installs on first use.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, FnArg, Ident, ItemFn, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Register a function as an action callback.
///
/// ```rust,ignore
/// #[hookline::action("init", priority = 5)]
/// fn announce(args: &[Value]) {
///     tracing::info!(?args, "starting");
/// }
/// ```
#[proc_macro_attribute]
pub fn action(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_registration(attr, item)
}

/// Register a function as a filter callback.
///
/// ```rust,ignore
/// #[hookline::filter("title", accepted_args = 2)]
/// fn suffix(args: &[Value]) -> String {
///     format!("{}{}", args[0], args[1])
/// }
/// ```
#[proc_macro_attribute]
pub fn filter(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_registration(attr, item)
}

fn expand_registration(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RegistrationArgs);
    let input = parse_macro_input!(item as ItemFn);

    if let Err(err) = check_signature(&input) {
        return err.to_compile_error().into();
    }

    let fn_name = &input.sig.ident;
    let hook = &args.hook;
    let priority = args
        .priority
        .as_ref()
        .map_or_else(|| quote! { ::hookline::DEFAULT_PRIORITY }, |p| quote! { #p });
    let accepted_args = args
        .accepted_args
        .as_ref()
        .map_or_else(|| quote! { ::hookline::DEFAULT_ACCEPTED_ARGS }, |n| quote! { #n });

    let expanded = quote! {
        #input

        const _: () = {
            fn __hookline_static_callback(
                args: &[::hookline::Value],
            ) -> ::core::result::Result<::hookline::Value, ::hookline::BoxError> {
                ::hookline::IntoCallbackResult::into_callback_result(#fn_name(args))
            }

            ::hookline::inventory::submit! {
                ::hookline::StaticRegistration::new(
                    #hook,
                    #priority,
                    #accepted_args,
                    __hookline_static_callback,
                )
            }
        };
    };

    TokenStream::from(expanded)
}

fn check_signature(input: &ItemFn) -> syn::Result<()> {
    let sig = &input.sig;
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "hook callbacks run synchronously and cannot be async",
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "hook callbacks cannot be generic",
        ));
    }
    match sig.inputs.len() {
        1 if matches!(sig.inputs.first(), Some(FnArg::Typed(_))) => Ok(()),
        _ => Err(syn::Error::new_spanned(
            &sig.inputs,
            "hook callbacks must take exactly one argument: fn(args: &[Value])",
        )),
    }
}

struct RegistrationArgs {
    hook: LitStr,
    priority: Option<Expr>,
    accepted_args: Option<Expr>,
}

impl Parse for RegistrationArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut hook = None;
        let mut priority = None;
        let mut accepted_args = None;

        // Positional hook name first: #[action("init", ...)]
        if input.peek(LitStr) {
            hook = Some(input.parse::<LitStr>()?);
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "hook" => {
                    hook = Some(input.parse()?);
                }
                "priority" => {
                    priority = Some(input.parse()?);
                }
                "accepted_args" => {
                    accepted_args = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let hook = hook.ok_or_else(|| {
            syn::Error::new(
                input.span(),
                "missing hook name, e.g. #[action(\"init\")] or #[action(hook = \"init\")]",
            )
        })?;

        Ok(RegistrationArgs {
            hook,
            priority,
            accepted_args,
        })
    }
}
