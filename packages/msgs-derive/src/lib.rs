use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Data, DeriveInput, Expr, ExprCall, Token, Variant};

/// Generates `ensure_permissions` for an execute message enum.
///
/// Every variant must carry a `#[permission(...)]` attribute listing any of `NoPrivilege`, `Admin`
/// and `Any`, and/or `Specific(f, ...)` entries. Each distinct `Specific` name becomes a parameter of
/// `ensure_permissions`, in order of first appearance: a function
/// `FnOnce(&dyn Storage, &Msg) -> error_stack::Result<Addr, E>` resolving the whitelisted address.
///
/// ```ignore
/// #[derive(EnsurePermissions)]
/// enum ExecuteMsg {
///     #[permission(Admin)]
///     SetFee { fee: u128 },
///     #[permission(Specific(endpoint))]
///     Receive,
/// }
///
/// let msg = msg.ensure_permissions(deps.storage, &info.sender, find_endpoint)?;
/// ```
#[proc_macro_derive(EnsurePermissions, attributes(permission))]
pub fn derive_ensure_permissions(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    build_ensure_permissions(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct Permissions {
    general: Vec<Ident>,
    specific: Vec<Ident>,
}

fn build_ensure_permissions(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "EnsurePermissions can only be derived for enums",
        ));
    };

    let ident = &input.ident;
    let variants = data
        .variants
        .iter()
        .map(|variant| Ok((variant.ident.clone(), parse_permissions(variant)?)))
        .collect::<syn::Result<Vec<_>>>()?;

    let mut whitelist_fns: Vec<Ident> = Vec::new();
    for specific in variants.iter().flat_map(|(_, perms)| perms.specific.iter()) {
        if !whitelist_fns.contains(specific) {
            whitelist_fns.push(specific.clone());
        }
    }

    let fn_types: Vec<Ident> = (0..whitelist_fns.len())
        .map(|i| format_ident!("F{}", i))
        .collect();
    let err_types: Vec<Ident> = (0..whitelist_fns.len())
        .map(|i| format_ident!("E{}", i))
        .collect();

    let general_arms = variants.iter().map(|(variant, perms)| {
        let general = &perms.general;
        quote! {
            #ident::#variant { .. } => {
                _FlagSet::<_Permission>::default() #(| _FlagSet::from(_Permission::#general))*
            }
        }
    });

    let whitelist_arms = variants.iter().map(|(variant, perms)| {
        let specific = &perms.specific;
        quote! {
            #ident::#variant { .. } => vec![
                #(
                    #specific(storage, &self).change_context(
                        _permission_control::Error::WhitelistNotFound { sender: sender.clone() }
                    )?
                ),*
            ],
        }
    });

    Ok(quote! {
        impl #ident {
            pub fn ensure_permissions<#(#fn_types,)* #(#err_types,)*>(
                self,
                storage: &dyn ::cosmwasm_std::Storage,
                sender: &::cosmwasm_std::Addr,
                #(#whitelist_fns: #fn_types,)*
            ) -> ::core::result::Result<Self, ::error_stack::Report<::relayer_wasm_std::permission_control::Error>>
            where
                #(#fn_types: FnOnce(&dyn ::cosmwasm_std::Storage, &#ident) -> ::error_stack::Result<::cosmwasm_std::Addr, #err_types>,)*
                #(#err_types: ::error_stack::Context,)*
            {
                use ::error_stack::ResultExt as _;
                use ::relayer_wasm_std::permission_control as _permission_control;
                use ::relayer_wasm_std::permission_control::FlagSet as _FlagSet;
                use ::relayer_wasm_std::permission_control::Permission as _Permission;

                let general: _FlagSet<_Permission> = match &self {
                    #(#general_arms)*
                };

                if general.contains(_Permission::Any) {
                    return Ok(self);
                }

                let role = _permission_control::sender_role(storage, sender).change_context(
                    _permission_control::Error::PermissionDenied {
                        expected: general,
                        actual: _Permission::NoPrivilege.into(),
                    },
                )?;

                if !(general & role).is_empty() {
                    return Ok(self);
                }

                let whitelist: Vec<::cosmwasm_std::Addr> = match &self {
                    #(#whitelist_arms)*
                };

                if whitelist.contains(sender) {
                    return Ok(self);
                }

                if whitelist.is_empty() {
                    Err(::error_stack::report!(_permission_control::Error::PermissionDenied {
                        expected: general,
                        actual: role,
                    }))
                } else {
                    Err(::error_stack::report!(_permission_control::Error::AddressNotWhitelisted {
                        expected: whitelist,
                        actual: sender.clone(),
                    }))
                }
            }
        }
    })
}

fn parse_permissions(variant: &Variant) -> syn::Result<Permissions> {
    let attr = variant
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("permission"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &variant.ident,
                "every variant needs a #[permission(...)] attribute",
            )
        })?;

    let mut permissions = Permissions::default();
    for expr in attr.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)? {
        match expr {
            Expr::Path(path) => permissions.general.push(path.path.require_ident()?.clone()),
            Expr::Call(call) => permissions.specific.extend(parse_specific(&call)?),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected a permission or Specific(..)",
                ))
            }
        }
    }

    Ok(permissions)
}

fn parse_specific(call: &ExprCall) -> syn::Result<Vec<Ident>> {
    match call.func.as_ref() {
        Expr::Path(path) if path.path.is_ident("Specific") => {}
        other => return Err(syn::Error::new_spanned(other, "expected Specific(..)")),
    }

    call.args
        .iter()
        .map(|arg| match arg {
            Expr::Path(path) => path.path.require_ident().cloned(),
            other => Err(syn::Error::new_spanned(
                other,
                "Specific(..) takes function names",
            )),
        })
        .collect()
}
