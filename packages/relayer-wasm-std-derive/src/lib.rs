use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Implements `From<T> for relayer_wasm_std::error::ContractError` by wrapping the error in a report.
///
/// # Examples
///
/// ```
/// use relayer_wasm_std::error::ContractError;
/// use relayer_wasm_std::IntoContractError;
///
/// #[derive(thiserror::Error, Debug, IntoContractError)]
/// enum Error {
///     #[error("relay failed")]
///     Relay,
/// }
///
/// let err = ContractError::from(Error::Relay);
/// assert_eq!(err.to_string(), "relay failed");
/// ```
#[proc_macro_derive(IntoContractError)]
pub fn into_contract_error_derive(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    quote! {
        impl From<#name> for ::relayer_wasm_std::error::ContractError {
            fn from(error: #name) -> Self {
                ::error_stack::report!(error).into()
            }
        }
    }
    .into()
}
