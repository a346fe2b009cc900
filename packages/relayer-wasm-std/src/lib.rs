pub use crate::error::ContractError;
pub use crate::fn_ext::FnExt;

pub mod address;
pub mod counter;
pub mod error;
mod fn_ext;
pub mod permission_control;

#[cfg(feature = "derive")]
pub use relayer_wasm_std_derive::IntoContractError;
