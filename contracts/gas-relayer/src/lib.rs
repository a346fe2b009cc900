mod abi;
pub mod contract;
pub mod events;
pub mod msg;
mod state;

pub use abi::Recipient;
