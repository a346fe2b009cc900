mod chain_id;
pub mod client;
pub mod msg;
pub mod path;

pub use chain_id::ChainId;
pub use client::Client;
pub use msg::{FeesResponse, LzReceiveMsg, LzReceiverMsg};
