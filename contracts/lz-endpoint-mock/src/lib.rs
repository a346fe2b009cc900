pub mod contract;
pub mod events;
pub mod msg;
mod state;
