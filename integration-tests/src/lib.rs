pub mod contract;
pub mod gas_relayer_contract;
pub mod lz_endpoint_contract;
pub mod protocol;
