use cosmwasm_std::{Addr, Event, HexBinary};
use lz_endpoint_api::ChainId;

pub enum EndpointEvent {
    DestLzEndpointSet {
        destination: Addr,
        endpoint: Addr,
    },
    PacketSent {
        dst_chain_id: ChainId,
        dst_address: Addr,
        nonce: u64,
    },
    PacketReceived {
        src_chain_id: ChainId,
        src_address: HexBinary,
        dst_address: Addr,
        nonce: u64,
    },
    PayloadStored {
        src_chain_id: ChainId,
        src_address: HexBinary,
        dst_address: Addr,
        nonce: u64,
        payload: HexBinary,
        reason: String,
    },
    PayloadCleared {
        src_chain_id: ChainId,
        src_address: HexBinary,
    },
}

impl From<EndpointEvent> for Event {
    fn from(event: EndpointEvent) -> Self {
        match event {
            EndpointEvent::DestLzEndpointSet {
                destination,
                endpoint,
            } => Event::new("dest_lz_endpoint_set")
                .add_attribute("destination", destination)
                .add_attribute("endpoint", endpoint),
            EndpointEvent::PacketSent {
                dst_chain_id,
                dst_address,
                nonce,
            } => Event::new("packet_sent")
                .add_attribute("dst_chain_id", dst_chain_id.to_string())
                .add_attribute("dst_address", dst_address)
                .add_attribute("nonce", nonce.to_string()),
            EndpointEvent::PacketReceived {
                src_chain_id,
                src_address,
                dst_address,
                nonce,
            } => Event::new("packet_received")
                .add_attribute("src_chain_id", src_chain_id.to_string())
                .add_attribute("src_address", src_address.to_hex())
                .add_attribute("dst_address", dst_address)
                .add_attribute("nonce", nonce.to_string()),
            EndpointEvent::PayloadStored {
                src_chain_id,
                src_address,
                dst_address,
                nonce,
                payload,
                reason,
            } => Event::new("payload_stored")
                .add_attribute("src_chain_id", src_chain_id.to_string())
                .add_attribute("src_address", src_address.to_hex())
                .add_attribute("dst_address", dst_address)
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("payload", payload.to_hex())
                .add_attribute("reason", reason),
            EndpointEvent::PayloadCleared {
                src_chain_id,
                src_address,
            } => Event::new("payload_cleared")
                .add_attribute("src_chain_id", src_chain_id.to_string())
                .add_attribute("src_address", src_address.to_hex()),
        }
    }
}
