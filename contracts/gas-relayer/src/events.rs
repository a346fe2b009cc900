use cosmwasm_std::{Addr, Event, HexBinary, Uint128};
use lz_endpoint_api::ChainId;

use crate::Recipient;

pub enum RelayerEvent {
    GasSent {
        relay_index: u64,
        sender: Addr,
        destination_chain_id: ChainId,
        recipient: Recipient,
        amount_forwarded: Uint128,
        protocol_fee: Uint128,
    },
    GasReceived {
        recipient: Addr,
        src_chain_id: ChainId,
        amount: Uint128,
    },
    MessageFailed {
        src_chain_id: ChainId,
        src_address: HexBinary,
        nonce: u64,
        payload: HexBinary,
        reason: String,
    },
    RetryMessageSuccess {
        src_chain_id: ChainId,
        src_address: HexBinary,
        nonce: u64,
        payload_hash: HexBinary,
    },
    TrustedRemoteSet {
        chain_id: ChainId,
        path: HexBinary,
    },
    TrustedRemoteRemoved {
        chain_id: ChainId,
    },
    ProtocolFeeSet {
        protocol_fee: Uint128,
    },
    DeliveryAmountSet {
        delivery_amount: Uint128,
    },
    OutboundPolicySet {
        require_trusted_destination: bool,
    },
    ToppedUp {
        sender: Addr,
        amount: Uint128,
    },
    Withdrawn {
        recipient: Addr,
        amount: Uint128,
    },
    AdminUpdated {
        new_admin: Addr,
    },
}

impl From<RelayerEvent> for Event {
    fn from(event: RelayerEvent) -> Self {
        match event {
            RelayerEvent::GasSent {
                relay_index,
                sender,
                destination_chain_id,
                recipient,
                amount_forwarded,
                protocol_fee,
            } => Event::new("gas_sent")
                .add_attribute("relay_index", relay_index.to_string())
                .add_attribute("sender", sender)
                .add_attribute("destination_chain_id", destination_chain_id.to_string())
                .add_attribute("recipient", recipient.to_string())
                .add_attribute("amount_forwarded", amount_forwarded)
                .add_attribute("protocol_fee", protocol_fee),
            RelayerEvent::GasReceived {
                recipient,
                src_chain_id,
                amount,
            } => Event::new("gas_received")
                .add_attribute("recipient", recipient)
                .add_attribute("src_chain_id", src_chain_id.to_string())
                .add_attribute("amount", amount),
            RelayerEvent::MessageFailed {
                src_chain_id,
                src_address,
                nonce,
                payload,
                reason,
            } => Event::new("message_failed")
                .add_attribute("src_chain_id", src_chain_id.to_string())
                .add_attribute("src_address", src_address.to_hex())
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("payload", payload.to_hex())
                .add_attribute("reason", reason),
            RelayerEvent::RetryMessageSuccess {
                src_chain_id,
                src_address,
                nonce,
                payload_hash,
            } => Event::new("retry_message_success")
                .add_attribute("src_chain_id", src_chain_id.to_string())
                .add_attribute("src_address", src_address.to_hex())
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("payload_hash", payload_hash.to_hex()),
            RelayerEvent::TrustedRemoteSet { chain_id, path } => Event::new("trusted_remote_set")
                .add_attribute("chain_id", chain_id.to_string())
                .add_attribute("path", path.to_hex()),
            RelayerEvent::TrustedRemoteRemoved { chain_id } => {
                Event::new("trusted_remote_removed").add_attribute("chain_id", chain_id.to_string())
            }
            RelayerEvent::ProtocolFeeSet { protocol_fee } => {
                Event::new("protocol_fee_set").add_attribute("protocol_fee", protocol_fee)
            }
            RelayerEvent::DeliveryAmountSet { delivery_amount } => {
                Event::new("delivery_amount_set").add_attribute("delivery_amount", delivery_amount)
            }
            RelayerEvent::OutboundPolicySet {
                require_trusted_destination,
            } => Event::new("outbound_policy_set").add_attribute(
                "require_trusted_destination",
                require_trusted_destination.to_string(),
            ),
            RelayerEvent::ToppedUp { sender, amount } => Event::new("topped_up")
                .add_attribute("sender", sender)
                .add_attribute("amount", amount),
            RelayerEvent::Withdrawn { recipient, amount } => Event::new("withdrawn")
                .add_attribute("recipient", recipient)
                .add_attribute("amount", amount),
            RelayerEvent::AdminUpdated { new_admin } => {
                Event::new("admin_updated").add_attribute("new_admin", new_admin)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockApi;

    use super::*;

    #[test]
    fn gas_sent_carries_destination_recipient_and_forwarded_amount() {
        let recipient = Recipient::try_from([0xab; 20].as_slice()).unwrap();
        let event: Event = RelayerEvent::GasSent {
            relay_index: 1,
            sender: MockApi::default().addr_make("sender"),
            destination_chain_id: ChainId::new(10106),
            recipient,
            amount_forwarded: Uint128::new(1_032),
            protocol_fee: Uint128::new(50_000_000),
        }
        .into();

        assert_eq!(event.ty, "gas_sent");

        let attribute = |key: &str| {
            event
                .attributes
                .iter()
                .find(|attr| attr.key == key)
                .map(|attr| attr.value.clone())
        };
        assert_eq!(attribute("relay_index"), Some("1".to_string()));
        assert_eq!(attribute("destination_chain_id"), Some("10106".to_string()));
        assert_eq!(attribute("recipient"), Some("ab".repeat(20)));
        assert_eq!(attribute("amount_forwarded"), Some("1032".to_string()));
        assert_eq!(attribute("protocol_fee"), Some("50000000".to_string()));
    }

    #[test]
    fn gas_received_carries_recipient_and_source_chain() {
        let recipient = MockApi::default().addr_make("recipient");
        let event: Event = RelayerEvent::GasReceived {
            recipient: recipient.clone(),
            src_chain_id: ChainId::new(10102),
            amount: Uint128::new(7),
        }
        .into();

        assert_eq!(
            event,
            Event::new("gas_received")
                .add_attribute("recipient", recipient)
                .add_attribute("src_chain_id", "10102")
                .add_attribute("amount", "7")
        );
    }
}
