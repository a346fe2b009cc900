use std::fmt::{Display, Formatter};

use alloy_primitives::Address;
use alloy_sol_types::{sol, SolValue};
use cosmwasm_std::HexBinary;
use error_stack::{ensure, Report, ResultExt};

sol! {
    /// Payload of a relay message, encoded as `abi.encode(address recipient)`.
    struct GasDrop {
        address recipient;
    }
}

const ADDRESS_LEN: usize = 20;
const PAYLOAD_LEN: usize = 32;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("recipient must be a 20-byte address, got {0} bytes")]
    InvalidRecipientLength(usize),
    #[error("payload must be exactly {PAYLOAD_LEN} bytes, got {0}")]
    InvalidPayloadLength(usize),
    #[error("payload is not an abi encoded address")]
    AbiDecodeFailed,
}

/// Recipient of relayed gas, in the 20-byte address form carried by relay payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipient(Address);

impl Recipient {
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn abi_encode(&self) -> HexBinary {
        GasDrop { recipient: self.0 }.abi_encode_params().into()
    }

    /// Strict decoding: exactly one word, with a zero-padded address in it.
    pub fn abi_decode(payload: &[u8]) -> Result<Self, Report<Error>> {
        ensure!(
            payload.len() == PAYLOAD_LEN,
            Error::InvalidPayloadLength(payload.len())
        );

        GasDrop::abi_decode_params(payload, true)
            .change_context(Error::AbiDecodeFailed)
            .map(|decoded| Recipient(decoded.recipient))
    }
}

impl TryFrom<&[u8]> for Recipient {
    type Error = Report<Error>;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        ensure!(
            bytes.len() == ADDRESS_LEN,
            Error::InvalidRecipientLength(bytes.len())
        );

        Ok(Recipient(Address::from_slice(bytes)))
    }
}

impl From<Recipient> for HexBinary {
    fn from(recipient: Recipient) -> Self {
        recipient.as_slice().into()
    }
}

impl Display for Recipient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", HexBinary::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use assert_ok::assert_ok;
    use relayer_wasm_std::assert_err_contains;

    use super::*;

    fn recipient() -> Recipient {
        assert_ok!(Recipient::try_from(
            hex::decode("ca9e2d3a0bb4c3d8ae2f4b1a5e6f70812233aabb")
                .unwrap()
                .as_slice()
        ))
    }

    #[test]
    fn payload_is_the_abi_encoded_address() {
        let payload = recipient().abi_encode();

        assert_eq!(
            payload.to_hex(),
            "000000000000000000000000ca9e2d3a0bb4c3d8ae2f4b1a5e6f70812233aabb"
        );
        assert_eq!(assert_ok!(Recipient::abi_decode(&payload)), recipient());
    }

    #[test]
    fn recipient_must_have_twenty_bytes() {
        assert_err_contains!(
            Recipient::try_from([1u8; 32].as_slice()),
            Error,
            Error::InvalidRecipientLength(32)
        );
        assert_err_contains!(
            Recipient::try_from([].as_slice()),
            Error,
            Error::InvalidRecipientLength(0)
        );
    }

    #[test]
    fn payload_with_wrong_length_is_rejected() {
        let mut payload = recipient().abi_encode().to_vec();
        payload.push(0);

        assert_err_contains!(
            Recipient::abi_decode(&payload),
            Error,
            Error::InvalidPayloadLength(33)
        );
        assert_err_contains!(
            Recipient::abi_decode(&payload[..20]),
            Error,
            Error::InvalidPayloadLength(20)
        );
    }

    #[test]
    fn payload_with_dirty_padding_is_rejected() {
        let mut payload = recipient().abi_encode().to_vec();
        payload[0] = 1;

        assert_err_contains!(
            Recipient::abi_decode(&payload),
            Error,
            Error::AbiDecodeFailed
        );
    }

    #[test]
    fn recipient_displays_as_hex() {
        assert_eq!(
            recipient().to_string(),
            "ca9e2d3a0bb4c3d8ae2f4b1a5e6f70812233aabb"
        );
    }
}
