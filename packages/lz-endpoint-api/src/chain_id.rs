use std::fmt::{Display, Formatter};

use cosmwasm_schema::cw_serde;

/// Chain identifier within the messaging layer's own numbering scheme.
///
/// This is not the chain's public id: e.g. public chain 43113 is messaging layer chain 10106.
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u16);

impl ChainId {
    pub const fn new(id: u16) -> Self {
        ChainId(id)
    }
}

impl From<u16> for ChainId {
    fn from(id: u16) -> Self {
        ChainId(id)
    }
}

impl From<ChainId> for u16 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
