use tracing::warn;

use crate::address_block::AddressBlock;

/// Immutable reference collection of address blocks.
///
/// Built once at startup from configured CIDR strings and never mutated
/// afterwards, so it is safe to share across classifications without
/// coordination.
#[derive(Debug, Clone)]
pub struct NetworkSet {
    blocks: Vec<AddressBlock>,
}

impl NetworkSet {
    /// Parse each CIDR entry into a block. An entry that fails to parse is
    /// logged and skipped; construction itself never fails.
    pub fn from_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Self {
        let mut blocks = Vec::with_capacity(cidrs.len());

        for cidr in cidrs {
            match AddressBlock::parse(cidr.as_ref()) {
                Ok(block) => blocks.push(block),
                Err(e) => {
                    warn!(cidr = %cidr.as_ref(), error = %e, "skipping unparseable reference network")
                }
            }
        }

        Self { blocks }
    }

    /// True when any member block contains `address`'s network value.
    pub fn contains(&self, address: &AddressBlock) -> bool {
        self.blocks.iter().any(|block| block.contains(address))
    }

    pub fn blocks(&self) -> &[AddressBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
