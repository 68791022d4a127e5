//! IPv4 CIDR address blocks and the conversions around them.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{error, warn};

use crate::errors::DomainError;

pub const FULL_PREFIX: u8 = 32;

/// Contiguous IPv4 range expressed as network/broadcast/prefix.
///
/// Immutable once constructed. `network <= broadcast` always holds, and a
/// /32 block has `network == broadcast`.
#[derive(Debug, Clone, Copy)]
pub struct AddressBlock {
    network: u32,
    broadcast: u32,
    prefix: u8,
    mask: u32,
}

impl AddressBlock {
    /// Parse `"a.b.c.d"` or `"a.b.c.d/len"`; a missing prefix length means
    /// /32. The network address is normalized under the derived mask.
    ///
    /// Dotted-quad parsing degrades rather than fails (see [`quad_to_u32`]);
    /// only a malformed or out-of-range prefix length is fatal.
    pub fn parse(addr: &str) -> Result<Self, DomainError> {
        let addr = addr.trim();
        let (quad, prefix) = match addr.split_once('/') {
            None => (addr, FULL_PREFIX),
            Some((quad, len)) => {
                let len = len.trim().parse::<u8>().map_err(|_| {
                    DomainError::InvalidAddress(format!("bad prefix length in {addr}"))
                })?;
                if len > FULL_PREFIX {
                    return Err(DomainError::InvalidAddress(format!(
                        "prefix length {len} exceeds {FULL_PREFIX}"
                    )));
                }
                (quad.trim(), len)
            }
        };

        let mask = prefix_mask(prefix);
        let network = quad_to_u32(quad) & mask;
        let span = if prefix == 0 {
            u32::MAX
        } else {
            (1u32 << (FULL_PREFIX - prefix)) - 1
        };

        Ok(Self {
            network,
            broadcast: network + span,
            prefix,
            mask,
        })
    }

    /// Build from an explicit network/broadcast pair. Fails when
    /// `network > broadcast`. The prefix length is inferred from the range
    /// size; a size that is not a power of two has no exact CIDR form and
    /// truncates to the next shorter prefix.
    pub fn from_range(network: u32, broadcast: u32) -> Result<Self, DomainError> {
        if network > broadcast {
            return Err(DomainError::InvalidAddress(format!(
                "network {} is higher than broadcast {}",
                u32_to_quad(network),
                u32_to_quad(broadcast)
            )));
        }

        let prefix = if network == broadcast {
            FULL_PREFIX
        } else {
            let size = u64::from(broadcast - network) + 1;
            FULL_PREFIX - size.ilog2() as u8
        };

        Ok(Self {
            network,
            broadcast,
            prefix,
            mask: prefix_mask(prefix),
        })
    }

    /// Build from a dotted-quad address and a dotted-quad subnet mask:
    /// `network = address & mask`, `broadcast = network | !mask`.
    pub fn from_mask(addr_quad: &str, mask_quad: &str) -> Result<Self, DomainError> {
        let addr = Self::parse(addr_quad)?;
        let mask = Self::parse(mask_quad)?;

        let network = addr.network() & mask.network();
        let broadcast = network | !mask.network();

        Self::from_range(network, broadcast)
    }

    /// Single address given as a hexadecimal string.
    pub fn parse_hex(network_hex: &str) -> Result<Self, DomainError> {
        let addr = hex_to_u32(network_hex)?;
        Self::from_range(addr, addr)
    }

    /// Network/broadcast pair given as hexadecimal strings.
    pub fn parse_hex_range(network_hex: &str, broadcast_hex: &str) -> Result<Self, DomainError> {
        Self::from_range(hex_to_u32(network_hex)?, hex_to_u32(broadcast_hex)?)
    }

    pub fn network(&self) -> u32 {
        self.network
    }

    pub fn broadcast(&self) -> u32 {
        self.broadcast
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Containment test against a raw address value.
    ///
    /// A block whose network address is all-zero under its own mask matches
    /// every address. Callers relying on that behavior should read the test
    /// flagging it first.
    pub fn contains_addr(&self, addr: u32) -> bool {
        (self.mask & self.network) == 0 || (addr & self.mask) == self.network
    }

    /// True when `other`'s network address falls inside this block.
    pub fn contains(&self, other: &AddressBlock) -> bool {
        self.contains_addr(other.network)
    }
}

/// Textual form: dotted quad of the network address, with `/len` appended
/// only for prefix lengths strictly between 0 and 32.
impl fmt::Display for AddressBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u32_to_quad(self.network))?;
        if self.prefix > 0 && self.prefix < FULL_PREFIX {
            write!(f, "/{}", self.prefix)?;
        }
        Ok(())
    }
}

// Identity follows the textual form: network plus prefix. Broadcast and
// mask are derived and carry no extra information.
impl PartialEq for AddressBlock {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network && self.prefix == other.prefix
    }
}

impl Eq for AddressBlock {}

impl Hash for AddressBlock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.network.hash(state);
        self.prefix.hash(state);
    }
}

impl Ord for AddressBlock {
    fn cmp(&self, other: &Self) -> Ordering {
        self.network
            .cmp(&other.network)
            .then(self.prefix.cmp(&other.prefix))
    }
}

impl PartialOrd for AddressBlock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mask with the top `prefix` bits set; zero for a zero-length prefix.
pub fn prefix_mask(prefix: u8) -> u32 {
    debug_assert!(prefix <= FULL_PREFIX);
    if prefix == 0 {
        0
    } else {
        u32::MAX << (FULL_PREFIX - prefix)
    }
}

/// Dotted quad to its 32-bit value, most significant octet first.
///
/// Degrades instead of failing: a non-numeric or out-of-range octet counts
/// as 0 (logged at warn), and anything that is not four dot-separated parts
/// parses as address 0 (logged at error).
pub fn quad_to_u32(dotted_quad: &str) -> u32 {
    let parts: Vec<&str> = dotted_quad.split('.').collect();
    if parts.len() != 4 {
        error!(input = %dotted_quad, "invalid dotted quad, expected four octets");
        return 0;
    }

    let mut addr = 0u32;
    for part in parts {
        let octet = match part.trim().parse::<u32>() {
            Ok(value) if value <= 255 => value,
            _ => {
                warn!(octet = %part, input = %dotted_quad, "octet out of range, using 0");
                0
            }
        };
        addr = (addr << 8) | octet;
    }

    addr
}

/// 32-bit value to its dotted-quad form. Exact inverse of [`quad_to_u32`]
/// for every representable value.
pub fn u32_to_quad(addr: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        addr >> 24,
        (addr >> 16) & 0xFF,
        (addr >> 8) & 0xFF,
        addr & 0xFF
    )
}

/// Hexadecimal string (no `0x` prefix) to its 32-bit value.
pub fn hex_to_u32(hex: &str) -> Result<u32, DomainError> {
    u32::from_str_radix(hex.trim(), 16)
        .map_err(|_| DomainError::InvalidAddress(format!("invalid hex address: {hex}")))
}

/// 32-bit value to lowercase hex, without leading zeros.
pub fn u32_to_hex(addr: u32) -> String {
    format!("{addr:x}")
}
