//! Instruction data encoding.
//!
//! ```text
//! data = discriminator (8 bytes) || borsh(args)
//!
//! initialize: auditor_pubkey  [u8; 32]   raw bytes
//! wrap:       amount          u64        little-endian
//! unwrap:     amount          u64        little-endian
//! ```
//!
//! Discriminators are the first 8 bytes of `SHA-256("global:" || name)`.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};

use crate::error::CtwError;
use crate::schema::{schema_for, Operation};

pub const DISCRIMINATOR_LEN: usize = 8;

/// `sighash("initialize")`
pub const INITIALIZE_DISCRIMINATOR: [u8; 8] = [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed];

/// `sighash("wrap")`
pub const WRAP_DISCRIMINATOR: [u8; 8] = [0xb2, 0x28, 0x0a, 0xbd, 0xe4, 0x81, 0xba, 0x8c];

/// `sighash("unwrap")`
pub const UNWRAP_DISCRIMINATOR: [u8; 8] = [0x7e, 0xaf, 0xc6, 0x0e, 0xd4, 0x45, 0x32, 0x2c];

/// Compute the 8-byte discriminator of a global instruction.
pub fn sighash(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let hash = Sha256::new()
        .chain_update(b"global:")
        .chain_update(name.as_bytes())
        .finalize();

    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    out
}

/// ElGamal public key of the confidential-transfer auditor.
///
/// Embedded in the confidential mint at initialization and not changeable
/// through this program afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct AuditorPubkey([u8; 32]);

impl AuditorPubkey {
    pub const LEN: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for AuditorPubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for AuditorPubkey {
    type Error = CtwError;

    /// Rejects anything that is not exactly 32 bytes; no padding or
    /// truncation happens.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| {
            CtwError::InvalidArgument(format!(
                "auditor pubkey must be {} bytes, got {}",
                Self::LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

#[derive(BorshSerialize, BorshDeserialize)]
struct InitializeArgs {
    auditor_pubkey: AuditorPubkey,
}

#[derive(BorshSerialize, BorshDeserialize)]
struct AmountArgs {
    amount: u64,
}

/// Decoded instruction data of any wrap-program operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtwInstructionData {
    Initialize { auditor_pubkey: AuditorPubkey },
    Wrap { amount: u64 },
    Unwrap { amount: u64 },
}

impl CtwInstructionData {
    pub fn operation(&self) -> Operation {
        match self {
            CtwInstructionData::Initialize { .. } => Operation::Initialize,
            CtwInstructionData::Wrap { .. } => Operation::Wrap,
            CtwInstructionData::Unwrap { .. } => Operation::Unwrap,
        }
    }

    /// Serialize into the program's wire layout.
    pub fn pack(&self) -> Result<Vec<u8>, CtwError> {
        let schema = schema_for(self.operation());
        let mut data = Vec::with_capacity(schema.data_len());
        data.extend_from_slice(&schema.discriminator);

        let written = match *self {
            CtwInstructionData::Initialize { auditor_pubkey } => {
                InitializeArgs { auditor_pubkey }.serialize(&mut data)
            }
            CtwInstructionData::Wrap { amount } | CtwInstructionData::Unwrap { amount } => {
                AmountArgs { amount }.serialize(&mut data)
            }
        };
        written.map_err(|e| CtwError::InvalidInstructionData(format!("borsh: {e}")))?;

        Ok(data)
    }

    /// Decode a payload produced by [`pack`](Self::pack). Unknown
    /// discriminators, short payloads and trailing bytes are rejected.
    pub fn unpack(data: &[u8]) -> Result<Self, CtwError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(CtwError::InvalidInstructionData(format!(
                "expected at least {DISCRIMINATOR_LEN} bytes, got {}",
                data.len()
            )));
        }
        let (tag, rest) = data.split_at(DISCRIMINATOR_LEN);

        let decoded = match tag {
            t if t == INITIALIZE_DISCRIMINATOR => {
                borsh::from_slice::<InitializeArgs>(rest).map(|args| {
                    CtwInstructionData::Initialize {
                        auditor_pubkey: args.auditor_pubkey,
                    }
                })
            }
            t if t == WRAP_DISCRIMINATOR => borsh::from_slice::<AmountArgs>(rest)
                .map(|args| CtwInstructionData::Wrap { amount: args.amount }),
            t if t == UNWRAP_DISCRIMINATOR => borsh::from_slice::<AmountArgs>(rest)
                .map(|args| CtwInstructionData::Unwrap { amount: args.amount }),
            _ => {
                return Err(CtwError::InvalidInstructionData(format!(
                    "unknown discriminator {tag:02x?}"
                )))
            }
        };

        decoded.map_err(|e| CtwError::InvalidInstructionData(format!("borsh: {e}")))
    }
}
