use soroban_sdk::{contracttype, String};

pub const SCALE: i128 = 10_000_000; // 1e7 fixed point for amounts
pub const DECIMALS: usize = 7;

// TTL bounds in ledgers (~5s each)
pub const DEFAULT_TTL_THRESHOLD: u32 = 17_280; // ~1 day
pub const DEFAULT_TTL_EXTEND_TO: u32 = 518_400; // ~30 days
pub const MAX_TTL_EXTEND_TO: u32 = 3_110_400; // ~180 days

pub const MAX_ENTRY_SIZE: u32 = 65_536;

/// A contract and its terms, keyed by `contract_number`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractRecord {
    pub contract_number: String,
    pub description: String,
    pub owned_by: String,
    pub file_hash_key: String, // content address of the contract document
    pub number_of_parts: u32,
    pub amount: i128, // scaled by SCALE
    pub due_date: String, // opaque, caller convention
}

/// Signing status of one assignee, keyed by the decimal `user_id`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssigneeRecord {
    pub user_id: u64,
    pub is_signed: bool,
    pub signed_date: String, // empty until signed
    pub status: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Remaining TTL below which an entry is extended
    pub ttl_threshold: u32,
    /// TTL an entry is extended to
    pub ttl_extend_to: u32,
    /// Largest XDR-encoded value the store accepts, in bytes (key not counted)
    pub max_entry_size: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            ttl_threshold: DEFAULT_TTL_THRESHOLD,
            ttl_extend_to: DEFAULT_TTL_EXTEND_TO,
            max_entry_size: MAX_ENTRY_SIZE,
        }
    }
}

impl LedgerConfig {
    pub fn is_valid(&self) -> bool {
        self.ttl_extend_to > 0
            && self.ttl_extend_to <= MAX_TTL_EXTEND_TO
            && self.ttl_threshold <= self.ttl_extend_to
            && self.max_entry_size > 0
            && self.max_entry_size <= MAX_ENTRY_SIZE
    }
}

// Instance storage only. Ledger entries live in persistent storage under
// plain String keys.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
}
