use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // CONFIGURATION ERRORS (1-9)
    // ============================================
    /// Ledger config already stored
    AlreadyInitialized = 1,
    /// TTL or size limits out of range
    InvalidConfig = 2,

    // ============================================
    // VALIDATION ERRORS (10-29)
    // ============================================
    /// Argument count does not match the operation's arity
    WrongArgumentCount = 10,
    /// No operation with this name on the requested surface
    UnknownOperation = 11,
    /// Required key or field is empty
    EmptyField = 12,
    /// Argument is not a non-negative decimal number
    InvalidNumber = 13,
    /// Argument is not a recognised boolean spelling
    InvalidBool = 14,
    /// Argument exceeds the parse buffer
    ArgumentTooLong = 15,
    /// isSigned and signedDate disagree
    InconsistentSignature = 16,

    // ============================================
    // LOOKUP ERRORS (30-39)
    // ============================================
    /// No entry under the requested key
    NotFound = 30,

    // ============================================
    // DATA ERRORS (40-49)
    // ============================================
    /// Stored entry does not decode as the requested record
    CorruptData = 40,

    // ============================================
    // STORAGE ERRORS (50-59)
    // ============================================
    /// Encoded entry exceeds the configured size limit
    EntryTooLarge = 50,
}

/// Error taxonomy exposed to callers of the ledger.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    NotFound,
    CorruptData,
    Storage,
}

impl Error {
    pub fn kind(self) -> ErrorKind {
        match self {
            Error::AlreadyInitialized | Error::InvalidConfig => ErrorKind::Configuration,
            Error::WrongArgumentCount
            | Error::UnknownOperation
            | Error::EmptyField
            | Error::InvalidNumber
            | Error::InvalidBool
            | Error::ArgumentTooLong
            | Error::InconsistentSignature => ErrorKind::Validation,
            Error::NotFound => ErrorKind::NotFound,
            Error::CorruptData => ErrorKind::CorruptData,
            Error::EntryTooLarge => ErrorKind::Storage,
        }
    }
}
