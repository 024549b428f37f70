use soroban_sdk::contracterror;

/// Contract error codes.
///
/// Codes are part of the public interface: clients match on the numeric value,
/// so existing variants must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SplitError {
    NotAuthorized = 100,
    InvalidWorkId = 101,
    InvalidSplit = 102,
    InvalidShare = 103,
    InvalidAmount = 104,
    InsufficientFunds = 105,
    SplitAlreadyDefined = 106,
    SplitNotFound = 107,
    InvalidPrincipal = 108,
    MaxSplitsExceeded = 109,
    DuplicateRecipient = 110,
    Paused = 111,
    // Reserved.
    InvalidUpdate = 112,
    // Reserved.
    UpdateNotAllowed = 113,
    InvalidPauseState = 114,
    InvalidBasisPoints = 115,
    ArithmeticOverflow = 116,
    ArithmeticUnderflow = 117,
    InvalidMinShare = 118,
    InvalidMaxShare = 119,
    // Reserved.
    OwnerNotSet = 120,
    AlreadyInitialized = 121,
    NotInitialized = 122,
}
