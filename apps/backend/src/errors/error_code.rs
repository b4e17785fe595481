//! Error codes for the scorebook API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the scorebook API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rank input
    /// No rank text supplied
    EmptyInput,
    /// Wrong number of finishing positions
    WrongCount,
    /// Finishing position out of range
    OutOfRange,
    /// Finishing position repeated
    DuplicateRank,

    // Request Validation
    /// Level label not on the level track
    InvalidLevel,
    /// Unsupported table size
    InvalidTableSize,
    /// Inconsistent rule tables
    InvalidRules,
    /// Invalid player or room name
    InvalidName,
    /// Invalid seating
    InvalidSeat,
    /// Invalid room id in path
    InvalidRoomId,
    /// Invalid player id in path
    InvalidPlayerId,
    /// Phase mismatch (e.g. match already decided)
    PhaseMismatch,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,
    /// Precondition required for this operation
    PreconditionRequired,

    // Resource Not Found
    /// Room not found
    RoomNotFound,
    /// Player not found
    PlayerNotFound,
    /// No round to undo
    RoundNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Share code already exists
    JoinCodeConflict,
    /// Player already seated
    SeatTaken,
    /// Player still seated in a room
    PlayerSeated,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::WrongCount => "WRONG_COUNT",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::DuplicateRank => "DUPLICATE_RANK",

            Self::InvalidLevel => "INVALID_LEVEL",
            Self::InvalidTableSize => "INVALID_TABLE_SIZE",
            Self::InvalidRules => "INVALID_RULES",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::InvalidRoomId => "INVALID_ROOM_ID",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",
            Self::PreconditionRequired => "PRECONDITION_REQUIRED",

            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            Self::SeatTaken => "SEAT_TAKEN",
            Self::PlayerSeated => "PLAYER_SEATED",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
