use std::fmt;

/// Main error type for the wild-arena battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Error raised while configuring or starting a battle
    Arena(ArenaError),
    /// Error related to roster template data lookup or parsing
    RosterData(RosterDataError),
}

/// Identifies which side of a battle a roster occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSide {
    A,
    B,
}

/// Errors raised by the arena engine itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// A roster reference was absent at battle start; the battle is aborted
    /// and no outcome is recorded
    RosterMissing(RosterSide),
}

/// Errors related to roster template data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterDataError {
    /// The requested roster template was not found
    RosterNotFound(String),
    /// Template data is malformed or incomplete
    MalformedData(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Arena(err) => write!(f, "Arena error: {}", err),
            SimulationError::RosterData(err) => write!(f, "Roster data error: {}", err),
        }
    }
}

impl fmt::Display for RosterSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterSide::A => write!(f, "A"),
            RosterSide::B => write!(f, "B"),
        }
    }
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::RosterMissing(side) => {
                write!(f, "Team {} is not properly initialized for battle", side)
            }
        }
    }
}

impl fmt::Display for RosterDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterDataError::RosterNotFound(id) => write!(f, "Roster not found: {}", id),
            RosterDataError::MalformedData(details) => {
                write!(f, "Malformed roster data: {}", details)
            }
        }
    }
}

impl std::error::Error for SimulationError {}
impl std::error::Error for ArenaError {}
impl std::error::Error for RosterDataError {}

impl From<ArenaError> for SimulationError {
    fn from(err: ArenaError) -> Self {
        SimulationError::Arena(err)
    }
}

impl From<RosterDataError> for SimulationError {
    fn from(err: RosterDataError) -> Self {
        SimulationError::RosterData(err)
    }
}

/// Type alias for Results using SimulationError
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Type alias for Results using ArenaError
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Type alias for Results using RosterDataError
pub type RosterDataResult<T> = Result<T, RosterDataError>;
