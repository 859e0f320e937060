use lb_behavior::{BehaviorError, TreeParseError};
use lb_core::AgentId;
use lb_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no board is loaded")]
    BoardNotLoaded,

    #[error("no behavior trees are loaded")]
    TreesNotLoaded,

    #[error("ladybug {0} does not exist")]
    UnknownLadybug(AgentId),

    #[error("ladybug {0} has no behavior tree")]
    InactiveLadybug(AgentId),

    #[error("invalid board: {0}")]
    Grid(#[from] GridError),

    #[error("invalid behavior tree: {0}")]
    Parse(#[from] TreeParseError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

pub type GameResult<T> = Result<T, GameError>;
