//! Reducer abstraction.

use crate::command::Command;
use crate::error::DomainError;

/// A pure state transition function: `(state, command) -> state`.
///
/// Implementations never mutate the input state; they return a new value.
/// Returning a value equal to the input means the command was a no-op.
pub trait Reducer {
    /// The state this reducer transitions.
    type State;

    /// The command type this reducer accepts.
    type Command: Command;

    /// Computes the state that follows `state` after applying `command`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the command is rejected; the
    /// caller keeps the prior state.
    fn reduce(
        &self,
        state: &Self::State,
        command: &Self::Command,
    ) -> Result<Self::State, DomainError>;
}
