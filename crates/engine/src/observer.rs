//! Observers notified after every reduction.

use blockfall_core::GameState;
use blockfall_types::Command;

/// Receives each new state right after the worker reduces a command.
///
/// Called on the worker task, in command order. Implementations must not
/// block; hand the state off (channel, buffer) if real work is needed.
pub trait StateObserver: Send + 'static {
    fn on_state(&mut self, command: Command, state: &GameState);
}

impl<F> StateObserver for F
where
    F: FnMut(Command, &GameState) + Send + 'static,
{
    fn on_state(&mut self, command: Command, state: &GameState) {
        self(command, state)
    }
}
