//! What a key press resolves to. Anything that changes session state is
//! wrapped in `Dispatch` and handed to the core controller; the rest is
//! host chrome.

use primer_core::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    Dispatch(Command),
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        Self::Dispatch(command)
    }
}
