use conquest_core::Command;

/// Outbound side of the engine: receives at most one command per turn.
pub trait Dispatch {
    fn dispatch(&mut self, turn: u32, command: Command);
}

/// Discards every command.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDispatch;

impl Dispatch for NullDispatch {
    fn dispatch(&mut self, _turn: u32, _command: Command) {}
}

/// Collects commands in dispatch order.
#[derive(Debug, Default, Clone)]
pub struct RecordingDispatch {
    pub commands: Vec<(u32, Command)>,
}

impl RecordingDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Command> {
        self.commands.last().map(|(_, c)| c)
    }
}

impl Dispatch for RecordingDispatch {
    fn dispatch(&mut self, turn: u32, command: Command) {
        self.commands.push((turn, command));
    }
}
