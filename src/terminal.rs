use std::fs::File;
use std::io::{self, IsTerminal, Write};

/// A writable destination that knows whether it is attached to an interactive terminal
pub trait Terminal: Write {
    /// Report whether writes land on a terminal device.
    ///
    /// `StatusLine` asks this exactly once, so it should be free of side effects.
    fn is_interactive(&self) -> bool;
}

impl Terminal for io::Stdout {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

impl Terminal for io::Stderr {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

/// Covers regular files, pipes and pty handles opened as files
impl Terminal for File {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

impl Terminal for Vec<u8> {
    fn is_interactive(&self) -> bool {
        false
    }
}

impl Terminal for io::Sink {
    fn is_interactive(&self) -> bool {
        false
    }
}
