use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn print(&self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        handle.flush()?;
        Ok(())
    }
}
