use crate::domain::model::{Emission, LogLevel, RunInfo};
use crate::domain::ports::{Console, LogSink};
use crate::utils::error::{FlowError, Result};
use std::sync::{Arc, Mutex};

/// Records log records and console lines into one ordered transcript.
///
/// Clones share the same transcript, so one handle can be given to the
/// runner as both sink and console and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryTranscript {
    emissions: Arc<Mutex<Vec<Emission>>>,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.emissions.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut e) = self.emissions.lock() {
            e.clear();
        }
    }

    fn push(&self, emission: Emission) -> Result<()> {
        let mut emissions = self
            .emissions
            .lock()
            .map_err(|_| FlowError::IoError(std::io::Error::other("transcript lock poisoned")))?;
        emissions.push(emission);
        Ok(())
    }
}

impl LogSink for MemoryTranscript {
    fn log(&self, _run: &RunInfo, level: LogLevel, message: &str) -> Result<()> {
        self.push(Emission::Log {
            level,
            message: message.to_string(),
        })
    }
}

impl Console for MemoryTranscript {
    fn print(&self, line: &str) -> Result<()> {
        self.push(Emission::Print(line.to_string()))
    }
}
