// Adapters layer: concrete sinks and consoles behind the domain ports.

pub mod console;
pub mod memory;
pub mod tracing_sink;

pub use console::StdoutConsole;
pub use memory::MemoryTranscript;
pub use tracing_sink::TracingSink;
