pub mod hello_flow;

pub use hello_flow::HelloFlow;
