pub mod parser;
pub mod processor;
pub mod types;

pub use parser::parse;
pub use processor::Dispatcher;
pub use types::Intent;
