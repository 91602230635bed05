pub mod messenger;
pub mod registry;

pub use messenger::{MessageChannel, Messenger};
pub use registry::{AppDescriptor, Catalog};
