//! Port traits decoupling the domain from infrastructure.

pub mod clipboard;
pub mod clock;
pub mod store;

pub use clipboard::ClipboardPort;
pub use clock::ClockPort;
pub use store::{Mutation, StorePort};
