//! Writer implementations

pub mod buffer;
pub mod console;

pub use buffer::BufferWriter;
pub use console::ConsoleWriter;

pub use crate::core::Writer;
