//! Binary Reader/Writer Module
//!
//! Little-endian cursor codec for account layouts, with the 32-byte address as
//! a native primitive.

pub mod reader;
pub mod writer;

pub use reader::{Reader, ADDRESS_LEN};
pub use writer::Writer;
