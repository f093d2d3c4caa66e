pub mod passage;
pub mod reference;

pub use passage::{PassageResponse, PassageText};
pub use reference::ParsedReference;
