pub mod json;
pub mod text;

pub use text::{GeneratedSnippet, TextReport};
