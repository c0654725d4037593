pub mod error;
pub mod parse;
pub mod validate;
pub mod visit;
pub mod wasm;
