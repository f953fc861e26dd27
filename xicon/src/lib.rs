pub mod command;
mod error;
pub mod mipmap;
pub mod task;

pub use error::ResizeError;
