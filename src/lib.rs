pub mod engine;
pub mod solar;
