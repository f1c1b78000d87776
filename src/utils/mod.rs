// Shared utils

pub mod storage;

pub use storage::*;
