//! Browser-side utilities

pub mod constants;
pub mod dom;
pub mod storage;
