//! Application-wide reactive state

pub mod session;
pub mod toast;
