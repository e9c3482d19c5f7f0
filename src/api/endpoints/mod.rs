//! API endpoint handlers.

pub mod contact;
pub mod health;
pub mod process;
