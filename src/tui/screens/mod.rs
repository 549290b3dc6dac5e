//! Screen implementations

pub mod chat;
