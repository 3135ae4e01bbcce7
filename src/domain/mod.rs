//! Domain types and the ports the session controller drives.

pub mod account;
pub mod action;
pub mod ports;
