//! Application layer containing the ATM's session logic.
//!
//! This module defines the `SessionController`, the state machine that
//! authenticates customers and applies their actions to the ledger.

pub mod session;
