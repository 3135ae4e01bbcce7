//! Outer adapters: the console terminal and CSV seed/report files.

pub mod console;
pub mod csv;
