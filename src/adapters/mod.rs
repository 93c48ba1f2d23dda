//! Infrastructure adapters. Implement the ports.
//!
//! LLM HTTP client, output parsing, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
