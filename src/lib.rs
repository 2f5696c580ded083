//! Custbook - customer records on an embedded SQLite store
//!
//! This library crate exposes the binary's building blocks for integration
//! testing.

pub mod commands;
pub mod config;
pub mod demo;
pub mod display;
