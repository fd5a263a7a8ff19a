//! Core types shared across poolsnap facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility and by anything that asserts on captured log events.

pub mod schema;
