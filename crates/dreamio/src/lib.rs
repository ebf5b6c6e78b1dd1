//! `dreamio`: tiny IO helpers for the quest wire protocol.
//!
//! This crate intentionally avoids tokio-util's codecs and implements just what we need:
//! - bounded single-read command input (one read is one command, oversize is truncated),
//! - CRLF-terminated text block output.

pub mod line;
