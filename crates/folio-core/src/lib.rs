#![cfg_attr(not(test), no_std)]

//! Host-independent state for the portfolio page behaviors.
//!
//! Every type here is a small state machine or a pure function. Browser side
//! effects go through the sink traits ([`reveal::RevealSink`],
//! [`tracker::LinkHighlighter`]) so the logic runs under `cargo test` without
//! a rendering environment.

extern crate alloc;

pub mod anchor;
pub mod config;
pub mod contact;
pub mod geometry;
pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod tracker;
pub mod typing;
