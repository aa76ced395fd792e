#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! # Platformer Runtime
//!
//! Headless driver for the platformer environment. It loads or generates a
//! level, reads an optional JSON config, and plays episodes with a seeded
//! random policy, logging one summary per episode.
//!
//! The binary (`runtime_main`) is a thin wrapper around [`cli::Args`] and
//! [`rollout::run`]; both are exposed here so they can be tested without
//! spawning a process.

pub mod cli;
pub mod rollout;
