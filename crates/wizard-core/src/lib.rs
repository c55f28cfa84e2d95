//! Core types and definitions for the wizard duel simulation.
//!
//! This crate defines the vocabulary shared by the engine and its hosts:
//! components, commands, state snapshots, events, configuration, errors
//! and constants. It has no dependency on any AR, rendering or UI framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod orientation;
pub mod state;
pub mod types;
