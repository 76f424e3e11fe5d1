//! Stakepool Controls - withdraw, exit and claim controls for staking pools.
//!
//! This library provides:
//! - Exact decimal token amounts backed by arbitrary-precision integers
//! - A keystroke filter for amount fields
//! - Amount validation and per-flow status derivation
//! - Flow components that turn key events into pool actions
//! - Static pool metadata

pub mod action;
pub mod components;
pub mod config;
pub mod domain;
pub mod infra;
