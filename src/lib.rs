//! Jobreach - Campaign Composition Core
//!
//! This crate implements the draft composition workflow for job-application
//! outreach campaigns: a two-step wizard with gated transitions, a bounded
//! credit budget, a deduplicated company blacklist, and a guarded
//! asynchronous submission boundary.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
