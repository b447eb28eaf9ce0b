//! Command handlers composing the domain with the ports.

pub mod campaign;
