//! Credit balance adapters.

mod fixed;

pub use fixed::FixedCreditBalance;
