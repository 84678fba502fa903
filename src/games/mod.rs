//! Board implementations.

pub mod halma;
