//! Live adapters backed by real randomness.

pub mod id_gen;

pub use id_gen::LiveIdSource;
