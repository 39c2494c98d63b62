//! Replaying adapters that serve recorded interactions.

pub mod id_gen;

pub use id_gen::ReplayingIdSource;
