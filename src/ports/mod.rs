//! Port traits defining external boundaries.
//!
//! Commands reach the generator only through these traits; implementations
//! live in `src/adapters/`.

pub mod id_gen;

pub use id_gen::IdSource;
