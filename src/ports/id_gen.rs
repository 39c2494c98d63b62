//! ID source port for producing identifiers.

/// Produces identifiers of a requested length.
///
/// Abstracting ID production allows deterministic replay by substituting
/// recorded ids during tests and cassette playback.
pub trait IdSource: Send + Sync {
    /// Produces a new identifier; `length` is a request the source may clamp.
    fn generate_id(&self, length: usize) -> String;
}
