//! Live adapter for the `IdSource` port.

use std::sync::Arc;

use crate::generator::IdGenerator;
use crate::ports::IdSource;

/// Live ID source that draws random ids from an [`IdGenerator`].
pub struct LiveIdSource {
    generator: Arc<IdGenerator>,
}

impl LiveIdSource {
    /// Creates a live source over the given generator.
    #[must_use]
    pub fn new(generator: Arc<IdGenerator>) -> Self {
        Self { generator }
    }
}

impl Default for LiveIdSource {
    fn default() -> Self {
        Self::new(Arc::new(IdGenerator::new()))
    }
}

impl IdSource for LiveIdSource {
    fn generate_id(&self, length: usize) -> String {
        self.generator.generate(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_ids_of_requested_length() {
        let source = LiveIdSource::default();
        let id1 = source.generate_id(32);
        let id2 = source.generate_id(32);

        assert_eq!(id1.len(), 32);
        assert_ne!(id1, id2);
    }

    #[test]
    fn follows_generator_alphabet_changes() {
        let generator = Arc::new(IdGenerator::new());
        let source = LiveIdSource::new(Arc::clone(&generator));
        generator.remove(&generator.alphabet().iter().filter(|&c| c != 'z').collect::<Vec<_>>());

        assert_eq!(source.generate_id(3), "zzzzz");
    }
}
