//! Replaying adapter for the `IdSource` port.

use std::sync::{Mutex, PoisonError};

use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::{GENERATE_METHOD, ID_GEN_PORT};
use crate::ports::IdSource;

/// Replays recorded ids from a cassette.
///
/// The requested length is ignored; ids come back exactly as recorded.
pub struct ReplayingIdSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdSource {
    /// Creates a new replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    /// Number of recorded ids not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.replayer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remaining(ID_GEN_PORT, GENERATE_METHOD)
    }
}

impl IdSource for ReplayingIdSource {
    fn generate_id(&self, _length: usize) -> String {
        let output = {
            let mut replayer = self.replayer.lock().unwrap_or_else(PoisonError::into_inner);
            let interaction = replayer.next_interaction(ID_GEN_PORT, GENERATE_METHOD);
            interaction.output.clone()
        };
        output.as_str().expect("id_gen::generate: expected string output").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(outputs: &[&str]) -> CassetteReplayer {
        let interactions = outputs
            .iter()
            .zip(0..)
            .map(|(id, seq)| Interaction {
                seq,
                port: "id_gen".into(),
                method: "generate".into(),
                input: json!({"length": 10}),
                output: json!(id),
            })
            .collect();
        let cassette = Cassette { name: "test".into(), recorded_at: Utc::now(), interactions };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replays_ids_in_order() {
        let source = ReplayingIdSource::new(make_replayer(&["id-001", "id-002"]));
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.generate_id(10), "id-001");
        assert_eq!(source.generate_id(99), "id-002");
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn replaying_past_the_end_panics() {
        let source = ReplayingIdSource::new(make_replayer(&["only"]));
        let _ = source.generate_id(10);
        let _ = source.generate_id(10);
    }
}
