//! Recording adapter for the `IdSource` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::{GENERATE_METHOD, ID_GEN_PORT};
use crate::ports::IdSource;

/// Records produced ids while delegating to an inner source.
pub struct RecordingIdSource {
    inner: Box<dyn IdSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIdSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn IdSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl IdSource for RecordingIdSource {
    fn generate_id(&self, length: usize) -> String {
        let result = self.inner.generate_id(length);
        record_interaction(
            &self.recorder,
            ID_GEN_PORT,
            GENERATE_METHOD,
            json!({ "length": length }),
            json!(result),
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveIdSource;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_generate_interaction() {
        let dir = std::env::temp_dir().join("genid_rec_id_gen_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("id_gen.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));

        // Scope the adapter so it's dropped before we try to unwrap
        let id = {
            let source =
                RecordingIdSource::new(Box::new(LiveIdSource::default()), Arc::clone(&recorder));
            source.generate_id(7)
        };
        assert_eq!(id.len(), 7);

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].port, "id_gen");
        assert_eq!(cassette.interactions[0].method, "generate");
        assert_eq!(cassette.interactions[0].input, json!({"length": 7}));
        assert_eq!(cassette.interactions[0].output, json!(id));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
