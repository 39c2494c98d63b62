//! Service context bundling the port trait objects for a command run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::adapters::live::LiveIdSource;
use crate::adapters::recording::RecordingIdSource;
use crate::adapters::replaying::ReplayingIdSource;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::Error;
use crate::generator::IdGenerator;
use crate::ports::IdSource;

/// Bundles the ports a command needs.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording).
pub struct ServiceContext {
    /// Source of ids.
    pub id_gen: Box<dyn IdSource>,
    /// Cassette path and the recorder shared with the recording adapter.
    recorder: Option<(PathBuf, Arc<Mutex<CassetteRecorder>>)>,
}

impl ServiceContext {
    /// Creates a live context drawing random ids from `generator`.
    #[must_use]
    pub fn live(generator: Arc<IdGenerator>) -> Self {
        Self { id_gen: Box::new(LiveIdSource::new(generator)), recorder: None }
    }

    /// Creates a recording context that captures every id produced.
    ///
    /// Ids are drawn from `generator` as in [`ServiceContext::live`]; call
    /// [`ServiceContext::finish`] to write the cassette to `path`. This is the
    /// mechanism behind the `GENID_RECORD` environment variable.
    #[must_use]
    pub fn recording(generator: Arc<IdGenerator>, path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "genid-session")));
        let inner = Box::new(LiveIdSource::new(generator));
        Self {
            id_gen: Box::new(RecordingIdSource::new(inner, Arc::clone(&recorder))),
            recorder: Some((path.to_path_buf(), recorder)),
        }
    }

    /// Creates a replaying context serving ids from a cassette.
    #[must_use]
    pub fn replaying(replayer: CassetteReplayer) -> Self {
        Self { id_gen: Box::new(ReplayingIdSource::new(replayer)), recorder: None }
    }

    /// Finishes the run, writing the cassette if this context was recording.
    ///
    /// Returns the cassette path when one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, Error> {
        let Self { id_gen, recorder } = self;
        // Drop the adapter first to release its reference to the recorder.
        drop(id_gen);

        let Some((path, recorder)) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| Error::CassetteIo {
                path: path.clone(),
                source: std::io::Error::other("recorder still has references"),
            })?
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        let recorded = recorder.len();
        let path = recorder.finish().map_err(|source| Error::CassetteIo { path, source })?;
        info!(path = %path.display(), recorded, "cassette written");
        Ok(Some(path))
    }
}
