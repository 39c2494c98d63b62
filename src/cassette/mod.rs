//! Cassette format for recording and replaying generated ids.

pub mod format;
pub mod recorder;
pub mod replayer;

/// Port name under which id interactions are recorded.
pub const ID_GEN_PORT: &str = "id_gen";

/// Method name under which id interactions are recorded.
pub const GENERATE_METHOD: &str = "generate";
