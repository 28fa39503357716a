//! Record document decoding.

use std::io::Read;

use serde::Deserialize;
use serde_json::{Map, Value};
use sociograph_core::Result;

/// A decoded record document: the `{"result": [...]}` envelope around an
/// array of arbitrary-schema records.
///
/// The whole document is decoded into memory before iteration; there is no
/// incremental token parsing, so input size is bounded by available memory.
#[derive(Debug, Default, Deserialize)]
pub struct RecordDocument {
    #[serde(default)]
    pub result: Vec<Map<String, Value>>,
}

impl RecordDocument {
    /// Decode a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
