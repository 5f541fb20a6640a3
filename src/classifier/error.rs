use thiserror::Error;

/// Errors raised while scanning push-data inside a script
///
/// Never surfaced to callers: the classifier converts every occurrence into
/// an `Unknown` classification.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptError {
    /// The byte at this offset is not an acceptable push opcode, or its
    /// declared length field runs past the end of the script
    #[error("Malformed push at offset {0}")]
    MalformedPush(usize),
}
