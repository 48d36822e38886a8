use thiserror::Error;

/// Rejections surfaced to the host runtime.
///
/// The `Display` output of each variant is the message handed back to the
/// caller verbatim, so the wording is part of the host contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// The intent action is not one of the NFC discovery actions.
    #[error("No NFC tag found")]
    NoTagFound,
    /// A discovery action was delivered without a tag identifier.
    #[error("No NFC intent found")]
    NoIntent,
    #[error("Method not implemented: {0}")]
    MethodNotFound(String),
    #[error("Method '{0}' already registered")]
    DuplicateMethod(String),
}

impl PluginError {
    /// Stable code for the rejection, mirrored into the host response.
    pub fn code(&self) -> &'static str {
        match self {
            PluginError::NoTagFound => "NO_TAG_FOUND",
            PluginError::NoIntent => "NO_INTENT",
            PluginError::MethodNotFound(_) => "UNIMPLEMENTED",
            PluginError::DuplicateMethod(_) => "DUPLICATE_METHOD",
        }
    }
}
