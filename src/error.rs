use thiserror::Error;

pub type Result<T = (), E = RegistryError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("No registry key location was given")]
    MissingLocation,

    #[error("No value names were given")]
    MissingNames,

    #[error("Unknown registry value type: {0}")]
    UnknownValueType(String),

    #[error("Got {names} value names but {values} values")]
    LengthMismatch { names: usize, values: usize },

    #[error("Failed to open registry key {location}: {source}")]
    OpenFailed {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write registry value {name} (index {index}): {source}")]
    WriteFailed {
        name: String,
        index: usize,
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// Stable short tag for the error kind, suitable for reports and matching by string
    pub fn kind_tag(&self) -> &'static str {
        match self {
            Self::MissingLocation => "missing_location",
            Self::MissingNames => "missing_names",
            Self::UnknownValueType(_) => "unknown_value_type",
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::OpenFailed { .. } => "open_failed",
            Self::WriteFailed { .. } => "write_failed",
        }
    }

    /// True for errors raised before any registry call was made
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingLocation
                | Self::MissingNames
                | Self::UnknownValueType(_)
                | Self::LengthMismatch { .. }
        )
    }
}
