#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "dxf-io")]
pub mod dxf;

/// Errors while writing a pattern out.
///
/// Emitters are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant does not exist.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    /// The requested output format is not compiled in or not known.
    Unsupported(String),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing.
    Dxf(::dxf::DxfError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Unsupported(msg) => write!(f, "Output format is not supported: {msg}"),

            #[cfg(feature = "dxf-io")]
            Dxf(error) => write!(f, "DXF writing error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

#[cfg(feature = "dxf-io")]
impl From<::dxf::DxfError> for IoError {
    fn from(value: ::dxf::DxfError) -> Self {
        Self::Dxf(value)
    }
}
