use thiserror::Error;

/// Errors produced when reading labels or a report line back from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not one of the known OS labels.
    #[error("unrecognized os label: {0:?}")]
    UnknownOs(String),
    /// The text is not one of the known architecture labels.
    #[error("unrecognized architecture label: {0:?}")]
    UnknownArch(String),
    /// The product tag is empty or spans more than one line.
    #[error("invalid product tag: {0:?}")]
    InvalidTag(String),
    /// The line does not have the `<tag>. Running on: <os> - <arch>` shape.
    #[error("malformed report line: {0:?}")]
    MalformedReport(String),
}
