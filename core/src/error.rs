use thiserror::Error;

/// Failure to decode a bundled binary table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer length does not fit the fixed record width.
    #[error("buffer of {len} bytes is not a whole number of {width}-byte records")]
    MalformedRecord {
        /// Expected width of one record.
        width: usize,
        /// Actual buffer length.
        len: usize,
    },
    /// A header is shorter than its fixed prefix.
    #[error("buffer of {len} bytes is shorter than the {needed}-byte header")]
    Truncated {
        /// Bytes the header requires.
        needed: usize,
        /// Actual buffer length.
        len: usize,
    },
    /// A code byte lies outside its enumerated range.
    #[error("field `{field}` holds unknown code {value}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Raw value read from the buffer.
        value: i32,
    },
}

/// Failure to synthesize a specimen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The attempt cap was reached without a candidate satisfying every constraint.
    #[error("no valid candidate found within {attempts} attempts")]
    Exhausted {
        /// Number of candidates sampled.
        attempts: u32,
    },
    /// The template cannot be generated for the given trainer at all.
    #[error("template cannot be generated: {reason}")]
    Unsupported {
        /// Short description of the unsupported combination.
        reason: &'static str,
    },
}
