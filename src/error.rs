// This module defines error types for mkrename using the thiserror crate for idiomatic
// Rust error handling. GenError covers the only two failures the generator can observe
// itself: a usage error when the positional parameter count matches neither mode, and
// an I/O error while writing generated text. Malformed type names, unknown ISA labels
// and colliding macro names are not detected here; they surface later when the C
// compiler consumes the output. GenResult<T> is a convenience alias.

//! Error types for the header generator.

use thiserror::Error;

/// Main error type for header generation.
#[derive(Error, Debug)]
pub enum GenError {
    /// Parameter count selects neither rename nor declaration mode.
    ///
    /// The message is the two-line usage diagnostic.
    #[error(
        "Usage : {program} <atr prefix> <DP width> <SP width> [<isa>]\n\
         Usage : {program} <atr prefix> <DP width> <SP width> <vdouble type> <vfloat type> <vint type> <vint2 type> <Macro to enable> [<isa>]"
    )]
    Usage { program: String },

    #[error("Failed to write generated output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generation operations.
pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_is_two_lines_naming_both_modes() {
        let err = GenError::Usage {
            program: "mkrename".to_string(),
        };
        let msg = err.to_string();
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Usage : mkrename <atr prefix>"));
        assert!(lines[0].ends_with("[<isa>]"));
        assert!(lines[1].contains("<Macro to enable>"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: GenError = io.into();
        assert!(err.to_string().contains("closed"));
    }
}
