//! Errors produced while reading a serialized network back from text.

use std::fmt;

/// Failure reading a [`Neuron`](crate::neuron::Neuron), [`DenseNetwork`](crate::dense::DenseNetwork),
/// or [`ChessNetwork`](crate::chess_net::ChessNetwork) from a whitespace-separated token stream.
///
/// Readback stops at the first malformed token — there is no partial-recovery
/// path, matching the "not loaded" sentinel behavior of the format this
/// mirrors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// The token stream ended before all expected fields were read.
    #[error("unexpected end of input while reading network")]
    UnexpectedEof,
    /// A token expected to be an integer (input count, layer width, layer
    /// count) did not parse as one.
    #[error("expected an integer, found {token:?}")]
    MalformedInt {
        /// The offending token.
        token: String,
    },
    /// A token expected to be a float (weight or bias) did not parse as one.
    #[error("expected a float, found {token:?}")]
    MalformedFloat {
        /// The offending token.
        token: String,
    },
    /// A chess network's dense layer widths don't start at 64 (the number of
    /// preprocessing neurons / board squares).
    #[error("chess network's first dense layer must have width 64, found {found}")]
    ShapeMismatch {
        /// The width actually present.
        found: usize,
    },
}

impl NetworkError {
    pub(crate) fn malformed_int(token: &str) -> NetworkError {
        NetworkError::MalformedInt {
            token: token.to_string(),
        }
    }

    pub(crate) fn malformed_float(token: &str) -> NetworkError {
        NetworkError::MalformedFloat {
            token: token.to_string(),
        }
    }
}

/// Thin whitespace-tokenizing cursor over serialized network text.
///
/// Mirrors the tolerance of a `scanf("%d")`/`scanf("%f")` reader: any run of
/// whitespace (including newlines) separates tokens, and the first token that
/// fails to parse as the expected type aborts the whole read.
pub(crate) struct TokenReader<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> TokenReader<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        TokenReader {
            tokens: input.split_whitespace(),
        }
    }

    fn next_token(&mut self) -> Result<&'a str, NetworkError> {
        self.tokens.next().ok_or(NetworkError::UnexpectedEof)
    }

    pub(crate) fn next_usize(&mut self) -> Result<usize, NetworkError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| NetworkError::malformed_int(token))
    }

    pub(crate) fn next_f32(&mut self) -> Result<f32, NetworkError> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| NetworkError::malformed_float(token))
    }
}

impl fmt::Debug for TokenReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenReader {{ .. }}")
    }
}
