//! Error types for the token-bound Schnorr protocol.

/// Main error types for the library.
///
/// Every variant signals a caller-side precondition violation. Protocol
/// rejection (a proof that does not verify, a secret outside the asserted
/// range) is *not* an error: those outcomes are reported as `Ok(false)` so
/// callers can tell "cryptographically invalid" apart from "API misuse".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid group parameters were provided.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// A scalar value is invalid or out of range.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// A group element is invalid or not in the correct range.
    #[error("Invalid group element: {0}")]
    InvalidGroupElement(String),
}
