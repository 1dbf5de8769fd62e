use thiserror::Error;

/// Errors produced by [`crate::RecordStore`] calls.
///
/// Failures are passed through from the hosted store mostly opaque: callers
/// get the raw status and body on rejection and decide how to surface them.
/// Nothing in this crate retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection, TLS or body-decoding failure from the HTTP client.
    #[error("store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The configured endpoint is not a valid URL.
    #[error("invalid store endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The access key cannot be carried in an HTTP header.
    #[error("store access key is not a valid header value")]
    InvalidKey,

    /// A count query came back without a usable `content-range` header.
    #[error("store returned no exact count")]
    MissingCount,

    /// An insert with `return=representation` yielded an empty row set.
    #[error("insert returned no representation")]
    EmptyInsert,
}
