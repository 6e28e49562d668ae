use thiserror::Error;

/// Convenience alias for results returned by the client.
pub type Result<T> = std::result::Result<T, FilesError>;

/// Errors surfaced by the SecureTransport files client.
///
/// Transport-level failures keep the original `reqwest` error as their
/// source so the full cause chain stays available for diagnostics.
#[derive(Debug, Error)]
pub enum FilesError {
    /// The local file to upload did not exist at call time.
    #[error("file {path} does not exist")]
    FileNotFound { path: String },

    /// The local file could not be opened for reading.
    #[error("could not read local file {path}")]
    LocalRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The service returned a body where an empty body is the success contract.
    #[error("unexpected response received: {body}")]
    UnexpectedResponse { body: String },

    /// Assigning metadata after a successful upload failed.
    #[error("could not set metadata")]
    MetadataAssignmentFailed {
        #[source]
        source: Box<FilesError>,
    },

    /// The folder listing response lacked a proper `files` sequence.
    #[error("incorrect response received from server")]
    InvalidListingResponse,

    /// A lower-level network, TLS or HTTP error.
    #[error("{context}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },
}
