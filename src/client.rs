use std::path::Path;

use reqwest::Body;

use crate::error::Result;
use crate::operations::{list, update, upload};
use crate::types::{File, Metadata};

/// Client for the SecureTransport files REST API
///
/// Holds the server connection profile set once at construction. The
/// client carries no mutable state, so a single instance can serve any
/// number of concurrent operations.
#[derive(Debug, Clone)]
pub struct FilesApi {
    pub(crate) base_url: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) http: reqwest::Client,
}

impl FilesApi {
    /// Creates a new client for the given server profile
    ///
    /// The URL shape and credential presence are not validated here; a bad
    /// profile surfaces as a transport error on the first operation.
    ///
    /// Certificate validation is disabled on the underlying HTTP client
    /// because SecureTransport deployments commonly run with self-signed
    /// certificates; callers accept the reduced transport security.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = FilesApi::new("https://st.example.com", "alice", "secret");
    /// ```
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: server_url.into(),
            username: username.into(),
            password: password.into(),
            http,
        }
    }

    /// Uploads a content body to a folder on the server
    ///
    /// # Arguments
    ///
    /// * `folder` - Destination folder on the server
    /// * `filename` - Filename for the destination file
    /// * `content` - The file content; anything convertible to a request
    ///   body, such as `Bytes`, a `String` or a wrapped byte stream
    /// * `metadata` - Optional custom metadata to assign after the upload
    ///
    /// # Returns
    ///
    /// Returns the uploaded `File`. Without metadata its size and metadata
    /// are absent; with metadata they reflect the follow-up status view.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let file = client
    ///     .upload_stream("inbox", "report.txt", Bytes::from("hello"), None)
    ///     .await?;
    /// ```
    pub async fn upload_stream(
        &self,
        folder: &str,
        filename: &str,
        content: impl Into<Body>,
        metadata: Option<&Metadata>,
    ) -> Result<File> {
        upload::upload_stream(self, folder, filename, content, metadata).await
    }

    /// Uploads a local file to a folder on the server
    ///
    /// # Arguments
    ///
    /// * `folder` - Destination folder on the server
    /// * `path` - Path to the local file; its file name becomes the
    ///   destination filename
    /// * `metadata` - Optional custom metadata to assign after the upload
    ///
    /// # Returns
    ///
    /// Returns the uploaded `File`, enriched as in [`Self::upload_stream`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// let file = client
    ///     .upload_file("inbox", "/tmp/report.txt", None)
    ///     .await?;
    /// ```
    pub async fn upload_file(
        &self,
        folder: &str,
        path: impl AsRef<Path>,
        metadata: Option<&Metadata>,
    ) -> Result<File> {
        upload::upload_file(self, folder, path.as_ref(), metadata).await
    }

    /// Assigns custom metadata to a remote file
    ///
    /// # Arguments
    ///
    /// * `path` - Remote path of the file, relative to the home folder
    /// * `metadata` - Metadata mapping sent as the JSON request body
    ///
    /// # Returns
    ///
    /// Returns the resulting metadata view fetched with a follow-up
    /// `?status` request, unfiltered.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut metadata = Metadata::new();
    /// metadata.insert("custom.tag".into(), "archived".into());
    /// let view = client.update("inbox/report.txt", &metadata).await?;
    /// ```
    pub async fn update(&self, path: &str, metadata: &Metadata) -> Result<Metadata> {
        update::update(self, path, metadata).await
    }

    /// Lists a single remote file via its `?status` view
    ///
    /// # Arguments
    ///
    /// * `path` - Remote path of the file, relative to the home folder
    ///
    /// # Returns
    ///
    /// Returns a `File` carrying the filtered custom metadata of the entry.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let file = client.list_file("inbox/report.txt").await?;
    /// ```
    pub async fn list_file(&self, path: &str) -> Result<File> {
        list::list_file(self, path).await
    }

    /// Lists the entries of a remote folder
    ///
    /// # Arguments
    ///
    /// * `folder` - Remote path of the folder, relative to the home folder
    ///
    /// # Returns
    ///
    /// Returns one `File` per entry, in server order, each with the queried
    /// folder as its parent.
    ///
    /// # Example
    ///
    /// ```ignore
    /// for file in client.list_folder("inbox").await? {
    ///     println!("{}: {:?} bytes", file.name, file.size);
    /// }
    /// ```
    pub async fn list_folder(&self, folder: &str) -> Result<Vec<File>> {
        list::list_folder(self, folder).await
    }
}
