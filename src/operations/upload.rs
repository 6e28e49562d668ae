use std::path::Path;

use reqwest::Body;
use reqwest::multipart::{Form, Part};
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::info;

use crate::client::FilesApi;
use crate::error::{FilesError, Result};
use crate::operations::update;
use crate::types::{File, FileType, Metadata};
use crate::utils;

/// Multipart field name the service expects the file content under.
const UPLOAD_FIELD: &str = "custom_file";

/// Uploads a content body to a folder on the server
///
/// The content is sent as a `multipart/form-data` POST with the target
/// filename set on the form field. The service returns no body for an
/// uploaded file, so any body on a successful status is an error.
///
/// When metadata is supplied, an update is issued for the uploaded path
/// right away and the returned size, type and filtered metadata are merged
/// into the result; a failed update fails the whole upload.
///
/// # Arguments
///
/// * `client` - The files client instance
/// * `folder` - Destination folder on the server
/// * `filename` - Filename for the destination file
/// * `content` - The file content body
/// * `metadata` - Optional custom metadata to assign after the upload
///
/// # Errors
///
/// Returns an error if:
/// - The upload request fails at the transport level
/// - The upload response carries a body
/// - The follow-up metadata update fails
pub(crate) async fn upload_stream(
    client: &FilesApi,
    folder: &str,
    filename: &str,
    content: impl Into<Body>,
    metadata: Option<&Metadata>,
) -> Result<File> {
    let uri = utils::files_url(&client.base_url, &[folder]);
    info!("Uploading {:?} to {:?}", filename, uri);

    let part = Part::stream(content).file_name(filename.to_string());
    let form = Form::new().part(UPLOAD_FIELD, part);

    let response = client
        .http
        .post(&uri)
        .basic_auth(&client.username, Some(&client.password))
        .multipart(form)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| FilesError::Transport {
            context: format!("could not upload {filename} to {folder}"),
            source: err,
        })?;

    // The service does not return a response body for an uploaded file
    let body = response.text().await.map_err(|err| FilesError::Transport {
        context: format!("could not upload {filename} to {folder}"),
        source: err,
    })?;
    if !body.is_empty() {
        return Err(FilesError::UnexpectedResponse { body });
    }

    let mut file = File {
        location: utils::files_url(&client.base_url, &[folder, filename]),
        name: filename.to_string(),
        parent_folder: folder.to_string(),
        size: None,
        file_type: FileType::File,
        metadata: None,
    };
    info!("File {:?} uploaded", file.location);

    if let Some(metadata) = metadata {
        let path = utils::join_path(folder, filename);
        let view = update::update(client, &path, metadata)
            .await
            .map_err(|err| FilesError::MetadataAssignmentFailed {
                source: Box::new(err),
            })?;
        file.size = utils::size_of(view.get("size"));
        file.file_type = utils::file_type_of(view.get("isDirectory"));
        file.metadata = Some(utils::filter_metadata(view));
    }

    Ok(file)
}

/// Uploads a local file to a folder on the server
///
/// Local existence is checked up front so a missing file never costs an
/// HTTP round trip; the window between the check and the open is accepted.
/// The file is read sequentially and streamed as the request body.
///
/// # Arguments
///
/// * `client` - The files client instance
/// * `folder` - Destination folder on the server
/// * `path` - Path to the local file to upload
/// * `metadata` - Optional custom metadata to assign after the upload
///
/// # Errors
///
/// Returns an error if:
/// - The local file does not exist or cannot be opened
/// - The upload itself fails (see `upload_stream`)
pub(crate) async fn upload_file(
    client: &FilesApi,
    folder: &str,
    path: &Path,
    metadata: Option<&Metadata>,
) -> Result<File> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(FilesError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| FilesError::FileNotFound {
            path: path.display().to_string(),
        })?;

    let local_file = fs::File::open(path)
        .await
        .map_err(|err| FilesError::LocalRead {
            path: path.display().to_string(),
            source: err,
        })?;
    info!("Local file opened: {:?}", path);

    let body = Body::wrap_stream(ReaderStream::new(local_file));
    upload_stream(client, folder, &filename, body, metadata).await
}
