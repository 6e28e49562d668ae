use serde_json::Value;
use tracing::debug;

use crate::client::FilesApi;
use crate::error::{FilesError, Result};
use crate::types::{File, Metadata};
use crate::utils;

/// Lists a single remote file via its `?status` view
///
/// # Arguments
///
/// * `client` - The files client instance
/// * `path` - Remote path of the file, relative to the home folder
///
/// # Returns
///
/// Returns a `File` built from the status fields, carrying the filtered
/// custom metadata of the entry.
///
/// # Errors
///
/// Returns an error if the status request fails at the transport level or
/// the response body is not a JSON object.
pub(crate) async fn list_file(client: &FilesApi, path: &str) -> Result<File> {
    let uri = utils::status_url(&client.base_url, path);
    debug!("Listing file {:?}", uri);

    let raw: Metadata = client
        .http
        .get(&uri)
        .basic_auth(&client.username, Some(&client.password))
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| FilesError::Transport {
            context: format!("could not list file {path}"),
            source: err,
        })?
        .json()
        .await
        .map_err(|err| FilesError::Transport {
            context: format!("could not list file {path}"),
            source: err,
        })?;

    let name = raw
        .get("fileName")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(File {
        location: utils::files_url(&client.base_url, &[path]),
        name,
        parent_folder: path.to_string(),
        size: utils::size_of(raw.get("size")),
        file_type: utils::file_type_of(raw.get("isDirectory")),
        metadata: Some(utils::filter_metadata(raw)),
    })
}

/// Lists the entries of a remote folder
///
/// # Arguments
///
/// * `client` - The files client instance
/// * `folder` - Remote path of the folder, relative to the home folder
///
/// # Returns
///
/// Returns one `File` per listing entry, each with the queried folder as
/// its parent. Entry order follows the server response.
///
/// # Errors
///
/// Returns an error if:
/// - The listing request fails at the transport level
/// - The response lacks a `files` array
pub(crate) async fn list_folder(client: &FilesApi, folder: &str) -> Result<Vec<File>> {
    let uri = utils::files_url(&client.base_url, &[folder]);
    debug!("Listing folder {:?}", uri);

    let listing: Value = client
        .http
        .get(&uri)
        .basic_auth(&client.username, Some(&client.password))
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| FilesError::Transport {
            context: format!("could not list folder {folder}"),
            source: err,
        })?
        .json()
        .await
        .map_err(|err| FilesError::Transport {
            context: format!("could not list folder {folder}"),
            source: err,
        })?;

    let Some(entries) = listing.get("files").and_then(Value::as_array) else {
        return Err(FilesError::InvalidListingResponse);
    };

    let mut result = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry
            .get("fileName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        result.push(File {
            location: utils::files_url(&client.base_url, &[folder, &name]),
            name,
            parent_folder: folder.to_string(),
            size: utils::size_of(entry.get("size")),
            file_type: utils::file_type_of(entry.get("isDirectory")),
            metadata: None,
        });
    }
    debug!("Folder {:?} has {} entries", folder, result.len());
    Ok(result)
}
