use tracing::{debug, info};

use crate::client::FilesApi;
use crate::error::{FilesError, Result};
use crate::types::Metadata;
use crate::utils;

/// Assigns custom metadata to a remote file
///
/// The service signals a successful update with an empty body; the
/// resulting metadata view is then fetched with a follow-up `?status`
/// request and returned unfiltered.
///
/// # Arguments
///
/// * `client` - The files client instance
/// * `path` - Remote path of the file, relative to the home folder
/// * `metadata` - Metadata mapping sent as the JSON request body
///
/// # Errors
///
/// Returns an error if:
/// - The update or the follow-up status request fails at the transport level
/// - The update response carries a body (empty body is the success contract)
pub(crate) async fn update(
    client: &FilesApi,
    path: &str,
    metadata: &Metadata,
) -> Result<Metadata> {
    let uri = utils::files_url(&client.base_url, &[path]);
    debug!("Assigning metadata to {:?}", uri);

    let response = client
        .http
        .post(&uri)
        .basic_auth(&client.username, Some(&client.password))
        .json(metadata)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| FilesError::Transport {
            context: format!("could not set metadata on {path}"),
            source: err,
        })?;

    let body = response.text().await.map_err(|err| FilesError::Transport {
        context: format!("could not set metadata on {path}"),
        source: err,
    })?;
    if !body.is_empty() {
        return Err(FilesError::UnexpectedResponse { body });
    }

    let view = status(client, path).await?;
    info!("Metadata assigned to {:?}", path);
    Ok(view)
}

/// Fetches the `?status` metadata view of a remote path, unfiltered.
pub(crate) async fn status(client: &FilesApi, path: &str) -> Result<Metadata> {
    let uri = utils::status_url(&client.base_url, path);
    debug!("Fetching status of {:?}", uri);

    client
        .http
        .get(&uri)
        .basic_auth(&client.username, Some(&client.password))
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| FilesError::Transport {
            context: format!("could not fetch status of {path}"),
            source: err,
        })?
        .json::<Metadata>()
        .await
        .map_err(|err| FilesError::Transport {
            context: format!("could not fetch status of {path}"),
            source: err,
        })
}
