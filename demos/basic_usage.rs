use anyhow::{Result, bail};
use securetransport_files::FilesApi;
use tracing::info;

/// Lists a SecureTransport folder and prints its entries.
///
/// Usage: basic_usage <server-url> <username> <password> [folder]
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(server), Some(username), Some(password)) = (args.next(), args.next(), args.next())
    else {
        bail!("usage: basic_usage <server-url> <username> <password> [folder]");
    };
    let folder = args.next().unwrap_or_else(|| "/".to_string());

    let client = FilesApi::new(server, username, password);

    for file in client.list_folder(&folder).await? {
        info!(
            "{} ({:?}, {} bytes)",
            file.name,
            file.file_type,
            file.size.map_or_else(|| "?".to_string(), |s| s.to_string())
        );
    }
    Ok(())
}
