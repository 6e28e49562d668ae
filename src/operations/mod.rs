/// Module for listing remote files and folders
pub(crate) mod list;

/// Module for assigning custom metadata to remote files
pub(crate) mod update;

/// Module for uploading files to the server
pub(crate) mod upload;
