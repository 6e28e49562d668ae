use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Custom metadata mapping attached to a remote file.
///
/// SecureTransport returns custom keys alongside its fixed status fields,
/// so the mapping is kept as a raw JSON object.
pub type Metadata = Map<String, Value>;

/// Descriptor for a remote file or directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Fully qualified URL of the entry on the server
    pub location: String,
    /// Entry name, without the folder part
    pub name: String,
    /// Folder the entry was addressed under
    pub parent_folder: String,
    /// Size in bytes; absent for a freshly uploaded file until its status is fetched
    pub size: Option<u64>,
    /// Whether the entry is a regular file or a directory
    pub file_type: FileType,
    /// Namespaced custom metadata; absent unless the operation fetched a status view
    pub metadata: Option<Metadata>,
}

/// Type of a remote entry (regular file or directory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    File,
    Directory,
}
