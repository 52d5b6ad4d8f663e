//! # File Records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Folder,
    File,
    Image,
}

impl FileKind {
    /// Whether this kind carries on-disk bytes
    pub fn has_content(&self) -> bool {
        !matches!(self, FileKind::Folder)
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileKind::Folder => "folder",
            FileKind::File => "file",
            FileKind::Image => "image",
        };
        write!(f, "{}", s)
    }
}

/// A file or folder metadata record
///
/// Invariants:
/// - `parent_id` is `None` (root) or the id of an existing Folder record.
/// - Folder records never carry `local_path`.
/// - `name` is non-empty and `user_id` never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique record identifier
    pub id: Uuid,

    /// Owner; fixed at creation
    pub user_id: Uuid,

    /// Display name
    pub name: String,

    /// Record kind
    #[serde(rename = "type")]
    pub kind: FileKind,

    /// Whether non-owners may read the content
    pub is_public: bool,

    /// Containing folder, `None` for the root
    pub parent_id: Option<Uuid>,

    /// Where the blob writer put the bytes; `None` for folders.
    /// A weak reference: the bytes may be gone if a write raced a crash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    /// Create a folder record
    pub fn folder(user_id: Uuid, name: String, parent_id: Option<Uuid>, is_public: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            kind: FileKind::Folder,
            is_public,
            parent_id,
            local_path: None,
            created_at: Utc::now(),
        }
    }

    /// Create a file or image record pointing at stored bytes
    pub fn with_content(
        user_id: Uuid,
        name: String,
        kind: FileKind,
        parent_id: Option<Uuid>,
        is_public: bool,
        local_path: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            kind,
            is_public,
            parent_id,
            local_path: Some(local_path),
            created_at: Utc::now(),
        }
    }
}

/// Upload payload as the boundary layer hands it over
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FileKind,

    /// Containing folder; omitted means root
    #[serde(default)]
    pub parent_id: Option<Uuid>,

    #[serde(default)]
    pub is_public: bool,

    /// Base64 content; required for file/image, ignored for folders
    #[serde(default)]
    pub data: Option<String>,
}
