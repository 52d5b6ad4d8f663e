//! # Access Control Policy
//!
//! The single place that decides who may see or mutate a record. Callers
//! that fail these checks get `NotFound`, never a distinct "forbidden" -
//! a denied record and a missing record must look the same from outside.
//!
//! Visibility is per-record: a public folder does not make its children
//! public, and a private parent does not hide a public child.

use uuid::Uuid;

use super::record::FileRecord;

/// Whether `caller` may read the record's metadata-visible content
///
/// True for the owner and for anyone (including anonymous callers) when
/// the record is public.
pub fn can_read(record: &FileRecord, caller: Option<Uuid>) -> bool {
    record.is_public || caller == Some(record.user_id)
}

/// Whether `caller` may mutate the record
///
/// Strict ownership, regardless of visibility: publishing a record does
/// not open it to writes.
pub fn can_write(record: &FileRecord, caller: Uuid) -> bool {
    record.user_id == caller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::record::FileKind;

    fn record(owner: Uuid, is_public: bool) -> FileRecord {
        FileRecord::with_content(
            owner,
            "report.txt".to_string(),
            FileKind::File,
            None,
            is_public,
            "/tmp/files_manager/x".to_string(),
        )
    }

    #[test]
    fn test_owner_reads_private_record() {
        let owner = Uuid::new_v4();
        assert!(can_read(&record(owner, false), Some(owner)));
    }

    #[test]
    fn test_non_owner_cannot_read_private_record() {
        let record = record(Uuid::new_v4(), false);

        assert!(!can_read(&record, Some(Uuid::new_v4())));
        assert!(!can_read(&record, None));
    }

    #[test]
    fn test_anyone_reads_public_record() {
        let record = record(Uuid::new_v4(), true);

        assert!(can_read(&record, Some(Uuid::new_v4())));
        assert!(can_read(&record, None));
    }

    #[test]
    fn test_write_requires_ownership_even_when_public() {
        let owner = Uuid::new_v4();
        let record = record(owner, true);

        assert!(can_write(&record, owner));
        assert!(!can_write(&record, Uuid::new_v4()));
    }
}
