//! Wire payload types for the remote Veracity API
//!
//! All types serialize with camelCase field names to match the remote
//! JSON contract. Optional outbound fields are skipped when absent.

pub mod admin;
pub mod documents;
pub mod reports;
pub mod system;

pub use admin::{NewUser, UserAccount, UserRole};
pub use documents::{Document, DocumentQuery, DocumentUpdate, NewDocument, TagPatch};
pub use reports::{Report, ReportRequest, ReportStatus};
pub use system::SystemInfo;
