pub mod backup;
pub mod work;

pub use backup::BackupEnvelope;
pub use work::{NewWork, WorkPatch, WorkRecord, WorkType};
