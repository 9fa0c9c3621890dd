mod error;
mod http_mapping;
mod record;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use record::{Comparison, FieldFilter, PropertyValue, TableEntity, TableRecord};
pub use traits::{
    AssetRepository, DailyReportRepository, RecordStore, WellsTestRepository,
};
