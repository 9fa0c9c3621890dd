//! Package-check records: wire shapes, table shapes, and request parsing.
//!
//! Robots poll for pending packages and mark them processed; users submit new
//! packages in batches.

mod error;
mod mapping;
mod requests;
mod types;

pub use error::RequestError;
pub use mapping::{
    from_table_entity, from_table_entities, insert_request_to_packages, to_table_entity,
};
pub use requests::{
    responses, InsertPackagesBody, NewPackageCheck, PackageCheckRequest, UpdatePackageRequest,
};
pub use types::{
    PackageCheck, PackageCheckTableEntity, PackageStatus, ID_FIELD_NAME, PLACEHOLDER_LCI,
    PLACEHOLDER_SAP, STATUS_FIELD_NAME,
};
