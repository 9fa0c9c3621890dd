pub mod package_check;

pub use package_check::PackageCheckService;
