//! Asset, daily report and well test records kept in the relational store.

mod requests;
mod types;

pub use requests::{NewAsset, NewDailyReport, NewWellsTest};
pub use types::{Asset, DailyReport, WellsTest};
