//! Platform glue and small shared helpers.

pub mod format;
pub mod notify;
pub mod timing;
