pub mod dataset;
pub mod entry;
pub mod person;
pub mod policy;
pub mod upcoming;
