pub mod http;
pub mod importer;
