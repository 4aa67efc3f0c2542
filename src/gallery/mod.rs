pub mod models;
pub mod scan;
