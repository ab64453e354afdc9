pub mod helpers;
pub mod models;
