pub mod app;
pub mod handlers;
pub mod input;
pub mod router;
pub mod ui;
pub mod undo;
