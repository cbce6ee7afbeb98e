mod app;
pub(crate) mod config;
mod console;
mod effects;
pub(crate) mod logging;
mod ui;

pub(crate) use app::run_app;
