//! Terminal UI: pages, widgets and the main event loop

pub mod app;
pub mod markdown;
pub mod mode;
pub mod page;
pub mod presenter;
pub mod state;
pub mod widgets;
