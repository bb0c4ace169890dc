pub mod app;
pub mod auto_advance;
pub mod callbacks;
pub mod config;
pub mod content_index;
pub mod data;
pub mod error;
pub mod model;
pub mod search;
pub mod selection;
pub mod session;
pub mod ui;
pub mod unlock;
pub mod view_models;

pub use app::CoursePlayerApp;
