pub mod app;
pub mod data;
pub mod error;
pub mod model;
pub mod scoring;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
