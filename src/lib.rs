pub mod app;
pub mod data;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod storage;
pub mod ui;

pub use app::QuizApp;
