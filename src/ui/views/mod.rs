pub mod empty;
pub mod finished;
pub mod load_dialog;
pub mod quiz;
pub mod test_viewer;
