pub mod app;
pub mod catalog;
pub mod drag;
pub mod gui;
pub mod icons;
pub mod logging;
pub mod preferences;
pub mod settings;
pub mod shortcuts;
pub mod storage;
