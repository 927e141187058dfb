//! UI layer: app shell, palette grid, sequence strip, and theme.

pub mod app;
pub mod canvas;
pub mod palette;
pub mod theme;

pub use app::EditorApp;
