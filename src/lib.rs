pub mod app;
pub mod board;
pub mod card_view;
pub mod config;
pub mod logging;
pub mod model;
pub mod ui;
pub mod viewport;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState};
pub use board::{Board, BoardCommand};
pub use card_view::{CardMode, CardView, Field};
pub use config::AppConfig;
pub use model::{Card, CardData, CardId, Connection, Position};
