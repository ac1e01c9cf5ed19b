mod app;
mod message;
pub mod screens;
mod state;
pub mod widgets;

pub use app::{CollabApp, run};
pub use message::Message;
pub use state::AppState;
