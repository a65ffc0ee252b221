mod app;
mod message;
mod state;

pub use app::{GuiOptions, run};
pub use message::Message;
pub use state::AppState;
