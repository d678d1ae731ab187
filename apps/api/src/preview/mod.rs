// Live preview: debounced re-rendering of anonymous builder sessions.

pub mod handlers;
pub mod renderer;
pub mod sessions;

pub use sessions::PreviewSessions;
