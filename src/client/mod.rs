//! Chat client — the conversation view, minus the pixels.
//!
//! `session` owns the message list and the idle/awaiting state machine,
//! `api` talks to the server, `intent` routes a line to build or search, and
//! `render` turns messages into terminal text.

pub mod api;
pub mod intent;
pub mod render;
pub mod session;

pub use api::{BuildApi, ClientError, HttpApi};
pub use session::{Attachment, ChatMessage, ChatSession, SendError, Sender, SessionState};
