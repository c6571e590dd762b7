//! Render fan-out and image export collaborators of the stack.

mod draw;
mod request;
mod save;

#[cfg(test)]
mod tests;

pub use draw::{ChannelDraw, DrawSynchronizer};
pub use request::RenderRequest;
pub use save::{AspectRatio, PreviewSaveService, SaveCallback, SaveJob, SaveService};
