use std::sync::mpsc::{Receiver, Sender, channel};

use log::{debug, warn};

use crate::model::ViewSize;

use super::RenderRequest;

/// Collaborator that turns render requests into pixels.
pub trait DrawSynchronizer {
    fn render(&mut self, request: RenderRequest);
    fn client_size(&self) -> ViewSize;
    fn resize(&mut self, size: ViewSize);
}

/// Forwards every request over a channel to whoever draws.
#[derive(Debug)]
pub struct ChannelDraw {
    sender: Sender<RenderRequest>,
    size: ViewSize,
    closed: bool,
}

impl ChannelDraw {
    pub fn channel(size: ViewSize) -> (Self, Receiver<RenderRequest>) {
        let (sender, receiver) = channel();
        let draw = Self {
            sender,
            size,
            closed: false,
        };
        (draw, receiver)
    }
}

impl DrawSynchronizer for ChannelDraw {
    fn render(&mut self, request: RenderRequest) {
        if self.closed {
            return;
        }
        debug!(
            "render {} layer(s) at frames {:?}",
            request.layers.len(),
            request.frames
        );
        if self.sender.send(request).is_err() {
            warn!("render receiver dropped; further requests are discarded");
            self.closed = true;
        }
    }

    fn client_size(&self) -> ViewSize {
        self.size
    }

    fn resize(&mut self, size: ViewSize) {
        self.size = size;
    }
}
