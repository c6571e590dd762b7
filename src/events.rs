//! Stack notifications, delivered synchronously and in order to every
//! subscriber over its own channel.

use std::sync::mpsc::{Receiver, Sender, channel};

use log::{debug, warn};
use serde::Serialize;

use crate::model::AxisKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "value")]
pub enum StackEvent {
    /// The view must be redrawn.
    ViewLoad,
    FrameChanged(AxisKind),
    SaveImageResult(bool),
}

#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<StackEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<StackEvent> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    pub fn emit(&mut self, event: StackEvent) {
        debug!("emit {event:?} to {} subscriber(s)", self.subscribers.len());
        let before = self.subscribers.len();
        self.subscribers
            .retain(|subscriber| subscriber.send(event).is_ok());
        if self.subscribers.len() < before {
            warn!(
                "dropped {} disconnected event subscriber(s)",
                before - self.subscribers.len()
            );
        }
    }

    /// A detached sender for work that completes off the owning thread.
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            subscribers: self.subscribers.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventEmitter {
    subscribers: Vec<Sender<StackEvent>>,
}

impl EventEmitter {
    pub fn emit(&self, event: StackEvent) {
        for subscriber in &self.subscribers {
            let _ = subscriber.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EventBus, StackEvent};
    use crate::model::AxisKind;

    #[test]
    fn delivers_in_order_and_prunes_closed_receivers() {
        let mut bus = EventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        bus.emit(StackEvent::FrameChanged(AxisKind::Stokes));
        bus.emit(StackEvent::ViewLoad);
        let received = kept.try_iter().collect::<Vec<_>>();
        assert_eq!(
            received,
            vec![StackEvent::FrameChanged(AxisKind::Stokes), StackEvent::ViewLoad]
        );
    }

    #[test]
    fn emitter_works_from_another_thread() {
        let mut bus = EventBus::new();
        let receiver = bus.subscribe();
        let emitter = bus.emitter();
        std::thread::spawn(move || emitter.emit(StackEvent::SaveImageResult(true)))
            .join()
            .expect("join");
        assert_eq!(receiver.recv().ok(), Some(StackEvent::SaveImageResult(true)));
    }
}
