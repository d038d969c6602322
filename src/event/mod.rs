mod bus;
mod events;

pub use bus::{EventBus, SubscriptionId};
pub use events::EditorEvent;

/// Receives every event emitted on an [`EventBus`]
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

/// Handler that keeps every event it sees, in order
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    events: std::rc::Rc<std::cell::RefCell<Vec<EditorEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far
    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
