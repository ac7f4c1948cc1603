use std::fmt;

use tracing::debug;

/// A zero-argument handler registered against an event source.
pub type Handler = Box<dyn Fn() + Send + Sync>;

/// A named event source. Handlers run synchronously, in registration order,
/// each time the source is triggered.
pub struct EventSource {
    name: String,
    handlers: Vec<Handler>,
}

impl EventSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Invokes every handler and returns how many ran.
    pub fn trigger(&self) -> usize {
        debug!(
            "Triggering '{}' ({} handlers)",
            self.name,
            self.handlers.len()
        );
        for handler in &self.handlers {
            handler();
        }
        self.handlers.len()
    }
}

impl fmt::Debug for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
