use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher records published events; clones share the same buffer so a
// caller can keep a handle while the catalogue owns the boxed publisher.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    topics: Rc<RefCell<BTreeSet<String>>>,
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }
}

impl EventPublisher for MemoryPublisher {
    fn create_topic(&mut self, topic: &str) -> Result<String, LibraryError> {
        self.topics.borrow_mut().insert(topic.to_string());
        Ok(format!("memory:{}", topic))
    }

    fn get_topics(&self) -> Result<Vec<String>, LibraryError> {
        Ok(self.topics.borrow().iter().cloned().collect())
    }

    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        if !self.topics.borrow().contains(event.name.as_str()) {
            return Err(LibraryError::runtime(format!("topic is not found {}", event.name).as_str(), None));
        }
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}
