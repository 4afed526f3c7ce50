use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

pub trait EventPublisher {
    fn create_topic(&mut self, topic: &str) -> Result<String, LibraryError>;
    fn get_topics(&self) -> Result<Vec<String>, LibraryError>;
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
