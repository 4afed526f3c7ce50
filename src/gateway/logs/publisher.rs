use std::collections::HashMap;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the tracing subscriber.
#[derive(Debug)]
pub struct LogPublisher {
    branch_id: String,
    topics: HashMap<String, String>,
}

impl LogPublisher {
    pub fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
            topics: HashMap::new(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn create_topic(&mut self, topic: &str) -> Result<String, LibraryError> {
        let arn = format!("log:{}:{}", self.branch_id, topic);
        self.topics.insert(topic.to_string(), arn.to_string());
        Ok(arn)
    }

    fn get_topics(&self) -> Result<Vec<String>, LibraryError> {
        let mut topics: Vec<String> = self.topics.keys().cloned().collect();
        topics.sort();
        Ok(topics)
    }

    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        if let Some(arn) = self.topics.get(event.name.as_str()) {
            info!(topic = arn.as_str(), event_id = event.event_id.as_str(), key = event.key.as_str(),
                kind = ?event.kind, "{}", event.json_data);
            Ok(())
        } else {
            Err(LibraryError::runtime(format!("topic is not found {}", event.name).as_str(), None))
        }
    }
}
