use std::env;
use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by catalogue entities
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the catalogue
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub json_logs: bool,
    pub publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            publisher: GatewayPublisherVia::Log,
        }
    }

    // Reads LIBRARY_BRANCH, LIBRARY_LOG_LEVEL, LIBRARY_LOG_JSON and LIBRARY_EVENTS,
    // falling back to the defaults of `new` for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(
            lookup("LIBRARY_BRANCH").unwrap_or_else(|| "main".to_string()).as_str());
        if let Some(level) = lookup("LIBRARY_LOG_LEVEL") {
            config.log_level = level.to_lowercase();
        }
        if let Some(json) = lookup("LIBRARY_LOG_JSON") {
            config.json_logs = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(via) = lookup("LIBRARY_EVENTS") {
            config.publisher = GatewayPublisherVia::from(via);
        }
        config
    }
}
