pub mod events;
pub mod factory;
pub mod logs {
    pub mod publisher;
}
pub mod memory {
    pub mod publisher;
}

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    Log,
    Memory,
}

impl From<String> for GatewayPublisherVia {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => GatewayPublisherVia::Memory,
            _ => GatewayPublisherVia::Log,
        }
    }
}
