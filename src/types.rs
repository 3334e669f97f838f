/// Shared types used across the codebase

use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Operations forwarded to the upstream store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Select,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Operation::Select => Method::GET,
            Operation::Create => Method::POST,
            Operation::Update => Method::PATCH,
            Operation::Delete => Method::DELETE,
        }
    }

    /// Mutations that need the affected rows echoed back
    pub fn prefer(&self) -> Option<&'static str> {
        match self {
            Operation::Create | Operation::Update => Some("return=representation"),
            Operation::Select | Operation::Delete => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_and_prefer_headers() {
        assert_eq!(Operation::Select.method(), Method::GET);
        assert_eq!(Operation::Update.method(), Method::PATCH);
        assert_eq!(Operation::Create.prefer(), Some("return=representation"));
        assert_eq!(Operation::Delete.prefer(), None);
    }
}
