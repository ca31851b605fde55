use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const EMPTY_PAGE_POLICY_ENV: &str = "INVENTORY_EMPTY_PAGE_POLICY";

// EmptyPagePolicy decides what a list query reports when the requested page holds no
// books. The store itself always answers with an empty page.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum EmptyPagePolicy {
    EmptyResult,
    NotFound,
}

impl From<String> for EmptyPagePolicy {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "not_found" | "notfound" => EmptyPagePolicy::NotFound,
            _ => EmptyPagePolicy::EmptyResult,
        }
    }
}

impl Display for EmptyPagePolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            EmptyPagePolicy::EmptyResult => write!(f, "empty"),
            EmptyPagePolicy::NotFound => write!(f, "not_found"),
        }
    }
}

// Configuration abstracts config options for the inventory service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub service_name: String,
    pub version: String,
    pub empty_page_policy: EmptyPagePolicy,
}

impl Configuration {
    pub fn new(service_name: &str) -> Self {
        Configuration {
            service_name: service_name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            empty_page_policy: EmptyPagePolicy::EmptyResult,
        }
    }

    pub fn from_env(service_name: &str) -> Self {
        let mut config = Configuration::new(service_name);
        if let Ok(policy) = std::env::var(EMPTY_PAGE_POLICY_ENV) {
            config.empty_page_policy = EmptyPagePolicy::from(policy);
        }
        config
    }

    pub fn with_empty_page_policy(mut self, policy: EmptyPagePolicy) -> Self {
        self.empty_page_policy = policy;
        self
    }
}
