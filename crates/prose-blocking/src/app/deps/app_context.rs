// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How long a single privacy list or roster lookup may take before the command fails.
    pub store_timeout: Duration,
    /// Published with privacy list updates for users that have no default privacy list.
    pub default_privacy_list_name: String,
}

pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
            default_privacy_list_name: "default".to_string(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
