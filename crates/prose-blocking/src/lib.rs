// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use prose_blocking_xmpp::{BlockingCommand, BlockingRequest};

pub use app::deps::{AppConfig, AppDependencies, AppServiceDependencies};
pub use app::services::BlockingService;

pub mod app;
pub mod domain;
pub mod infra;
pub mod util;

#[cfg(feature = "test")]
pub mod test;
