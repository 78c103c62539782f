// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use blocking_error::{BlockingError, NotificationError, StorageError};
pub use command_response::CommandResponse;
pub use planned_presence::PlannedPresence;
pub use privacy_list_updated_event::PrivacyListUpdatedEvent;

mod blocking_error;
mod command_response;
mod planned_presence;
mod privacy_list_updated_event;
