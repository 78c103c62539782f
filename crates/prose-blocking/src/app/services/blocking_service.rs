// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;
use tracing::{info, warn};
use xmpp_parsers::iq::Iq;
use xmpp_parsers::stanza_error::StanzaError;

use prose_blocking_xmpp::stanza::blocking::{blocklist_result, empty_result};
use prose_blocking_xmpp::{ns, BlockingRequest};

use crate::app::deps::{AppDependencies, DynBlockingDomainService};
use crate::domain::blocking::models::{BlockingError, CommandResponse};
use crate::domain::shared::models::UserResourceId;

/// Entry point for XEP-0191 IQs received from a client stream.
pub struct BlockingService {
    blocking_domain_service: DynBlockingDomainService,
}

impl From<&AppDependencies> for BlockingService {
    fn from(value: &AppDependencies) -> Self {
        Self {
            blocking_domain_service: value.blocking_domain_service.clone(),
        }
    }
}

impl BlockingService {
    pub fn disco_features(&self) -> Vec<&'static str> {
        vec![ns::BLOCKING]
    }

    /// Handles `iq` sent by `origin` and returns the response addressed back to it.
    ///
    /// Returns `None` if the IQ is not a blocking command. Responses and errors are never
    /// answered.
    #[tracing::instrument(skip(self, iq), fields(id = %iq.id))]
    pub async fn handle_iq(&self, origin: &UserResourceId, iq: Iq) -> Option<Iq> {
        let request = match BlockingRequest::from_iq(&iq) {
            Ok(Some(request)) => request,
            Ok(None) => return None,
            Err(err) => {
                info!("Rejecting malformed blocking command. {err}");
                return Some(error_response(origin, iq.id, &BlockingError::from(err)));
            }
        };

        let response = match self.blocking_domain_service.handle(origin, &request).await {
            Ok(CommandResponse::BlockList(items)) => blocklist_result(request.id, items),
            Ok(CommandResponse::Empty) => empty_result(request.id),
            Err(err) => {
                warn!("Blocking command failed. {err}");
                return Some(error_response(origin, request.id, &err));
            }
        };

        Some(addressed_to(origin, response))
    }
}

fn error_response(origin: &UserResourceId, id: String, err: &BlockingError) -> Iq {
    addressed_to(origin, Iq::from_error(id, StanzaError::from(err)))
}

fn addressed_to(origin: &UserResourceId, mut iq: Iq) -> Iq {
    iq.to = Some(Jid::from(origin.clone()));
    iq
}
