use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{
    OpenApi,
    payload::{Json, PlainText},
};
use tracing::debug;

use crate::{
    domain::errors::IngestError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        requests::MembershipEventDto,
    },
};

#[derive(Clone)]
pub struct EmployeeEndpoints {
    state: Arc<ApiState>,
}

impl EmployeeEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl EmployeeEndpoints {
    /// Membership webhook: announces invited and suspended employees in the
    /// discussion channel. Invite announcements go out with a delay; the
    /// acknowledgment here does not wait for them.
    #[oai(path = "/employee", method = "post", tag = EndpointsTags::Employees)]
    pub async fn membership_event(
        &self,
        request: Json<MembershipEventDto>,
    ) -> PoemResult<PlainText<&'static str>> {
        debug!(payload = ?request.0, "received membership event");

        self.state
            .process_event_usecase
            .execute(request.0.into_event())
            .await
            .map_err(map_ingest_error)?;

        Ok(PlainText("Success"))
    }
}

fn map_ingest_error(err: IngestError) -> poem::Error {
    let status = match err {
        IngestError::UnsupportedObjectType | IngestError::NoUserIds => {
            poem::http::StatusCode::BAD_REQUEST
        }
        IngestError::Other(_) => poem::http::StatusCode::INTERNAL_SERVER_ERROR,
    };
    poem::Error::from_string(err.to_string(), status)
}
