use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::process_event::ProcessEventUseCase;

#[derive(Clone)]
pub struct ApiState {
    pub process_event_usecase: Arc<ProcessEventUseCase>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Employees,
}

pub struct Endpoints;
