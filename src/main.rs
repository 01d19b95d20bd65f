use std::io::Error;
use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use tokio::main;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    application::{
        handlers::notification_dispatcher::NotificationDispatcher,
        usecases::{
            process_event::ProcessEventUseCase,
            schedule_delivery::{DeliveryScheduler, SchedulerConfig},
        },
    },
    config::Config,
    infrastructure::messaging::pachca::PachcaClient,
    presentation::http::endpoints::{
        employee::EmployeeEndpoints,
        root::{ApiState, Endpoints},
    },
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[cfg(test)]
mod test_support;

#[main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::try_parse().map_err(Error::other)?;

    let pachca = PachcaClient::new(
        config.pachca_base_url.clone(),
        config.pachca_token.clone(),
        config.discussion_id,
    );
    let dispatcher = Arc::new(NotificationDispatcher::new(pachca.clone()));
    let scheduler = Arc::new(DeliveryScheduler::new(
        pachca,
        dispatcher,
        SchedulerConfig::default(),
    ));
    let state = Arc::new(ApiState {
        process_event_usecase: Arc::new(ProcessEventUseCase::new(scheduler)),
    });

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    tracing::info!("Starting server at {}", server_url);

    let api_service = OpenApiService::new(
        (Endpoints, EmployeeEndpoints::new(state)),
        "Employee Notifier API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
