//! Web Module
//!
//! Server-rendered HTML pages: the router, shared state, handlers, DTOs and
//! middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pages;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    AuthenticateDriverUseCase, CreateDriverUseCase, FleetSummaryUseCase, GetDriverByIdUseCase,
    ListCarsUseCase, ListDriversUseCase, ListManufacturersUseCase,
};
use crate::domain::gateways::{
    CarRepository, DriverRepository, ManufacturerRepository, PageRenderer, PasswordHasher,
};
use crate::domain::models::PasswordPolicy;
use crate::infrastructure::driven_adapters::config::AppConfig;

use self::middleware::{request_id_middleware, SessionTokens};

/// Driven adapters the web layer is wired to
pub struct Adapters {
    pub manufacturers: Arc<dyn ManufacturerRepository>,
    pub drivers: Arc<dyn DriverRepository>,
    pub cars: Arc<dyn CarRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub renderer: Arc<dyn PageRenderer>,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionTokens>,
    pub renderer: Arc<dyn PageRenderer>,
    pub list_manufacturers_use_case: Arc<ListManufacturersUseCase>,
    pub list_drivers_use_case: Arc<ListDriversUseCase>,
    pub list_cars_use_case: Arc<ListCarsUseCase>,
    pub create_driver_use_case: Arc<CreateDriverUseCase>,
    pub authenticate_driver_use_case: Arc<AuthenticateDriverUseCase>,
    pub get_driver_by_id_use_case: Arc<GetDriverByIdUseCase>,
    pub fleet_summary_use_case: Arc<FleetSummaryUseCase>,
}

impl AppState {
    /// Build every use case over the given adapters
    #[must_use]
    pub fn new(config: &AppConfig, adapters: Adapters) -> Self {
        let Adapters {
            manufacturers,
            drivers,
            cars,
            password_hasher,
            renderer,
        } = adapters;

        Self {
            sessions: Arc::new(SessionTokens::new(&config.session)),
            renderer,
            list_manufacturers_use_case: Arc::new(ListManufacturersUseCase::new(manufacturers.clone())),
            list_drivers_use_case: Arc::new(ListDriversUseCase::new(drivers.clone())),
            list_cars_use_case: Arc::new(ListCarsUseCase::new(cars.clone())),
            create_driver_use_case: Arc::new(
                CreateDriverUseCase::new(drivers.clone(), password_hasher.clone())
                    .with_password_policy(PasswordPolicy::with_min_length(config.password.min_length)),
            ),
            authenticate_driver_use_case: Arc::new(AuthenticateDriverUseCase::new(
                drivers.clone(),
                password_hasher,
            )),
            get_driver_by_id_use_case: Arc::new(GetDriverByIdUseCase::new(drivers.clone())),
            fleet_summary_use_case: Arc::new(FleetSummaryUseCase::new(manufacturers, drivers, cars)),
        }
    }
}

/// The full router with tracing and request ids
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(handlers::home::router())
        .merge(handlers::accounts::router())
        .merge(handlers::manufacturers::router())
        .merge(handlers::drivers::router())
        .merge(handlers::cars::router())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
