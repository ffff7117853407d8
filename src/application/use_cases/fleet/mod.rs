//! Fleet-wide use cases

mod fleet_summary;

pub use fleet_summary::{FleetSummary, FleetSummaryUseCase};
