pub mod day_service;
pub mod divination_service;
pub mod night_service;
pub mod phase_service;
mod resolution;
pub mod result_service;
pub mod setup_service;
pub mod victory_service;
