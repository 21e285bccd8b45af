pub mod error;
pub mod rng;
pub mod test_setup;
