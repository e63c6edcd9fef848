pub mod errors;
pub mod models;
pub mod predictor;
pub mod scenarios;
pub mod tables;
