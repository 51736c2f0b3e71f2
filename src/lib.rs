#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod error;
pub mod lobby;
pub mod metrics;
pub mod question;
pub mod remote;
pub mod report;
pub mod round;
pub mod routes;
pub mod startup;
pub mod word;
