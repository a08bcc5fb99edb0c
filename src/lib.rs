pub mod advisor;
pub mod config;
pub mod error;
pub mod prompt;
pub mod recommend;
pub mod telemetry;
// cmd and reports are binary modules (in main.rs); they render to the
// console and stay out of the library surface.
