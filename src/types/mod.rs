pub mod company;
pub mod config;
pub mod report;
pub mod scoring;
