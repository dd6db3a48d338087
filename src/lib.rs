// Library for tests to access modules

pub mod config;
pub mod models;
pub mod nagios_repo;
pub mod report;
pub mod webhook_repo;
