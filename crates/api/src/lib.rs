//! HTTP host for the sitemap: configuration, routing and XML rendering.

pub mod app;
pub mod config;
pub mod context;
