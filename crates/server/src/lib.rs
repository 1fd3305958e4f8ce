pub mod api;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod auth;

#[cfg(feature = "server")]
pub mod directory;

#[cfg(feature = "server")]
pub mod fixtures;

#[cfg(feature = "server")]
pub mod store;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;
