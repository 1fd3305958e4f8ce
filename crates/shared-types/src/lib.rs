pub mod error;

// Office domain records
pub mod agency;
pub mod assistant;
pub mod attachment;
pub mod auth;
pub mod case;
pub mod common;
pub mod config;
pub mod customer;
pub mod dashboard;
pub mod employee;
pub mod finance;
pub mod provider;
pub mod session;
pub mod task;

pub use error::*;

pub use agency::*;
pub use assistant::*;
pub use attachment::*;
pub use auth::*;
pub use case::*;
pub use common::*;
pub use config::*;
pub use customer::*;
pub use dashboard::*;
pub use employee::*;
pub use finance::*;
pub use provider::*;
pub use session::*;
pub use task::*;
