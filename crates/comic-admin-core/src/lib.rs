//! Comic Admin Core
//!
//! Everything the admin UI needs that is not rendering:
//! - domain: backend entities and the schema used to list/edit them
//! - api: HTTP client for the store backend
//! - manager: generic list/create/edit/delete state and actions
//! - catalog: filtering, sorting, paging and statistics over fetched comics
//! - config: build-time configuration
//! - notice: user-facing notifications

pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod manager;
pub mod notice;

pub use api::{ApiClient, ApiError, ApiResult};
pub use config::AppConfig;
pub use notice::{Notice, NoticeTone};
pub use domain::{EntityId, EntityKind, Resource};
