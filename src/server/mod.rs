//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! tower-sessions for the signed-in guest.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, form extraction and responses
//! - **Service Layer** (`service/`) - The authenticated mutation pipeline and read views
//! - **Data Layer** (`data/`) - Repositories over SeaORM, entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session accessors and the authentication gate
//! - **Navigation** (`navigation`) - Where the browser goes after each mutation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, view cache)
//! - **Startup** (`startup`) - Initialization of database, sessions and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** reads the guest from the session and extracts the form
//! 3. **Service** authenticates, authorizes, validates, persists and invalidates views
//! 4. **Data** runs the query and converts entities to domain models
//! 5. **Controller** redirects to the navigation target or returns the view as JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod navigation;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
