//! Catalog Server - roofing-company product catalog backend
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): RESTful routes for products, admin login, and
//!   the contact/assistant relays
//! - **Database** (`db`): embedded SurrealDB store and product repository
//! - **Auth** (`auth`): JWT admin sessions guarding mutating routes
//! - **Services** (`services`): server-side relays for the third-party
//!   email and generative-text APIs
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # configuration, state, server loop
//! ├── auth/          # JWT service, admin middleware
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # external relays (mailer, assistant)
//! ├── db/            # database layer
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{AdminSession, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#
    );
}
