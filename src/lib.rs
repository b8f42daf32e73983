//! # SchoolHub API
//!
//! Backend for a role-based school app used by students, teachers and
//! administrators. Records live in a hosted database and auth service that
//! this crate talks to over HTTP; push notifications are relayed to mobile
//! devices through an external gateway.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # schoolhub-cli commands (notify, login, seed)
//! ├── middleware/       # Bearer-token and section guard extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Sign-in, sign-out, profile, registration
//! │   ├── navigation/  # Gate decision endpoint
//! │   ├── lectures/    # Lecture timetable
//! │   ├── teachers/    # Staff directory
//! │   ├── exams/       # Exam schedule
//! │   ├── notifications/ # In-app feed
//! │   └── push/        # Push relay function
//! ├── navigation.rs     # Role router / navigation gate
//! └── session/          # Session store and client
//! ```
//!
//! Each feature module follows the same layout: `controller.rs` (handlers),
//! `service.rs` (remote calls), `model.rs` (re-exported models) and
//! `router.rs`.
//!
//! ## Roles and sections
//!
//! Every identity carries at most one role, assigned by an admin through the
//! token's `app_metadata.role` claim. Each role has a home section; anyone
//! without a role (or without a session) belongs on the login screen.
//! [`navigation::decide_destination`] is the single source of that rule and
//! both the HTTP guards and [`session::SchoolClient`] use it.
//!
//! ## Environment
//!
//! ```bash
//! SUPABASE_URL=https://project.supabase.co
//! SUPABASE_ANON_KEY=public-anon-key
//! SUPABASE_JWT_SECRET=jwt-secret
//! EXPO_ACCESS_TOKEN=expo-token
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod cli;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod navigation;
pub mod router;
pub mod session;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use schoolhub_auth;
pub use schoolhub_config;
pub use schoolhub_core;
pub use schoolhub_models;
pub use schoolhub_push;
pub use schoolhub_remote;
