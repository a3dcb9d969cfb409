//! Stager Core - Staged Construction of Immutable Records
//!
//! This crate provides the domain layer for the Stager toolkit: immutable
//! entities assembled through fluent, staged builders with deferred,
//! aggregated validation.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stager-cli (CLI)              │
//! │      (Demo surface, JSON output)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Entities + Staged Builders         │
//! │        (Person, NewUser, ...)           │
//! │   setters stage, build() validates      │
//! └──────────────────┬──────────────────────┘
//!                    │ consults
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Field Declarations + Validation       │
//! │  (FieldDef table, Absent, one-pass      │
//! │        required-field check)            │
//! └──────────────────┬──────────────────────┘
//!                    │ produces on failure
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ValidationErrors               │
//! │   (ordered field → message aggregate)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stager_core::prelude::*;
//!
//! // All required fields staged — build succeeds.
//! let person = Person::builder()
//!     .first_name("James")
//!     .last_name("Melvin")
//!     .build()
//!     .unwrap();
//! assert_eq!(person.first_name(), "James");
//!
//! // Missing required fields are reported together, in one pass.
//! let errors = Person::builder().build().unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        Absent, FieldDef, NewUser, NewUserBuilder, Person, PersonBuilder, ValidationErrors,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
