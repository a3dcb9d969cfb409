//! Core domain layer for Stager.
//!
//! This module contains pure business logic with ZERO external side effects.
//! Everything here is synchronous, in-memory, and allocation-only.
//!
//! ## Layer rules
//!
//! - **No async**: building and validating are bounded, immediate operations
//! - **No I/O**: no filesystem, network, or clock access
//! - **No tracing**: observability belongs to the CLI layer, not the domain
//! - **Immutable entities**: once built, an entity has no mutators
//! - **Single failure mode**: the only error raised here is [`ValidationErrors`]
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod fields;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    new_user::{NewUser, NewUserBuilder},
    person::{Person, PersonBuilder},
};

pub use error::ValidationErrors;

pub use fields::{Absent, FieldDef};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Builder Tests (cross-module)
    // ========================================================================

    #[test]
    fn person_builder_basic() {
        let person = Person::builder()
            .first_name("James")
            .last_name("Melvin")
            .build()
            .unwrap();

        assert_eq!(person.first_name(), "James");
        assert_eq!(person.last_name(), "Melvin");
        assert_eq!(person.birth_date(), None); // Optional, left unset
    }

    #[test]
    fn person_builder_reports_all_missing_fields() {
        let errors = Person::builder().build().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("first_name"), Some("Value is required"));
        assert_eq!(errors.get("last_name"), Some("Value is required"));
        assert_eq!(errors.get("birth_date"), None); // Optional, never reported
    }

    #[test]
    fn new_user_builder_basic() {
        let user = NewUser::builder()
            .user_name("jmelvin")
            .password("hunter2")
            .build()
            .unwrap();

        assert_eq!(user.user_name(), "jmelvin");
        assert_eq!(user.date_of_birth(), None);
    }

    // ========================================================================
    // Declaration Table Tests
    // ========================================================================

    #[test]
    fn person_declares_fields_in_order() {
        let names: Vec<_> = Person::FIELDS.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["first_name", "last_name", "birth_date"]);
    }

    #[test]
    fn person_required_flags_match_contract() {
        assert!(Person::FIELDS[0].is_required());
        assert!(Person::FIELDS[1].is_required());
        assert!(!Person::FIELDS[2].is_required());
    }

    #[test]
    fn error_order_follows_declaration_order() {
        let errors = NewUser::builder().build().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["user_name", "password"]);
    }

    // ========================================================================
    // Error Aggregate Tests (cross-module)
    // ========================================================================

    #[test]
    fn validate_without_build_is_observable() {
        let mut builder = Person::builder();
        builder.first_name("James");

        let errors = builder.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("last_name"), Some("Value is required"));
    }

    #[test]
    fn display_lists_every_offending_field() {
        let errors = Person::builder().build().unwrap_err();
        let rendered = errors.to_string();

        assert!(rendered.contains("first_name"));
        assert!(rendered.contains("last_name"));
        assert!(rendered.contains("Value is required"));
    }
}
