//! The `Person` entity and its staged builder.
//!
//! `Person` is the reference entity for the staged-construction pattern:
//! two required name fields and one optional date. Once a `Person` exists,
//! its required fields are guaranteed non-empty — the only construction
//! path is [`PersonBuilder::build`], which validates first.
//!
//! # Staged builder
//!
//! Setters take `&mut self` and return `&mut Self` (the `std::process::Command`
//! convention). A failed `build()` therefore leaves the builder alive with
//! its staged values intact: the caller can supply the missing fields and
//! call `build()` again.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the CLI layer, not the domain.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    error::ValidationErrors,
    fields::{Absent, FieldDef},
    validation::check_required,
};

// ── Entity ────────────────────────────────────────────────────────────────────

/// An immutable person record.
///
/// Guaranteed on construction:
/// - `first_name` is non-empty
/// - `last_name` is non-empty
/// - `birth_date` may be absent (optional field)
///
/// Serializable but deliberately not deserializable: the builder is the only
/// construction path, so nothing can smuggle in an unvalidated instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    birth_date: Option<NaiveDate>,
}

impl Person {
    /// Field declarations, in declaration order.
    ///
    /// The builder's staging slots and `validate()` walk this table; the CLI
    /// `fields` command prints it.
    pub const FIELDS: [FieldDef; 3] = [
        FieldDef::required("first_name"),
        FieldDef::required("last_name"),
        FieldDef::optional("birth_date"),
    ];

    /// Start building a new `Person`.
    pub fn builder() -> PersonBuilder {
        PersonBuilder::new()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub const fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Staged builder for [`Person`].
///
/// One staging slot per entity field, initialized to the type's absent value.
/// Setters store unconditionally (no validation at set time, last write
/// wins); all checking is deferred to [`Self::build`] so every missing field
/// is reported in one pass.
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    first_name: String,
    last_name: String,
    birth_date: Option<NaiveDate>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the first name.
    pub fn first_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.first_name = value.into();
        self
    }

    /// Stage the last name.
    pub fn last_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.last_name = value.into();
        self
    }

    /// Stage the birth date. Accepts a bare `NaiveDate` or an
    /// `Option<NaiveDate>` (so a caller can explicitly stage "absent").
    pub fn birth_date(&mut self, value: impl Into<Option<NaiveDate>>) -> &mut Self {
        self.birth_date = value.into();
        self
    }

    /// Check the staged values against the declaration table.
    ///
    /// Only required fields are checked. A staged value equal to its type
    /// default counts as missing; every missing field is reported together
    /// under `"Value is required"`. Staged values are not touched.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let slots: [&dyn Absent; 3] = [&self.first_name, &self.last_name, &self.birth_date];
        check_required(&Person::FIELDS, &slots)
    }

    /// Validate, then freeze the staged values into a [`Person`].
    ///
    /// On failure the builder is left untouched — call the missing setters
    /// and `build()` again. On success the builder remains usable and later
    /// builds produce independent entities from whatever is still staged.
    pub fn build(&self) -> Result<Person, ValidationErrors> {
        self.validate()?;
        Ok(Person {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── Round-trip ────────────────────────────────────────────────────────────

    #[test]
    fn full_build_round_trips_every_field() {
        let person = Person::builder()
            .first_name("James")
            .last_name("Melvin")
            .birth_date(date(1987, 4, 12))
            .build()
            .unwrap();

        assert_eq!(person.first_name(), "James");
        assert_eq!(person.last_name(), "Melvin");
        assert_eq!(person.birth_date(), Some(date(1987, 4, 12)));
    }

    #[test]
    fn unset_optional_field_reads_back_absent() {
        let person = Person::builder()
            .first_name("James")
            .last_name("Melvin")
            .build()
            .unwrap();

        assert_eq!(person.birth_date(), None);
    }

    // ── Required-field invariant ──────────────────────────────────────────────

    #[test]
    fn missing_last_name_reports_exactly_that_field() {
        let errors = Person::builder().first_name("James").build().unwrap_err();

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["last_name"]);
        assert_eq!(errors.get("last_name"), Some("Value is required"));
    }

    #[test]
    fn missing_first_name_reports_exactly_that_field() {
        let errors = Person::builder().last_name("Melvin").build().unwrap_err();

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["first_name"]);
    }

    #[test]
    fn empty_builder_reports_both_required_fields() {
        let errors = Person::builder().build().unwrap_err();

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["first_name", "last_name"]);
    }

    #[test]
    fn optional_birth_date_is_never_required() {
        // All required fields set, optional left unset: must pass.
        assert!(
            Person::builder()
                .first_name("James")
                .last_name("Melvin")
                .validate()
                .is_ok()
        );
    }

    // ── Default-as-missing sentinel (pinned open question) ────────────────────

    #[test]
    fn empty_string_reads_as_missing() {
        // An explicitly staged empty string is indistinguishable from a
        // setter that was never called. Coarse by contract.
        let errors = Person::builder()
            .first_name("")
            .last_name("Melvin")
            .build()
            .unwrap_err();

        assert_eq!(errors.get("first_name"), Some("Value is required"));
    }

    // ── Last-write-wins ───────────────────────────────────────────────────────

    #[test]
    fn second_setter_call_overwrites_first() {
        let person = Person::builder()
            .first_name("James")
            .first_name("Jim")
            .last_name("Melvin")
            .build()
            .unwrap();

        assert_eq!(person.first_name(), "Jim");
    }

    #[test]
    fn overwriting_with_empty_reverts_to_missing() {
        let errors = Person::builder()
            .first_name("James")
            .first_name("")
            .last_name("Melvin")
            .build()
            .unwrap_err();

        assert_eq!(errors.get("first_name"), Some("Value is required"));
    }

    // ── Idempotent validation ─────────────────────────────────────────────────

    #[test]
    fn repeated_validation_yields_identical_errors() {
        let mut builder = Person::builder();
        builder.first_name("James");

        let first = builder.validate().unwrap_err();
        let second = builder.validate().unwrap_err();
        let third = builder.build().unwrap_err();

        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    // ── Retry path ────────────────────────────────────────────────────────────

    #[test]
    fn failed_build_then_fix_up_succeeds() {
        let mut builder = Person::builder();
        builder.first_name("James");

        let errors = builder.build().unwrap_err();
        assert_eq!(errors.get("last_name"), Some("Value is required"));

        builder.last_name("Melvin");
        let person = builder.build().unwrap();
        assert_eq!(person.first_name(), "James");
        assert_eq!(person.last_name(), "Melvin");
    }

    #[test]
    fn builder_reuse_after_success_produces_independent_entities() {
        let mut builder = Person::builder();
        builder.first_name("James").last_name("Melvin");

        let first = builder.build().unwrap();
        builder.first_name("Jim");
        let second = builder.build().unwrap();

        assert_eq!(first.first_name(), "James");
        assert_eq!(second.first_name(), "Jim");
        assert_eq!(second.last_name(), "Melvin");
    }

    // ── Staging explicit absence ──────────────────────────────────────────────

    #[test]
    fn birth_date_accepts_explicit_none() {
        let mut builder = Person::builder();
        builder
            .first_name("James")
            .last_name("Melvin")
            .birth_date(date(1987, 4, 12))
            .birth_date(None);

        assert_eq!(builder.build().unwrap().birth_date(), None);
    }
}
