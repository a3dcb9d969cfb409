//! The `NewUser` entity and its staged builder.
//!
//! Same shape as [`super::person`]: required credentials, optional date of
//! birth, construction only through the validating builder.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    error::ValidationErrors,
    fields::{Absent, FieldDef},
    validation::check_required,
};

/// An immutable registration record.
///
/// Serializable but not deserializable — construction goes through the
/// builder only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    user_name: String,
    password: String,
    date_of_birth: Option<NaiveDate>,
}

impl NewUser {
    /// Field declarations, in declaration order.
    pub const FIELDS: [FieldDef; 3] = [
        FieldDef::required("user_name"),
        FieldDef::required("password"),
        FieldDef::optional("date_of_birth"),
    ];

    /// Start building a new `NewUser`.
    pub fn builder() -> NewUserBuilder {
        NewUserBuilder::new()
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }
    pub fn password(&self) -> &str {
        &self.password
    }
    pub const fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }
}

/// Staged builder for [`NewUser`].
#[derive(Debug, Clone, Default)]
pub struct NewUserBuilder {
    user_name: String,
    password: String,
    date_of_birth: Option<NaiveDate>,
}

impl NewUserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.user_name = value.into();
        self
    }

    pub fn password(&mut self, value: impl Into<String>) -> &mut Self {
        self.password = value.into();
        self
    }

    pub fn date_of_birth(&mut self, value: impl Into<Option<NaiveDate>>) -> &mut Self {
        self.date_of_birth = value.into();
        self
    }

    /// Check the staged values against the declaration table.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let slots: [&dyn Absent; 3] = [&self.user_name, &self.password, &self.date_of_birth];
        check_required(&NewUser::FIELDS, &slots)
    }

    /// Validate, then freeze the staged values into a [`NewUser`].
    pub fn build(&self) -> Result<NewUser, ValidationErrors> {
        self.validate()?;
        Ok(NewUser {
            user_name: self.user_name.clone(),
            password: self.password.clone(),
            date_of_birth: self.date_of_birth,
        })
    }
}
