//! Implementation of the `stager person` command.
//!
//! Responsibility: stage exactly the flags the user provided, build, and
//! display the result.  Requiredness is enforced by the entity, never here —
//! an omitted flag simply means the matching setter is never called.

use tracing::{debug, info, instrument};

use stager_core::prelude::Person;

use crate::{
    cli::PersonArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stager person` command.
///
/// Dispatch sequence:
/// 1. Stage every provided flag (dates parsed with the configured format)
/// 2. `build()` — on failure the aggregated error propagates with every
///    missing field listed at once
/// 3. Print the validated entity as pretty JSON
#[instrument(skip_all)]
pub fn execute(args: PersonArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut builder = Person::builder();

    if let Some(value) = args.first_name {
        builder.first_name(value);
    }
    if let Some(value) = args.last_name {
        builder.last_name(value);
    }
    if let Some(raw) = args.birth_date {
        builder.birth_date(super::parse_date(&raw, &config.defaults.date_format)?);
    }

    debug!("Staged values collected, building");

    let person = builder.build()?;

    info!(
        first_name = person.first_name(),
        last_name = person.last_name(),
        "Person built"
    );

    output.value(&person)?;
    output.success("Person validated and built")?;

    Ok(())
}
