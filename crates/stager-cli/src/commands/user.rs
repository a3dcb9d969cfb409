//! Implementation of the `stager user` command.
//!
//! Same shape as the `person` handler, for the registration entity.

use tracing::{info, instrument};

use stager_core::prelude::NewUser;

use crate::{
    cli::UserArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stager user` command.
#[instrument(skip_all)]
pub fn execute(args: UserArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut builder = NewUser::builder();

    if let Some(value) = args.user_name {
        builder.user_name(value);
    }
    if let Some(value) = args.password {
        builder.password(value);
    }
    if let Some(raw) = args.date_of_birth {
        builder.date_of_birth(super::parse_date(&raw, &config.defaults.date_format)?);
    }

    let user = builder.build()?;

    // The password is deliberately kept out of the log event.
    info!(user_name = user.user_name(), "User built");

    output.value(&user)?;
    output.success("User validated and built")?;

    Ok(())
}
