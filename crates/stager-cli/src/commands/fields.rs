//! Implementation of the `stager fields` command.

use stager_core::prelude::{FieldDef, NewUser, Person};

use crate::{
    cli::{EntityKind, FieldsArgs, FieldsFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: FieldsArgs, output: OutputManager) -> CliResult<()> {
    let fields: &[FieldDef] = match args.entity {
        EntityKind::Person => &Person::FIELDS,
        EntityKind::User => &NewUser::FIELDS,
    };

    match args.format {
        FieldsFormat::Table => {
            output.header(&format!("Fields of '{}':", args.entity))?;
            for field in fields {
                output.print(&format!("  {field}"))?;
            }
        }

        FieldsFormat::List => {
            for field in fields {
                println!("{}", field.name());
            }
        }

        FieldsFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(fields).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
