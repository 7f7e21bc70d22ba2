//! `sportstracker options` -- show or change options.

use anyhow::{Context, Result};

use crate::cli::{OptionsArgs, OptionsCommands};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `sportstracker options` command.
pub fn run(ctx: &RuntimeContext, args: &OptionsArgs) -> Result<()> {
    let mut document = ctx.open_document()?;

    match &args.command {
        OptionsCommands::Show => {
            if ctx.json {
                output_json(document.options());
            } else {
                let rows: Vec<Vec<String>> = document
                    .options()
                    .entries()
                    .into_iter()
                    .map(|(key, value)| vec![key.to_string(), value])
                    .collect();
                output_table(&["KEY", "VALUE"], &rows);
            }
        }

        OptionsCommands::Set(set_args) => {
            document
                .options_mut()
                .set(&set_args.key, &set_args.value)
                .with_context(|| format!("failed to set option '{}'", set_args.key))?;
            document.store_options().context("failed to save options")?;

            let value = document.options().get(&set_args.key).unwrap_or_default();
            if ctx.json {
                output_json(&serde_json::json!({
                    "key": set_args.key,
                    "value": value,
                }));
            } else if !ctx.quiet {
                println!("Set {} = {}", set_args.key, value);
            }
        }
    }
    Ok(())
}
