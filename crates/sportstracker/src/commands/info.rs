//! `sportstracker info` -- show the data directory and stored data summary.

use anyhow::Result;

use st_config::options::OPTIONS_FILE;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `sportstracker info` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let document = ctx.open_document()?;
    let options_path = document.data_dir().join(OPTIONS_FILE);

    if ctx.json {
        output_json(&serde_json::json!({
            "data_dir": document.data_dir().display().to_string(),
            "database": document.database_path().display().to_string(),
            "options_file": options_path.display().to_string(),
            "sport_types": document.sport_types().len(),
            "exercises": document.exercises().len(),
            "notes": document.notes().len(),
        }));
        return Ok(());
    }

    println!("Data directory: {}", document.data_dir().display());
    println!("Database:       {}", document.database_path().display());
    println!("Options file:   {}", options_path.display());
    println!("Sport types:    {}", document.sport_types().len());
    println!("Exercises:      {}", document.exercises().len());
    println!("Notes:          {}", document.notes().len());
    Ok(())
}
