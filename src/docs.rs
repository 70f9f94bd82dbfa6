//! Markdown documentation of the variables a record reads.

use crate::Record;
use std::{fs, path::Path};

/// Render a markdown summary table of the environment variables bound into `R`
///
/// Unsettable fields are left out since the binder never reads them.
pub fn env_table<R: Record>() -> String {
    let mut md = String::new();

    md.push_str("## Environment Variables Summary\n\n");
    md.push_str("| Variable | Field | Type |\n");
    md.push_str("|----------|-------|------|\n");
    for field in R::fields().iter().filter(|field| field.settable) {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            field.resolved_key(),
            field.name,
            field.kind
        ));
    }

    md
}

/// Write the table from [`env_table`] to a markdown file
///
/// # Example
/// ```no_run
/// use envar::Envar;
///
/// #[derive(Envar)]
/// struct Config {
///     #[envar("SERVICE_PORT")]
///     pub port: i32,
/// }
///
/// envar::docs::write_docs::<Config>("CONFIG.md").unwrap();
/// ```
pub fn write_docs<R: Record>(path: impl AsRef<Path>) -> std::io::Result<()> {
    fs::write(path, env_table::<R>())
}
