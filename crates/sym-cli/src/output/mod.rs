use serde::Serialize;

use crate::cli::OutputFormat;

pub mod catalog;
pub mod text;

pub use text::TextRender;

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextRender>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(value.render_text()),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TextRender>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
