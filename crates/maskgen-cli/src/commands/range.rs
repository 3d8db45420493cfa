//! Range command implementation.

use crate::cli::RangeArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use maskgen_domain::{Interval, MaskRenderer};
use std::io::{self, Write};

/// Execute the range command.
pub async fn execute_range(args: RangeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let stdout = io::stdout();
    write_range(&args, config, formatter, &mut stdout.lock())
}

/// Compile one interval and write its masks to `out`.
pub fn write_range<W: Write>(
    args: &RangeArgs,
    config: &Config,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    let interval = Interval::parse(&args.low, &args.high)?;
    let patterns = interval.decompose()?;

    let prefix = args.prefix.as_deref().unwrap_or(&config.output.prefix);
    let suffix = args.suffix.as_deref().unwrap_or(&config.output.suffix);
    let renderer = MaskRenderer::new(prefix, suffix).with_wildcard(config.output.wildcard);

    match formatter.format() {
        OutputFormat::Text => renderer.write_all(out, &patterns)?,
        OutputFormat::Json => {
            let masks = renderer.render_all(&patterns);
            writeln!(out, "{}", formatter.range_json(&args.low, &args.high, &masks)?)?;
        }
    }
    out.flush()?;
    Ok(())
}
