//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::{Formatter, MaskRow};
use maskgen_domain::{MaskRenderer, RangeRecord};
use maskgen_gatekeeper::{Gatekeeper, GatekeeperError};
use maskgen_registry::{group_by_operator, load_records, RecordFilter, RegistryClient, Source};
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Per-run rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Print a comment line before each row
    pub comment: bool,
    /// Print an operator header when the operator changes
    pub group: bool,
    /// Text before the row code
    pub prefix: String,
    /// Text after every mask
    pub suffix: String,
    /// Wildcard glyph
    pub wildcard: char,
}

impl GenerateOptions {
    /// Merge command-line flags over the configured output settings.
    pub fn new(args: &GenerateArgs, config: &Config) -> Self {
        Self {
            comment: args.comment,
            group: args.group,
            prefix: args
                .prefix
                .clone()
                .unwrap_or_else(|| config.output.prefix.clone()),
            suffix: args
                .suffix
                .clone()
                .unwrap_or_else(|| config.output.suffix.clone()),
            wildcard: config.output.wildcard,
        }
    }
}

/// Counts for one generate run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Rows considered after filtering
    pub rows: usize,
    /// Rows that produced masks
    pub compiled: usize,
    /// Rows reported and skipped
    pub skipped: usize,
    /// Masks written
    pub masks: usize,
}

/// Execute the generate command.
pub async fn execute_generate(
    args: GenerateArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<GenerateSummary> {
    let mut registry = config.registry.clone();
    if let Some(url) = &args.url {
        registry.url = url.clone();
    }

    let source = match &args.file {
        Some(path) => Source::File(path.clone()),
        None => Source::Url(registry.url.clone()),
    };

    let client = RegistryClient::new(registry)?;
    let records = load_records(&client, &source).await?;

    let filter = RecordFilter {
        region: args.region.clone(),
        operator: args.operator.clone(),
    };
    let mut records = filter.apply(records);
    if args.group {
        group_by_operator(&mut records);
    }

    let gatekeeper = Gatekeeper::new(config.validation.clone());
    let options = GenerateOptions::new(&args, config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = compile_records(
        &records,
        &gatekeeper,
        &options,
        formatter,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    info!(
        rows = summary.rows,
        compiled = summary.compiled,
        skipped = summary.skipped,
        masks = summary.masks,
        "Generation finished"
    );
    Ok(summary)
}

/// Validate, decompose and print every row.
///
/// Masks, comments and group headers go to `out`; skipped rows are reported
/// to `err`. A bad row never stops the run.
pub fn compile_records<W: Write, E: Write>(
    records: &[RangeRecord],
    gatekeeper: &Gatekeeper,
    options: &GenerateOptions,
    formatter: &Formatter,
    out: &mut W,
    err: &mut E,
) -> Result<GenerateSummary> {
    let mut summary = GenerateSummary::default();
    let mut json_rows = Vec::new();
    let mut current_operator: Option<&str> = None;

    for record in records {
        summary.rows += 1;

        let patterns = match gatekeeper
            .admit(record)
            .and_then(|interval| interval.decompose().map_err(GatekeeperError::from))
        {
            Ok(patterns) => patterns,
            Err(e) => {
                warn!(
                    code = %record.code,
                    from = %record.from,
                    to = %record.to,
                    reason = %e,
                    "Skipping row"
                );
                writeln!(err, "{}", formatter.rejection(record, &e))?;
                summary.skipped += 1;
                continue;
            }
        };

        let renderer = MaskRenderer::new(format!("{}{}", options.prefix, record.code), &options.suffix)
            .with_wildcard(options.wildcard);
        debug!(code = %record.code, from = %record.from, to = %record.to, masks = patterns.len(), "Compiled row");
        summary.compiled += 1;
        summary.masks += patterns.len();

        match formatter.format() {
            OutputFormat::Text => {
                if options.group && current_operator != Some(record.operator.as_str()) {
                    writeln!(out, "{}", formatter.group_header(&record.operator))?;
                    current_operator = Some(record.operator.as_str());
                }
                if options.comment {
                    writeln!(out, "{}", formatter.comment(record))?;
                }
                renderer.write_all(out, &patterns)?;
            }
            OutputFormat::Json => {
                json_rows.push(MaskRow::new(record, renderer.render_all(&patterns)));
            }
        }
    }

    if formatter.format() == OutputFormat::Json {
        writeln!(out, "{}", formatter.mask_rows_json(&json_rows)?)?;
    }
    out.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GenerateOptions {
        GenerateOptions::new(&GenerateArgs::default(), &Config::default())
    }

    fn run(records: &[RangeRecord], options: &GenerateOptions, format: OutputFormat) -> (String, String, GenerateSummary) {
        let formatter = Formatter::new(format, false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = compile_records(
            records,
            &Gatekeeper::default_config(),
            options,
            &formatter,
            &mut out,
            &mut err,
        )
        .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            summary,
        )
    }

    #[test]
    fn test_options_merge_flags_over_config() {
        let mut config = Config::default();
        config.output.prefix = "8".to_string();
        config.output.suffix = "@gw".to_string();

        let args = GenerateArgs {
            prefix: Some("+7".to_string()),
            ..GenerateArgs::default()
        };
        let options = GenerateOptions::new(&args, &config);

        assert_eq!(options.prefix, "+7");
        assert_eq!(options.suffix, "@gw");
        assert_eq!(options.wildcard, 'X');
    }

    #[test]
    fn test_single_row_text() {
        let records = [RangeRecord::new("916", "1200000", "1299999", "100000", "Op", "Region")];

        let (out, err, summary) = run(&records, &options(), OutputFormat::Text);

        assert_eq!(out, "91612XXXXX\n");
        assert!(err.is_empty());
        assert_eq!(summary.compiled, 1);
        assert_eq!(summary.masks, 1);
    }

    #[test]
    fn test_prefix_precedes_code() {
        let records = [RangeRecord::new("900", "0000000", "0000009", "10", "Op", "Region")];
        let options = GenerateOptions {
            prefix: "8".to_string(),
            suffix: "!".to_string(),
            ..options()
        };

        let (out, _, _) = run(&records, &options, OutputFormat::Text);

        assert_eq!(out, "8900000000X!\n");
    }

    #[test]
    fn test_rejected_row_is_reported_and_skipped() {
        let records = [
            RangeRecord::new("916", "0000000", "0000009", "11", "Op", "Region"),
            RangeRecord::new("916", "0000010", "0000019", "10", "Op", "Region"),
        ];

        let (out, err, summary) = run(&records, &options(), OutputFormat::Text);

        assert_eq!(out, "916000001X\n");
        assert!(err.starts_with("wrong interval: from 0000000 to 0000009 != 11"));
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.compiled, 1);
    }

    #[test]
    fn test_comment_and_group_lines() {
        let records = [
            RangeRecord::new("900", "0000000", "0000009", "10", "A", "R1"),
            RangeRecord::new("900", "0000010", "0000019", "10", "A", "R2"),
            RangeRecord::new("901", "0000000", "0000009", "10", "B", "R1"),
        ];
        let options = GenerateOptions {
            comment: true,
            group: true,
            ..options()
        };

        let (out, _, _) = run(&records, &options, OutputFormat::Text);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "; A",
                "; 900, 0000000, 0000009, 10, A, R1",
                "900000000X",
                "; 900, 0000010, 0000019, 10, A, R2",
                "900000001X",
                "; B",
                "; 901, 0000000, 0000009, 10, B, R1",
                "901000000X",
            ]
        );
    }

    #[test]
    fn test_json_output() {
        let records = [
            RangeRecord::new("916", "0000000", "0000045", "46", "Op", "Region"),
            RangeRecord::new("916", "1", "2", "2", "Op", "Region"),
        ];

        let (out, err, summary) = run(&records, &options(), OutputFormat::Json);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["masks"][0], "91600000[0-3]X");
        assert_eq!(rows[0]["masks"][1], "916000004[0-5]");
        assert!(err.contains("expected 7"));
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_empty_input_json_is_empty_array() {
        let (out, _, summary) = run(&[], &options(), OutputFormat::Json);
        assert_eq!(out.trim(), "[]");
        assert_eq!(summary, GenerateSummary::default());
    }
}
