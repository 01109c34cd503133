use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use confdiff_engine::{char_spans, diff_selected, DiffItem, SpanKind, ValueDiff};
use confdiff_parser::ConfigMapping;
use confdiff_server::{ConfdiffServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Keys(args) => cmd_keys(args, format),
        Command::Get(args) => cmd_get(args),
        Command::Diff(args) => cmd_diff(args, format),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn read_mapping(path: &Path) -> anyhow::Result<ConfigMapping> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(ConfigMapping::parse(&text))
}

fn cmd_keys(args: KeysArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mapping = read_mapping(&args.file)?;
    match format {
        OutputFormat::Json => {
            let keys: Vec<&str> = mapping.keys().collect();
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        OutputFormat::Text => {
            for key in mapping.keys() {
                println!("{key}");
            }
        }
    }
    Ok(())
}

fn cmd_get(args: GetArgs) -> anyhow::Result<()> {
    let mapping = read_mapping(&args.file)?;
    // Lookup never fails; an absent key prints as the empty value.
    println!("{}", mapping.value(&args.key));
    Ok(())
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    let old_text = fs::read_to_string(&args.left)
        .with_context(|| format!("failed to read {}", args.left.display()))?;
    let new_text = fs::read_to_string(&args.right)
        .with_context(|| format!("failed to read {}", args.right.display()))?;
    let right_key = args.right_key.as_deref().unwrap_or(&args.key);

    let Some(diff) = diff_selected(&old_text, &new_text, &args.key, right_key) else {
        bail!("a non-empty key must be given for both files");
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
        OutputFormat::Text if diff.is_empty() => {
            println!("{}", "(no lines on either side)".dimmed());
        }
        OutputFormat::Text => render_diff(&diff),
    }
    Ok(())
}

fn render_diff(diff: &ValueDiff) {
    for item in &diff.items {
        match item {
            DiffItem::Unchanged { line } => println!("  {line}"),
            DiffItem::Removed { line } => println!("{}", format!("- {line}").red()),
            DiffItem::Added { line } => println!("{}", format!("+ {line}").green()),
            DiffItem::Modified { old, new } => render_modified(old, new),
        }
    }
}

/// Prints a modified pair as two rows with the differing characters
/// shown in reverse video.
fn render_modified(old: &str, new: &str) {
    let spans = char_spans(old, new);

    print!("{}", "- ".red());
    for span in &spans {
        match span.kind {
            SpanKind::Common => print!("{}", span.text.red()),
            SpanKind::Removed => print!("{}", span.text.red().reversed()),
            SpanKind::Added => {}
        }
    }
    println!();

    print!("{}", "+ ".green());
    for span in &spans {
        match span.kind {
            SpanKind::Common => print!("{}", span.text.green()),
            SpanKind::Added => print!("{}", span.text.green().reversed()),
            SpanKind::Removed => {}
        }
    }
    println!();
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(base_url) = args.base_url {
        config.public_base_url = base_url;
    }
    if let Some(api_key) = args.api_key {
        config.api_key = Some(api_key);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(ConfdiffServer::new(config).serve())?;
    Ok(())
}
