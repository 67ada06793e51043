//! Generate command implementation

use crate::manifest::DeclarationManifest;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use withtostring_codegen::{DirectoryFiler, MemoryFiler, Processor, RunReport};
use withtostring_core::{GeneratorConfig, LogLevel, model::source_path_for};
use withtostring_logging::{TracingSink, init_logging};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "withtostring.toml";

/// Arguments of `withtostring generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub manifest: PathBuf,
    pub output: Option<PathBuf>,
    pub marker: Option<String>,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub log_level: Option<String>,
}

/// Load the config file (if any) and apply command-line overrides
pub fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            GeneratorConfig::from_file(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("Failed to load config: {}", DEFAULT_CONFIG_FILE))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if let Some(marker) = &args.marker {
        config.marker_annotation = marker.clone();
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Run the generate command
pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let level: LogLevel = config.log_level.parse().map_err(anyhow::Error::msg)?;
    init_logging(level);
    tracing::debug!(?config, "configuration resolved");

    let manifest = DeclarationManifest::from_file(&args.manifest)?;
    manifest
        .validate()
        .with_context(|| format!("Invalid manifest: {}", args.manifest.display()))?;
    tracing::debug!(types = manifest.types.len(), "manifest loaded");

    let sink = TracingSink::new();
    let mut stdout = std::io::stdout().lock();
    execute(&config, manifest, args.dry_run, &sink, &mut stdout)?;

    if sink.has_errors() {
        anyhow::bail!(
            "{} error(s) reported during generation",
            sink.error_count()
        );
    }
    Ok(())
}

/// Process the manifest's declarations and report what happened to `out`.
///
/// With `dry_run` the generated sources are printed instead of written.
pub fn execute(
    config: &GeneratorConfig,
    manifest: DeclarationManifest,
    dry_run: bool,
    sink: &TracingSink,
    out: &mut dyn Write,
) -> Result<RunReport> {
    let processor = Processor::from_config(config);
    let mut query = manifest.into_query();

    let report = if dry_run {
        let mut filer = MemoryFiler::new();
        let report = processor.run_to_completion(&mut query, &mut filer, sink);
        for name in filer.names() {
            writeln!(out, "// {}", source_path_for(name).display())?;
            writeln!(out, "{}", filer.get(name).unwrap_or_default())?;
        }
        report
    } else {
        let mut filer = DirectoryFiler::new(&config.output_dir);
        let report = processor.run_to_completion(&mut query, &mut filer, sink);
        for artifact in report.outcomes().filter_map(|o| o.artifact.as_deref()) {
            writeln!(out, "✓ {}", filer.path_for(artifact).display())?;
        }
        report
    };

    writeln!(
        out,
        "Generated: {}, skipped: {}, failed: {}",
        report.generated(),
        report.skipped(),
        report.failed()
    )?;
    Ok(report)
}
