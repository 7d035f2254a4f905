use anyhow::{Context, Result, bail};
use clap::Parser;
use scriptweaver_config::Config;
use scriptweaver_engine::render::render_report_text;
use scriptweaver_engine::{
    ConvertError, ConvertOptions, RenderOptions, ScenarioConverter, ValidationConfig,
    ValidationReport, apply_fixes, io,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod cli;

use cli::{Cli, ReportFormat};

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when any input failed.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli)?;
    let inputs = expand_inputs(&cli.inputs)?;
    if cli.output.is_some() && inputs.len() > 1 {
        bail!("--output can only be used with a single input");
    }

    let converter = ScenarioConverter::new(convert_options(&config, cli.wants_validation()))?;
    let mut ok = true;
    for input in &inputs {
        if let Err(e) = process(cli, &config, &converter, input) {
            eprintln!("Error: {}: {e:#}", input.display());
            ok = false;
        }
    }
    Ok(ok)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("config file not found: {}", path.display());
            }
            config
        }
        None => Config::load()?,
    };

    let mut config = loaded.unwrap_or_default();
    if cli.strict {
        config.apply_strict();
    } else if cli.beginner {
        config.apply_beginner();
    }
    Ok(config)
}

fn convert_options(config: &Config, force_validation: bool) -> ConvertOptions {
    let v = &config.validation;
    let validation = (v.enabled || force_validation).then(|| ValidationConfig {
        strict_mode: v.strict_mode,
        rule_system: v.rule_system.clone(),
        extra_vocabulary: v.custom_skills.clone(),
        warning_threshold: v.warning_threshold,
        auto_fix: v.auto_fix,
        beginner_mode: v.beginner_mode,
    });

    ConvertOptions {
        render: RenderOptions {
            title: config.html_title.clone(),
            toc_title: config.toc_title.clone(),
            include_toc: config.include_toc,
            stylesheet: config.load_css_template(),
        },
        validation,
        output_extension: Some(config.output_suffix.clone()),
    }
}

/// Expands glob patterns; plain paths are passed through untouched.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            inputs.push(PathBuf::from(pattern));
            continue;
        }

        let before = inputs.len();
        for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))? {
            let path = entry?;
            if path.is_file() {
                inputs.push(path);
            }
        }
        if inputs.len() == before {
            log::warn!("no files match {pattern}");
        }
    }
    Ok(inputs)
}

/// `scenario.txt` → `scenario.fixed.txt`
fn fixed_path(input: &Path) -> PathBuf {
    match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => input.with_extension(format!("fixed.{ext}")),
        None => input.with_extension("fixed"),
    }
}

fn process(cli: &Cli, config: &Config, converter: &ScenarioConverter, input: &Path) -> Result<()> {
    if cli.fix {
        write_fixed(config, converter, input)?;
    }

    if cli.validate_only {
        let content = io::read_source(input)?;
        let report = converter.validate_text(&content)?;
        print_report(input, &report, cli.format)?;
        warn_threshold(config, &report);
        if report.has_errors() {
            bail!("{} critical issue(s) found", report.summary().critical);
        }
        return Ok(());
    }

    let include_report = cli.validate || config.validation.enabled;
    match converter.convert_file(input, cli.output.as_deref(), include_report) {
        Ok(_) => Ok(()),
        Err(ConvertError::StrictModeRefusal { critical }) => {
            bail!("strict mode refused conversion: {critical} critical issue(s)")
        }
        Err(e) => Err(e.into()),
    }
}

fn write_fixed(config: &Config, converter: &ScenarioConverter, input: &Path) -> Result<()> {
    if !config.validation.auto_fix {
        bail!("auto-fix is disabled in the current configuration");
    }

    let content = io::read_source(input)?;
    let report = converter.validate_text(&content)?;
    let outcome = apply_fixes(&content, &report);
    let output = fixed_path(input);
    io::write_output(&output, &outcome.content)?;
    log::info!("applied {} fix(es) -> {}", outcome.applied, output.display());
    Ok(())
}

fn print_report(input: &Path, report: &ValidationReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Human => {
            println!("== {}", input.display());
            print!("{}", render_report_text(report));
        }
        ReportFormat::Json => {
            let value = serde_json::json!({
                "file": input.display().to_string(),
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn warn_threshold(config: &Config, report: &ValidationReport) {
    let threshold = config.validation.warning_threshold;
    if report.exceeds_warning_threshold(threshold) {
        eprintln!(
            "⚠️ 警告が{}個あります（しきい値: {threshold}）",
            report.summary().warning
        );
    }
}
