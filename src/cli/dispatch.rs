// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;

use crate::audit::audit_config;
use crate::config::{
    default::example_config, load_config, load_config_from, project_config, render_config,
    Applicability, ConfigFormat, LintConfig, TYPE_ENUM,
};
use crate::error::{CommitrcError, ConfigError, Result, ResultExt};
use crate::interpret::TypeVerdict;

use super::args::{
    CheckTypeArgs, Cli, Commands, InitArgs, OutputFormat, RefsArgs, ShowArgs, ValidateArgs,
};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // These two never read the configuration
    match &cli.command {
        Commands::Init(args) => return run_init(args.clone()),
        Commands::Version => return run_version(),
        _ => {}
    }

    let (config, source) = load(&cli)?;

    match cli.command.clone() {
        Commands::Show(args) => run_show(&config, args),
        Commands::Validate(args) => run_validate(&cli, &config, &source, args),
        Commands::Types => run_types(&cli, &config),
        Commands::CheckType(args) => run_check_type(&cli, &config, args),
        Commands::Refs(args) => run_refs(&cli, &config, args),
        Commands::Init(_) | Commands::Version => Ok(()),
    }
}

/// Load the configuration and describe where it came from.
fn load(cli: &Cli) -> Result<(LintConfig, String)> {
    if let Some(path) = &cli.config {
        return Ok((load_config_from(path)?, path.display().to_string()));
    }

    let (config, path) = load_config()?;
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    Ok((config, source))
}

fn is_json(cli: &Cli) -> bool {
    cli.format == Some(OutputFormat::Json)
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Run the show command.
fn run_show(config: &LintConfig, args: ShowArgs) -> Result<()> {
    tracing::debug!("Running show command with args: {:?}", args);

    let format = args.encoding.map(ConfigFormat::from).unwrap_or_default();
    let rendered = render_config(config, format)?;
    print!("{}", rendered);
    Ok(())
}

/// Run the validate command.
fn run_validate(cli: &Cli, config: &LintConfig, source: &str, args: ValidateArgs) -> Result<()> {
    tracing::debug!("Running validate command with args: {:?}", args);

    let report = audit_config(config, source);
    report.print(cli.format);
    report.into_result(args.strict)
}

/// Run the types command.
fn run_types(cli: &Cli, config: &LintConfig) -> Result<()> {
    tracing::debug!("Running types command");

    let type_enum = config.type_enum()?.ok_or_else(|| ConfigError::InvalidValue {
        key: format!("rules.{}", TYPE_ENUM),
        message: "rule is not configured".to_string(),
    })?;

    if is_json(cli) {
        print_json(&serde_json::json!(type_enum.allowed));
    } else {
        for allowed in &type_enum.allowed {
            println!("{}", allowed);
        }
    }

    Ok(())
}

/// Run the check-type command.
fn run_check_type(cli: &Cli, config: &LintConfig, args: CheckTypeArgs) -> Result<()> {
    tracing::debug!("Running check-type command with args: {:?}", args);

    let Some(type_enum) = config.type_enum()? else {
        if is_json(cli) {
            print_json(&serde_json::json!({ "token": args.token, "verdict": "unconfigured" }));
        } else {
            println!(
                "{} type-enum is not configured; '{}' is not restricted",
                style("-").dim(),
                args.token
            );
        }
        return Ok(());
    };

    let verdict = type_enum.evaluate(&args.token);

    if is_json(cli) {
        let (label, severity) = match &verdict {
            TypeVerdict::Accepted => ("accepted", None),
            TypeVerdict::Ignored => ("ignored", None),
            TypeVerdict::Rejected { severity } => ("rejected", Some(severity.as_str())),
        };
        print_json(&serde_json::json!({
            "token": args.token,
            "verdict": label,
            "severity": severity,
            "helpUrl": config.help_url,
        }));
    } else {
        match &verdict {
            TypeVerdict::Accepted => {
                println!("{} '{}' is an allowed type", style("✓").green().bold(), args.token)
            }
            TypeVerdict::Ignored => {
                println!("{} type-enum is off", style("-").dim())
            }
            TypeVerdict::Rejected { severity } => {
                println!(
                    "{} '{}' violates {} [{}]",
                    style("✗").red().bold(),
                    args.token,
                    style(TYPE_ENUM).red(),
                    severity
                );
                let hint = match type_enum.applicability {
                    Applicability::Always => "Use one of",
                    Applicability::Never => "Must not be one of",
                };
                println!(
                    "  {} {}",
                    style("→").dim(),
                    style(format!("{}: {}", hint, type_enum.allowed.join(", "))).dim()
                );
                if !config.help_url.is_empty() {
                    println!("  {} Get help: {}", style("ⓘ").cyan(), config.help_url);
                }
            }
        }
    }

    type_enum.require(&args.token).map(|_| ())
}

/// Run the refs command.
fn run_refs(cli: &Cli, config: &LintConfig, args: RefsArgs) -> Result<()> {
    tracing::debug!("Running refs command with args: {:?}", args);

    let references = config.parser_preset.parser_opts.references_in(&args.text)?;

    if is_json(cli) {
        let json: Vec<_> = references
            .iter()
            .map(|r| {
                serde_json::json!({
                    "raw": r.raw,
                    "prefix": r.prefix,
                    "issue": r.issue,
                    "repository": r.repository,
                })
            })
            .collect();
        print_json(&serde_json::Value::Array(json));
    } else if references.is_empty() {
        println!("No issue references found");
    } else {
        for reference in &references {
            println!("{}\t{}", reference.raw, reference.issue);
        }
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let format = args.encoding.map(ConfigFormat::from).unwrap_or_default();
    let config_path = std::path::Path::new(format.default_file_name());

    if config_path.exists() && !args.force {
        return Err(CommitrcError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    let content = match format {
        ConfigFormat::Json => example_config().to_string(),
        ConfigFormat::Toml => render_config(&project_config(), ConfigFormat::Toml)?,
    };

    std::fs::write(config_path, content).context("Failed to write configuration")?;

    println!("✓ Created {}", config_path.display());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("commitrc {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
