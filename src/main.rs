//! UGC Scripter - short-form video script generator
//!
//! This is the main entry point for the `ugc-scripter` binary.
//! It turns a persona, niche and goal into a script outline with timed
//! beats, or a batch of hook lines with a testing plan.

mod cli;

use std::fmt::Write as _;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::debug;

use ugc_scripter::config::{self, ScripterConfig};
use ugc_scripter::error::{Error, Result};
use ugc_scripter::hooks::{generate_hooks, HookRequest, HookResponse, Platform, Vibe};
use ugc_scripter::logging::{self, LogGuards};
use ugc_scripter::persona::{PersonaCatalog, PersonaKey};
use ugc_scripter::script::{generate_script, ScriptRequest, ScriptResponse};
use ugc_scripter::{timecode, version};

use crate::cli::{BriefArgs, Cli, Commands, ConfigSubcommand, OutputFormat};

fn main() -> Result<()> {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();

    // Commands that never read a config file
    match &cli.command {
        Commands::Version { format } => {
            return match format {
                OutputFormat::Text => {
                    version::print_version();
                    Ok(())
                }
                OutputFormat::Json => {
                    println!("{}", to_json(&version::build_info(), true)?);
                    Ok(())
                }
            };
        }
        Commands::Config { subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand.clone());
        }
        Commands::Personas { format } => {
            logging::init_simple(tracing::Level::WARN)?;
            return print_personas(*format);
        }
        _ => {}
    }

    let config_path = match &cli.command {
        Commands::Generate { brief, .. } | Commands::Hooks { brief, .. } => brief.config.clone(),
        _ => None,
    };

    let config = match ScripterConfig::load(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => exit_with(&e),
    };

    // The guards must be kept alive for the lifetime of the program
    let _log_guards = init_logging_from_config(&config, cli.verbose, cli.quiet)?;

    let build = version::build_info();
    debug!(version = %build.full_version(), profile = %build.profile, "Starting ugc-scripter");

    let outcome = match cli.command {
        Commands::Generate { brief, hook, cta, duration } => {
            run_generate(&config, brief, hook, cta, duration)
        }
        Commands::Hooks { brief, vibe, platform } => run_hooks(&config, brief, vibe, platform),
        Commands::Version { .. } | Commands::Config { .. } | Commands::Personas { .. } => {
            // Already handled above
            Ok(())
        }
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }

    Ok(())
}

/// Print a formatted error and exit with its family exit code
fn exit_with(e: &Error) -> ! {
    tracing::debug!(error = %e.format_for_log(), "Command failed");
    eprint!("{}", e.format_for_terminal());
    std::process::exit(e.exit_code());
}

/// Initialize logging from configuration
fn init_logging_from_config(config: &ScripterConfig, verbose: u8, quiet: bool) -> Result<LogGuards> {
    logging::init_logging(&config.logging, verbose, quiet)
}

// ─────────────────────────────────────────────────────────────────
// Script generation
// ─────────────────────────────────────────────────────────────────

fn run_generate(
    config: &ScripterConfig,
    brief: BriefArgs,
    hook: Option<String>,
    cta: Option<String>,
    duration: Option<String>,
) -> Result<()> {
    let persona = resolve_persona(brief.persona.as_deref(), config)?;
    let duration_secs = match duration {
        Some(input) => timecode::parse_seconds(&input)?,
        None => config.generation.default_duration_secs,
    };

    let mut request = ScriptRequest::new(persona.slug(), brief.niche, brief.goal)
        .with_duration(duration_secs);
    if let Some(hook) = hook {
        request = request.with_hook(hook);
    }
    if let Some(cta) = cta {
        request = request.with_cta(cta);
    }
    request.validate(
        config.generation.min_duration_secs,
        config.generation.max_duration_secs,
    )?;

    let response = generate_script(&request);
    match output_format(brief.format, config) {
        OutputFormat::Text => print!("{}", format_script_text(&response, duration_secs)),
        OutputFormat::Json => println!("{}", to_json(&response, config.output.pretty_json)?),
    }
    Ok(())
}

/// Render a script response for the terminal
fn format_script_text(response: &ScriptResponse, requested_secs: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", response.script);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Pacing ({}s allocated, {}s requested)",
        response.total_seconds, requested_secs
    );

    let mut offset = 0u32;
    for beat in &response.pacing_beats {
        let _ = writeln!(
            out,
            "  {}  {:<8} {:>2}s  {}",
            timecode::format_hhmmss(offset),
            beat.section,
            beat.seconds,
            beat.notes
        );
        offset = offset.saturating_add(beat.seconds);
    }

    write_list(&mut out, "Supporting shots", &response.supporting_shots);
    write_list(&mut out, "Delivery notes", &response.delivery_notes);
    out
}

// ─────────────────────────────────────────────────────────────────
// Hook generation
// ─────────────────────────────────────────────────────────────────

fn run_hooks(
    config: &ScripterConfig,
    brief: BriefArgs,
    vibe: Option<String>,
    platform: Option<String>,
) -> Result<()> {
    let persona = resolve_persona(brief.persona.as_deref(), config)?;

    let mut request = HookRequest::new(persona.slug(), brief.niche, brief.goal);
    if let Some(name) = vibe {
        let vibe = name.parse::<Vibe>().map_err(|_| {
            let valid: Vec<&str> = Vibe::all().iter().map(|v| v.slug()).collect();
            Error::unknown_option("vibe", name.as_str(), &valid)
        })?;
        request = request.with_vibe(vibe);
    }
    if let Some(name) = platform {
        let platform = name.parse::<Platform>().map_err(|_| {
            let valid: Vec<&str> = Platform::all().iter().map(|p| p.slug()).collect();
            Error::unknown_option("platform", name.as_str(), &valid)
        })?;
        request = request.with_platform(platform);
    }

    request.validate()?;

    let response = generate_hooks(&request);
    match output_format(brief.format, config) {
        OutputFormat::Text => print!("{}", format_hooks_text(&response)),
        OutputFormat::Json => println!("{}", to_json(&response, config.output.pretty_json)?),
    }
    Ok(())
}

/// Render a hook response for the terminal
fn format_hooks_text(response: &HookResponse) -> String {
    let mut out = String::from("Hooks\n");
    for (index, hook) in response.hooks.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", index + 1, hook);
    }
    write_list(&mut out, "Pattern interrupts", &response.pattern_interrupts);
    write_list(&mut out, "Delivery angles", &response.delivery_angles);

    let plan = &response.testing_plan;
    write_list(&mut out, "Experiments", &plan.experiments);
    write_list(&mut out, "Metrics", &plan.metrics);
    write_list(&mut out, "Iteration tips", &plan.iteration_tips);
    out
}

// ─────────────────────────────────────────────────────────────────
// Personas
// ─────────────────────────────────────────────────────────────────

fn print_personas(format: OutputFormat) -> Result<()> {
    let listings = PersonaCatalog::new().list_available();
    match format {
        OutputFormat::Text => {
            println!("Available personas:");
            for listing in &listings {
                println!("  {:<10} {}", listing.key.slug(), listing.voice);
            }
        }
        OutputFormat::Json => println!("{}", to_json(&listings, true)?),
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

/// Strict persona lookup for CLI input; the configured default otherwise
fn resolve_persona(name: Option<&str>, config: &ScripterConfig) -> Result<PersonaKey> {
    match name {
        Some(name) => name.parse::<PersonaKey>().map_err(|_| {
            let valid: Vec<&str> = PersonaKey::all().iter().map(|k| k.slug()).collect();
            Error::unknown_option("persona", name, &valid)
        }),
        None => Ok(config.default_persona()),
    }
}

/// CLI flag wins over the configured format
fn output_format(flag: Option<OutputFormat>, config: &ScripterConfig) -> OutputFormat {
    flag.or_else(|| OutputFormat::from_str(&config.output.format, true).ok())
        .unwrap_or(OutputFormat::Text)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = ScripterConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let written = config::init_config(path.as_deref(), force)?;
            println!("Configuration file created: {}", written.display());
        }
        ConfigSubcommand::Validate { config } => match ScripterConfig::load(config.as_deref()) {
            Ok(_) => {
                println!("Configuration is valid.");
            }
            Err(e) => exit_with(&e),
        },
    }

    Ok(())
}
