//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the UGC scripter.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// UGC Scripter - short-form video scripts with timed beats
///
/// Builds a persona-voiced script outline for a niche and goal, splits the
/// runtime into Hook, Problem, Promise, key points, Proof, Recap and CTA
/// beats, and drafts scroll-stopping hook lines.
#[derive(Parser, Debug)]
#[command(name = "ugc-scripter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output rendering for generated content
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON with camelCase keys
    Json,
}

/// Inputs shared by `generate` and `hooks`
#[derive(Args, Debug, Clone)]
pub struct BriefArgs {
    /// Persona: fitness, beauty, tech, lifestyle, default
    #[arg(short, long, env = "UGC_PERSONA")]
    pub persona: Option<String>,

    /// Content niche, e.g. "meal prep"
    #[arg(short, long)]
    pub niche: String,

    /// What the viewer should achieve, e.g. "lose weight"
    #[arg(short, long)]
    pub goal: String,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, env = "UGC_CONFIG")]
    pub config: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a script outline, flat script and pacing beats
    Generate {
        #[command(flatten)]
        brief: BriefArgs,

        /// Opening line to use instead of the persona's hook
        #[arg(long)]
        hook: Option<String>,

        /// Call to action to use instead of the persona's first CTA
        #[arg(long)]
        cta: Option<String>,

        /// Runtime: 45, 45s, 1m 15s, 1:15 or 00:01:15
        #[arg(short, long)]
        duration: Option<String>,
    },

    /// Generate hook lines, pattern interrupts and a testing plan
    Hooks {
        #[command(flatten)]
        brief: BriefArgs,

        /// Tone: bold, friendly, urgent, story, curious
        #[arg(long)]
        vibe: Option<String>,

        /// Platform: tiktok, reels, shorts, linkedin, youtube
        #[arg(long)]
        platform: Option<String>,
    },

    /// List available personas and their voices
    Personas {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Display version and build information
    Version {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}
