use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use indexmap::IndexMap;

use slotgen_core::config::{self, CONFIG_FILE_NAME, SlotgenConfig, TargetKind};
use slotgen_core::slot::{Slot, SlotKind};
use slotgen_core::{EmbedGenerator, GeneratedFile};
use slotgen_embeds::{EmbedOptions, UpcomingGenerator, WaitlistGenerator, emit_embed};

#[derive(Parser)]
#[command(name = "slotgen", about = "Webflow slot-embed generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the embed files
    Generate {
        /// Path to the config file (defaults to .slotgen.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory (overrides the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and validate the configuration
    Check {
        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print a single fragment to stdout
    Preview {
        /// Embed kind
        #[arg(long)]
        kind: KindArg,

        /// Slot index
        #[arg(long)]
        slot: u32,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new slotgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Waitlist,
    Upcoming,
}

impl From<KindArg> for SlotKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Waitlist => SlotKind::Waitlist,
            KindArg::Upcoming => SlotKind::Upcoming,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config, output } => cmd_generate(config, output),

        Commands::Check { config } => cmd_check(config),

        Commands::Preview { kind, slot, config } => cmd_preview(kind.into(), slot, config),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "slotgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the config from an explicit path, or from the working directory with
/// defaults when no file is present.
fn load_config(path: Option<PathBuf>) -> Result<SlotgenConfig> {
    match path {
        Some(path) => config::load_config(&path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => {
            let cfg = config::load_config(Path::new(CONFIG_FILE_NAME))?;
            if cfg.is_none() {
                log::debug!("no {CONFIG_FILE_NAME} present, using defaults");
            }
            Ok(cfg.unwrap_or_default())
        }
    }
}

/// Look up the generators for a target.
fn get_generators(target: TargetKind) -> Vec<Box<dyn EmbedGenerator>> {
    target
        .kinds()
        .iter()
        .map(|kind| match kind {
            SlotKind::Waitlist => Box::new(WaitlistGenerator) as Box<dyn EmbedGenerator>,
            SlotKind::Upcoming => Box::new(UpcomingGenerator) as Box<dyn EmbedGenerator>,
        })
        .collect()
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Generate the "do not edit" README.
fn readme_content() -> &'static str {
    r#"# Generated Embeds — Do Not Edit

This directory is **auto-generated** by slotgen. Any manual change will be
overwritten the next time `slotgen generate` is run.

Each HTML file is one self-contained Webflow embed: paste the file contents
into an Embed element on the page. `waitlist/` and `upcoming/` hold one file
per slot, numbered by display order.

To change credentials, slot count, or refresh cadence, edit `.slotgen.yaml`
and re-run:
```
slotgen generate
```
"#
}

fn cmd_generate(config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cfg = load_config(config)?;
    cfg.validate()?;

    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let mut manifest: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut total = 0;

    for generator in get_generators(cfg.target) {
        let kind = generator.kind();
        eprintln!("Generating {} embeds → {}", kind, output_dir.display());
        let files = generator.generate(&cfg)?;

        write_files(&output_dir, &files)?;

        let paths = files.iter().map(|f| f.path.clone()).collect();
        manifest.insert(kind.as_str().to_string(), paths);
        total += files.len();
    }

    let readme_path = output_dir.join("README.md");
    fs::write(&readme_path, readme_content())
        .with_context(|| format!("failed to write {}", readme_path.display()))?;
    eprintln!("  wrote {}", readme_path.display());

    let manifest_path = output_dir.join("manifest.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;
    eprintln!("  wrote {}", manifest_path.display());

    eprintln!("Generated {} embed files in {}", total, output_dir.display());
    eprintln!("\nPaste each file into its Webflow embed block — regenerating overwrites them.");
    Ok(())
}

fn cmd_check(config: Option<PathBuf>) -> Result<()> {
    let cfg = load_config(config)?;
    cfg.validate()?;

    let kinds: Vec<&str> = cfg.target.kinds().iter().map(|k| k.as_str()).collect();
    eprintln!("Valid slotgen config");
    eprintln!("  Supabase URL: {}", cfg.supabase.url);
    eprintln!("  Output: {}", cfg.output);
    eprintln!("  Targets: {}", kinds.join(", "));
    eprintln!("  Slots per kind: {}", cfg.slots);
    eprintln!("  Refresh: every {} min", cfg.refresh_minutes);
    Ok(())
}

fn cmd_preview(kind: SlotKind, slot: u32, config: Option<PathBuf>) -> Result<()> {
    let cfg = load_config(config)?;
    cfg.validate()?;

    let options = EmbedOptions::from_config(&cfg);
    print!("{}", emit_embed(Slot::new(kind, slot), &options));
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
