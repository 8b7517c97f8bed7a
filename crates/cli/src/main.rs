#![deny(unsafe_code)]
//! CLI binary for the hue-forge palette tool.
//!
//! Subcommands:
//! - `generate [strategy]`: generate a palette and make it the current one
//! - `contrast <a> <b>`: WCAG contrast check for two colors
//! - `current`: print the stored current palette
//! - `saved ...`: list, save, delete and rename saved palettes
//! - `list`: print available strategies and moods

mod config;
mod error;

use clap::{Parser, Subcommand};
use config::{Config, STORE_DIR_ENV};
use error::CliError;
use hue_forge_core::{check_wcag, Mood, Recipe, Rgb, Strategy};
use hue_forge_store::{FileStore, PaletteData, PaletteState, PaletteStore, SavedPalette};
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hue-forge", about = "Color palette generator and WCAG checker")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the palette store.
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Config file to read instead of the platform default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a palette and store it as the current palette.
    Generate {
        /// Strategy name (harmonious, analogous, monochrome, triad,
        /// complementary, mood). Defaults to the configured strategy.
        strategy: Option<String>,

        /// Seed color as a 6-digit hex string.
        #[arg(short, long)]
        base: Option<String>,

        /// Mood name for the mood strategy.
        #[arg(short, long)]
        mood: Option<String>,

        /// Number of colors. Defaults to the configured count.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// PRNG seed for deterministic output. Defaults to the clock.
        #[arg(long)]
        seed: Option<u64>,

        /// Print only; leave the stored current palette alone.
        #[arg(long)]
        no_save: bool,
    },
    /// Check the WCAG contrast between two colors.
    Contrast { a: String, b: String },
    /// Print the stored current palette.
    Current,
    /// Manage saved palettes.
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
    /// List available strategies and moods.
    List,
}

#[derive(Subcommand)]
enum SavedAction {
    /// List saved palettes.
    List,
    /// Save colors (or the current palette) to the saved list.
    Save {
        #[arg(long)]
        name: Option<String>,
        /// Colors to save. Defaults to the current palette.
        colors: Vec<String>,
    },
    /// Delete a saved palette.
    Delete { id: String },
    /// Rename a saved palette.
    Rename { id: String, name: String },
}

struct Context {
    json: bool,
    config: Config,
    store_dir_flag: Option<PathBuf>,
}

impl Context {
    fn open_store(&self) -> Result<PaletteStore<FileStore>, CliError> {
        let env = std::env::var_os(STORE_DIR_ENV).map(PathBuf::from);
        let dir = self.config.store_dir(self.store_dir_flag.clone(), env)?;
        Ok(PaletteStore::new(FileStore::open(dir)?))
    }

    fn print_json(&self, value: &impl serde::Serialize) -> Result<(), CliError> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Parses and normalizes a user-supplied color to lowercase `#rrggbb`.
fn parse_color(input: &str) -> Result<String, CliError> {
    Ok(Rgb::from_hex(input)?.to_hex())
}

fn print_colors(colors: &[String]) {
    for c in colors {
        println!("{c}");
    }
}

fn print_saved(p: &SavedPalette) {
    let name = p.data.name.as_deref().unwrap_or("(unnamed)");
    println!("{}  {name}  {}", p.id, p.data.colors.join(" "));
}

fn run_generate(
    ctx: &Context,
    strategy: Option<String>,
    base: Option<String>,
    mood: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    no_save: bool,
) -> Result<(), CliError> {
    let strategy =
        Strategy::from_name(strategy.as_deref().unwrap_or(&ctx.config.default_strategy))?;
    let mut recipe = Recipe::new(strategy, seed.unwrap_or_else(clock_seed))
        .with_count(count.unwrap_or(ctx.config.default_count));
    if let Some(base) = base {
        recipe = recipe.with_base(parse_color(&base)?);
    }
    if let Some(mood) = mood {
        if Mood::from_name(&mood).is_none() {
            return Err(CliError::Input(format!(
                "unknown mood '{mood}' (expected one of: {})",
                Mood::list_names().join(", ")
            )));
        }
        recipe = recipe.with_mood(mood);
    }
    recipe.validate()?;
    if strategy.needs_base_color() && recipe.base.is_none() {
        warn!(strategy = strategy.name(), "no --base given, falling back to harmonious");
    }

    let colors = recipe.generate();
    debug!(strategy = strategy.name(), seed = recipe.seed, "generated palette");

    if !no_save {
        let store = ctx.open_store()?;
        let mut state = PaletteState::load(&store)?;
        state.persist_to(store.clone());
        state.set_palette(colors.clone());
        // The persistence subscriber only logs failures; check the write landed.
        if store.current_palette()?.as_deref() != Some(colors.as_slice()) {
            return Err(CliError::Io("could not store the current palette".to_string()));
        }
    }

    if ctx.json {
        ctx.print_json(&serde_json::json!({
            "recipe": recipe,
            "colors": colors,
        }))
    } else {
        print_colors(&colors);
        Ok(())
    }
}

fn run_contrast(ctx: &Context, a: &str, b: &str) -> Result<(), CliError> {
    let (a, b) = (parse_color(a)?, parse_color(b)?);
    let result = check_wcag(&a, &b);
    if ctx.json {
        return ctx.print_json(&serde_json::json!({
            "foreground": a,
            "background": b,
            "wcag": result,
        }));
    }
    let mark = |pass: bool| if pass { "pass" } else { "fail" };
    println!("{a} on {b}: {:.2}:1", result.ratio);
    println!("  AA        {}", mark(result.aa));
    println!("  AA Large  {}", mark(result.aa_large));
    println!("  AAA       {}", mark(result.aaa));
    println!("  AAA Large {}", mark(result.aaa_large));
    Ok(())
}

fn run_saved(ctx: &Context, action: SavedAction) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    match action {
        SavedAction::List => {
            let palettes = store.saved_palettes()?;
            if ctx.json {
                ctx.print_json(&palettes)?;
            } else {
                palettes.iter().for_each(print_saved);
            }
        }
        SavedAction::Save { name, colors } => {
            let colors = if colors.is_empty() {
                store
                    .current_palette()?
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| {
                        CliError::Input("no colors given and no current palette".to_string())
                    })?
            } else {
                colors
                    .iter()
                    .map(|c| parse_color(c))
                    .collect::<Result<Vec<_>, _>>()?
            };
            let mut data = PaletteData::new(colors);
            data.name = name;
            let saved = store.save_palette(data)?;
            if ctx.json {
                ctx.print_json(&saved)?;
            } else {
                println!("saved {}", saved.id);
            }
        }
        SavedAction::Delete { id } => {
            let before = store.saved_palettes()?.len();
            let remaining = store.delete_palette(&id)?;
            if remaining.len() == before {
                return Err(CliError::Input(format!("no saved palette with id {id}")));
            }
            if ctx.json {
                ctx.print_json(&remaining)?;
            } else {
                println!("deleted {id}");
            }
        }
        SavedAction::Rename { id, name } => {
            let renamed = store
                .rename_palette(&id, &name)?
                .ok_or_else(|| CliError::Input(format!("no saved palette with id {id}")))?;
            if ctx.json {
                ctx.print_json(&renamed)?;
            } else {
                print_saved(&renamed);
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = Context {
        json: cli.json,
        config: Config::load(cli.config.as_deref())?,
        store_dir_flag: cli.store_dir,
    };

    match cli.command {
        Command::Generate {
            strategy,
            base,
            mood,
            count,
            seed,
            no_save,
        } => run_generate(&ctx, strategy, base, mood, count, seed, no_save),
        Command::Contrast { a, b } => run_contrast(&ctx, &a, &b),
        Command::Current => {
            let current = ctx.open_store()?.current_palette()?;
            if ctx.json {
                ctx.print_json(&current)
            } else {
                match current {
                    Some(colors) => print_colors(&colors),
                    None => eprintln!("no current palette"),
                }
                Ok(())
            }
        }
        Command::Saved { action } => run_saved(&ctx, action),
        Command::List => {
            let strategies = Strategy::list_names();
            let moods = Mood::list_names();
            if ctx.json {
                ctx.print_json(&serde_json::json!({
                    "strategies": strategies,
                    "moods": moods,
                }))
            } else {
                println!("Strategies:");
                for name in strategies {
                    println!("  {name}");
                }
                println!("Moods:");
                println!("  {}", moods.join(", "));
                Ok(())
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
