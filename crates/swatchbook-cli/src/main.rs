//! `swatchbook`: run the palette pipeline against files on disk.

mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};
use swatchbook::settings::sanitize_option;
use swatchbook::{
    FileStore, PaletteManager, RecordingStyles, SettingsStore, ThemeFiles, EDITOR_STYLE_HANDLE,
    FRONT_STYLE_HANDLE,
};

#[derive(Parser, Debug)]
#[command(name = "swatchbook", version, about = "Aggregate editor color palettes")]
struct Cli {
    /// Settings file (.json, .yaml or .yml)
    #[arg(long, global = true, default_value = "swatchbook.json")]
    settings: PathBuf,

    /// Platform core theme JSON
    #[arg(long, global = true)]
    core: Option<PathBuf>,

    /// Active theme JSON
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    /// Parent theme JSON, merged over the active theme
    #[arg(long, global = true)]
    parent: Option<PathBuf>,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the editor palette
    Palette {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Skip deduplication
        #[arg(long)]
        keep_duplicates: bool,
    },
    /// Print the inline CSS
    Css {
        #[arg(long, value_enum, default_value_t = Target::Front)]
        target: Target,
    },
    /// Read or write stored options
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Report theme palette presence and suspicious color values
    Check,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Print the effective settings
    Show,
    /// Sanitize and store one option
    Set { key: String, value: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Front,
    Editor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let store = Arc::new(FileStore::new(&cli.settings));

    let mut themes = ThemeFiles::new();
    if let Some(path) = &cli.core {
        themes = themes.core(path);
    }
    if let Some(path) = &cli.theme {
        themes = themes.site(path);
    }
    if let Some(path) = &cli.parent {
        themes = themes.parent(path);
    }

    let manager = PaletteManager::new(store.clone(), Arc::new(themes));

    match cli.command {
        Command::Palette {
            format,
            keep_duplicates,
        } => {
            let manager = if keep_duplicates {
                manager.keep_editor_duplicates()
            } else {
                manager
            };
            let palette = manager.build_palette(&manager.settings());
            let out = match format {
                Format::Json => serde_json::to_string_pretty(&palette)?,
                Format::Yaml => serde_yaml::to_string(&palette)?,
            };
            println!("{}", out.trim_end());
        }
        Command::Css { target } => {
            let mut styles = RecordingStyles::new();
            let handle = match target {
                Target::Front => {
                    manager.add_color_palette_css(&mut styles);
                    FRONT_STYLE_HANDLE
                }
                Target::Editor => {
                    manager.add_color_palette_css_to_editor(&mut styles);
                    EDITOR_STYLE_HANDLE
                }
            };
            for style in styles.styles() {
                tracing::debug!(handle = %style.handle, priority = ?style.priority, "inline style");
            }
            println!("{}", styles.css_for(handle));
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                let settings = store
                    .settings()
                    .with_context(|| format!("reading {}", cli.settings.display()))?;
                println!("{}", serde_json::to_string_pretty(&settings.to_options())?);
            }
            SettingsAction::Set { key, value } => {
                let value = Value::String(value);
                sanitize_option(&key, &value)?;

                let mut submitted = Map::new();
                submitted.insert(key.clone(), value);
                let written = store
                    .update(&submitted)
                    .with_context(|| format!("writing {}", cli.settings.display()))?;
                if let Some(stored) = written.get(&key) {
                    println!("{} = {}", key, stored);
                }
            }
        },
        Command::Check => check(&manager),
    }

    Ok(())
}

fn check(manager: &PaletteManager) {
    if manager.theme_has_palette() {
        println!("theme palette: present");
    } else {
        println!("theme palette: absent");
    }

    let palette = manager.build_palette(&manager.settings());
    let mut suspicious = 0;
    for color in &palette {
        let format = color.format();
        if !format.is_valid() {
            tracing::warn!(slug = %color.slug, value = %color.color, "unrecognised color value");
            suspicious += 1;
        }
        println!("{:<28} {:<10} {}", color.slug, format, color.color);
    }
    println!("{} colors, {} suspicious", palette.len(), suspicious);
}
