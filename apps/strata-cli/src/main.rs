use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use strata_assets::AssetLibrary;
use strata_ecs::ComponentStore;
use strata_inspector::{FrameOutcome, InspectorPanel, InspectorSettings, Selection, TextUi};
use strata_scene::{Name, find_by_name, label_tables, populate_demo, verify_label_tables};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strata-cli", about = "CLI tool for the strata inspector")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print every dropdown label table and check labels are unique
    Labels,
    /// Draw the inspector for demo-scene entities as text
    Inspect {
        /// Only this entity (by name); all entities otherwise
        #[arg(short, long)]
        entity: Option<String>,
        /// Include the debug block (UUID, parent, children)
        #[arg(short, long)]
        debug: bool,
        /// Settings file; defaults apply when absent
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
    /// Inspector settings files
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Write default settings to a file
    Init {
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Load a settings file and check its values
    Validate { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("strata-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("ecs: {}", strata_ecs::crate_info());
            println!("assets: {}", strata_assets::crate_info());
            println!("scene: {}", strata_scene::crate_info());
            println!("inspector: {}", strata_inspector::crate_info());
        }
        Commands::Labels => {
            for (kind, labels) in label_tables() {
                println!("{kind}: {}", labels.join(", "));
            }
            verify_label_tables()?;
            println!("Labels: OK");
        }
        Commands::Inspect {
            entity,
            debug,
            settings,
        } => inspect(entity.as_deref(), debug, settings)?,
        Commands::Settings { action } => match action {
            SettingsAction::Init { path, force } => {
                if path.exists() && !force {
                    anyhow::bail!("{} exists; pass --force to overwrite", path.display());
                }
                InspectorSettings::default()
                    .save(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            SettingsAction::Validate { path } => {
                let settings = InspectorSettings::load(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                println!("{}: OK", path.display());
                println!("  scripts_dir: {}", settings.scripts_dir);
                println!("  asset_root: {}", settings.asset_root.display());
                println!("  image_button_size: {}", settings.image_button_size);
                println!("  debug_mode: {}", settings.debug_mode);
            }
        },
    }

    Ok(())
}

fn inspect(only: Option<&str>, debug: bool, settings: Option<PathBuf>) -> anyhow::Result<()> {
    let settings = match settings {
        Some(path) => InspectorSettings::load_or_default(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => InspectorSettings::default(),
    };
    let mut assets = AssetLibrary::new(settings.asset_root.clone());

    let mut store = ComponentStore::new();
    let spawned = populate_demo(&mut store)?;
    let targets = match only {
        Some(name) => vec![
            find_by_name(&store, name).with_context(|| format!("no entity named {name:?}"))?,
        ],
        None => spawned,
    };

    let mut panel = InspectorPanel::new(settings);
    panel.on_new_scene();
    if debug {
        panel.set_debug_mode(true);
    }

    for entity in targets {
        let title = store
            .get::<Name>(entity)
            .map_or_else(|| entity.short(), |n| n.name.clone());
        let mut ui = TextUi::new();
        let mut selection = Selection::single(entity);
        let outcome = panel.on_frame(Some(&mut store), &mut selection, &mut ui, &mut assets);
        match outcome {
            FrameOutcome::Rendered { sections, .. } => {
                println!("== {title} ({sections} components)");
                print!("{}", ui.finish());
            }
            FrameOutcome::Skipped(reason) => println!("== {title}: skipped ({reason:?})"),
        }
    }
    Ok(())
}
