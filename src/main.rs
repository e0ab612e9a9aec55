//! Level Generator.
//!
//! Kommandozeilen-Frontend über der App-Schicht: Räume und Dialog-Scripts
//! verwalten, Engine-Scripts erzeugen, Daten exportieren und importieren.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use level_generator::{
    AppController, AppIntent, AppState, BorderColor, EditorOptions, FileStore, ImportMode,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "level-generator")]
#[command(about = "Räume und Dialog-Scripts verwalten und als Engine-Scripts exportieren")]
struct Cli {
    /// Abweichendes Speicherverzeichnis (sonst aus level_generator.toml)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Alle Räume und Scripts auflisten
    List {
        /// Platzierte Objekte samt Darstellungsgröße mit ausgeben
        #[arg(long)]
        entities: bool,
    },
    /// Neuen Raum mit Standardwerten anlegen
    NewLevel { name: String },
    /// Neues leeres Dialog-Script anlegen
    NewScript { name: String },
    /// Engine-Script eines Raums ausgeben (ohne Index: alle Räume)
    RoomScript { index: Option<usize> },
    /// Dialog-Script und Lokalisierungsblock ausgeben
    DialogScript { index: usize },
    /// Alle Daten als Transport-Text ausgeben
    Export {
        /// In Datei schreiben statt auf stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Transport-Text importieren
    Import {
        file: PathBuf,
        /// Nur neue Records anhängen statt zu ersetzen
        #[arg(long)]
        merge: bool,
    },
    /// Von Triggern referenzierte, fehlende Scripts auflisten
    Harvest,
    /// Raum-Karte aufbauen, ausgeben und Layout speichern
    Graph {
        /// Rahmenfarbe setzen, z.B. `--mark 2=red` (red, blue, green, none)
        #[arg(long, value_name = "RAUM=FARBE")]
        mark: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Level Generator v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let storage_dir = cli.storage.unwrap_or_else(|| options.storage_dir.clone());
    let mut state = AppState::new(Box::new(FileStore::new(storage_dir)), options);
    let mut controller = AppController::new();

    match cli.command {
        Commands::List { entities } => print_overview(&state, entities),
        Commands::NewLevel { name } => {
            controller.handle_intent(&mut state, AppIntent::NewLevelRequested { name })?;
            print_status(&state);
        }
        Commands::NewScript { name } => {
            controller.handle_intent(&mut state, AppIntent::NewScriptRequested { name })?;
            print_status(&state);
        }
        Commands::RoomScript { index } => {
            let intent = match index {
                Some(index) => AppIntent::RoomScriptRequested { index },
                None => AppIntent::AllRoomScriptsRequested,
            };
            controller.handle_intent(&mut state, intent)?;
            print_output(&state);
        }
        Commands::DialogScript { index } => {
            controller.handle_intent(&mut state, AppIntent::DialogScriptRequested { index })?;
            print_output(&state);
            if let Some(localization) = &state.ui.last_localization {
                println!();
                println!("{localization}");
            }
        }
        Commands::Export { out } => {
            controller.handle_intent(&mut state, AppIntent::ExportRequested)?;
            let text = state.ui.last_output.clone().unwrap_or_default();
            match out {
                Some(path) => std::fs::write(&path, text)
                    .with_context(|| format!("Export nach {} fehlgeschlagen", path.display()))?,
                None => println!("{text}"),
            }
        }
        Commands::Import { file, merge } => {
            let blob = std::fs::read_to_string(&file)
                .with_context(|| format!("{} konnte nicht gelesen werden", file.display()))?;
            let mode = if merge {
                ImportMode::Merge
            } else {
                ImportMode::Replace
            };
            controller.handle_intent(&mut state, AppIntent::ImportRequested { blob, mode })?;
            print_status(&state);
        }
        Commands::Harvest => {
            controller.handle_intent(&mut state, AppIntent::HarvestRequested)?;
            for group in &state.ui.harvest {
                println!("{} ({})", group.title(), group.room_name);
                for script in &group.scripts {
                    println!("  {}", script.name);
                }
            }
            print_status(&state);
        }
        Commands::Graph { mark } => {
            controller.handle_intent(&mut state, AppIntent::RoomGraphOpened)?;
            for entry in &mark {
                let (room, border) = parse_mark(entry)?;
                controller
                    .handle_intent(&mut state, AppIntent::GraphNodeRecolored { room, border })?;
            }
            print_graph(&state);
            controller.handle_intent(&mut state, AppIntent::RoomGraphClosed)?;
        }
    }

    controller.handle_intent(&mut state, AppIntent::ExitRequested)?;
    Ok(())
}

/// Liest `RAUM=FARBE`; unbekannte Farbnamen ergeben keine Hervorhebung.
fn parse_mark(entry: &str) -> Result<(u32, BorderColor)> {
    let (room, color) = entry
        .split_once('=')
        .with_context(|| format!("Ungültige Markierung '{entry}', erwartet RAUM=FARBE"))?;
    let room = room
        .trim()
        .parse::<u32>()
        .with_context(|| format!("Ungültige Raumnummer in '{entry}'"))?;
    Ok((room, BorderColor::from_name(color.trim())))
}

fn print_overview(state: &AppState, with_entities: bool) {
    println!("Räume ({}):", state.level_count());
    for (index, level) in state.store.levels().iter().enumerate() {
        println!(
            "  [{index}] {} (Level {}, Raum {}, {} Objekte)",
            level.name,
            level.level_number,
            level.room_number,
            level.entities.len()
        );
        if !with_entities {
            continue;
        }
        for entity in &level.entities {
            println!(
                "      {:?} '{}' bei ({:.0}, {:.0}), Größe {}",
                entity.category(),
                entity.asset,
                entity.x,
                entity.y,
                entity.render_size(&state.options.entity_sizes)
            );
        }
    }
    println!("Scripts ({}):", state.script_count());
    for (index, script) in state.store.scripts().iter().enumerate() {
        println!("  [{index}] {} ({} Dialoge)", script.name, script.dialogs.len());
    }
}

fn print_graph(state: &AppState) {
    let Some(graph) = &state.graph else {
        return;
    };
    for node in graph.nodes() {
        println!(
            "Raum {} '{}' bei ({:.0}, {:.0}) -> [{}] Rahmen {}",
            node.room,
            node.name,
            node.position.x,
            node.position.y,
            node.connections_label(),
            node.border.name()
        );
    }
    for edge in graph.edges() {
        println!(
            "  {} -> {} ({})",
            edge.from_room,
            edge.to_room,
            edge.side.as_str()
        );
    }
}

fn print_output(state: &AppState) {
    if let Some(text) = &state.ui.last_output {
        println!("{text}");
    }
}

fn print_status(state: &AppState) {
    if let Some(message) = &state.ui.status_message {
        println!("{message}");
    }
}
