//! Two Nil data extractor CLI
//!
//! Command-line tool for decoding, inspecting, and exporting the team and
//! squad datasets hidden in SCOT-94.DAT.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use twonil_core::{
    blob_tokens, build_datasets, dataset_file_name, scan_record_table, scan_team_list,
    write_dataset_csv, write_extraction_json, ByteSource, Dataset, FileLayout, Mode,
};

#[derive(Parser)]
#[command(name = "twonil-cli")]
#[command(about = "SCOT-94.DAT team and squad extractor", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode both datasets and write them to disk
    Extract {
        /// Path to the .DAT file
        #[arg(short, long)]
        file: PathBuf,

        /// Output directory for the dataset files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// Layout file (JSON) overriding the built-in calibration
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Emit short squads flagged as partial instead of aborting
        #[arg(long)]
        best_effort: bool,
    },

    /// Print one of the two team lists
    Teams {
        /// Path to the .DAT file
        #[arg(short, long)]
        file: PathBuf,

        /// Which list to print (a or b)
        #[arg(short, long, default_value = "a")]
        list: String,

        /// Layout file (JSON) overriding the built-in calibration
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Dump the tokenized player-name blob with token indices
    Tokens {
        /// Path to the .DAT file
        #[arg(short, long)]
        file: PathBuf,

        /// Maximum number of tokens to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Layout file (JSON) overriding the built-in calibration
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Run the full pipeline and report whether the anchors hold
    Validate {
        /// Path to the .DAT file
        #[arg(short, long)]
        file: PathBuf,

        /// Layout file (JSON) overriding the built-in calibration
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Print a dataset as a table
    Show {
        /// Path to the .DAT file
        #[arg(short, long)]
        file: PathBuf,

        /// Which dataset to show (a or b)
        #[arg(short, long, default_value = "a")]
        dataset: String,

        /// Maximum number of rows to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Layout file (JSON) overriding the built-in calibration
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Emit short squads flagged as partial instead of aborting
        #[arg(long)]
        best_effort: bool,
    },

    /// Write the built-in layout as a JSON template for re-calibration
    InitLayout {
        /// Output path for the layout file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> twonil_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            out_dir,
            format,
            layout,
            best_effort,
        } => cmd_extract(&file, &out_dir, &format, layout.as_deref(), best_effort),
        Commands::Teams { file, list, layout } => cmd_teams(&file, &list, layout.as_deref()),
        Commands::Tokens {
            file,
            limit,
            layout,
        } => cmd_tokens(&file, limit, layout.as_deref()),
        Commands::Validate { file, layout } => cmd_validate(&file, layout.as_deref()),
        Commands::Show {
            file,
            dataset,
            limit,
            layout,
            best_effort,
        } => cmd_show(&file, &dataset, limit, layout.as_deref(), best_effort),
        Commands::InitLayout { output } => cmd_init_layout(&output),
    }
}

fn load_layout(path: Option<&Path>) -> twonil_core::Result<FileLayout> {
    match path {
        Some(path) => FileLayout::load(path),
        None => Ok(FileLayout::default()),
    }
}

fn extraction_mode(best_effort: bool) -> Mode {
    if best_effort {
        Mode::BestEffort
    } else {
        Mode::Strict
    }
}

fn cmd_extract(
    file: &Path,
    out_dir: &Path,
    format: &str,
    layout_path: Option<&Path>,
    best_effort: bool,
) -> twonil_core::Result<()> {
    let layout = load_layout(layout_path)?;
    let source = ByteSource::from_file(file)?;
    let extraction = build_datasets(&source, &layout, extraction_mode(best_effort))?;

    std::fs::create_dir_all(out_dir)?;

    match format.to_lowercase().as_str() {
        "csv" => {
            for dataset in [&extraction.dataset_a, &extraction.dataset_b] {
                let path = out_dir.join(dataset_file_name(dataset));
                let writer = BufWriter::new(File::create(&path)?);
                write_dataset_csv(dataset, writer)?;
                println!("Wrote: {} (rows={})", path.display(), dataset.row_count());
            }
        }
        "json" => {
            let path = out_dir.join("extraction.json");
            let writer = BufWriter::new(File::create(&path)?);
            write_extraction_json(&extraction, writer)?;
            println!("Wrote: {}", path.display());
        }
        _ => {
            eprintln!("Unknown format: {}. Supported formats: csv, json", format);
            std::process::exit(1);
        }
    }

    if !extraction.corrupt_slots.is_empty() {
        println!(
            "Warning: {} corrupt slot(s) in Team List A: {:?}",
            extraction.corrupt_slots.len(),
            extraction.corrupt_slots
        );
    }

    Ok(())
}

fn cmd_teams(file: &Path, list: &str, layout_path: Option<&Path>) -> twonil_core::Result<()> {
    let layout = load_layout(layout_path)?;
    let source = ByteSource::from_file(file)?;

    match list.to_lowercase().as_str() {
        "a" => {
            let slots = scan_record_table(&source, &layout)?;
            println!("Team List A ({} slots):", slots.len());
            for slot in &slots {
                if slot.is_corrupt() {
                    println!("  {:3}  <corrupt slot at offset {}>", slot.index, slot.offset);
                } else {
                    println!("  {:3}  {}", slot.index, slot.name());
                }
            }
        }
        "b" => {
            let teams = scan_team_list(&source, &layout)?;
            println!("Team List B ({} teams):", teams.len());
            for team in &teams {
                println!("  {:3}  {}", team.index, team.name);
            }
        }
        _ => {
            eprintln!("Unknown list: {}. Expected 'a' or 'b'", list);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn cmd_tokens(
    file: &Path,
    limit: Option<usize>,
    layout_path: Option<&Path>,
) -> twonil_core::Result<()> {
    let layout = load_layout(layout_path)?;
    let source = ByteSource::from_file(file)?;
    let tokens = blob_tokens(&source, &layout)?;

    let shown = limit.unwrap_or(tokens.len());
    for (i, token) in tokens.iter().take(shown).enumerate() {
        println!("{:5}  {}", i, token);
    }
    if tokens.len() > shown {
        println!("... ({} more tokens)", tokens.len() - shown);
    }
    println!("Total: {} tokens", tokens.len());

    Ok(())
}

fn cmd_validate(file: &Path, layout_path: Option<&Path>) -> twonil_core::Result<()> {
    let layout = load_layout(layout_path)?;
    let source = ByteSource::from_file(file)?;

    // Anchor failures surface as errors from the builder
    let extraction = build_datasets(&source, &layout, Mode::Strict)?;

    println!("Validation passed");
    println!(
        "  Dataset A: {} teams x {} players",
        extraction.dataset_a.row_count(),
        extraction.dataset_a.squad_size
    );
    println!(
        "  Dataset B: {} teams x {} players",
        extraction.dataset_b.row_count(),
        extraction.dataset_b.squad_size
    );
    println!(
        "  Anchors: {} (A) + {} (B) all hold",
        layout.anchors_a.len(),
        layout.anchors_b.len()
    );
    if !extraction.corrupt_slots.is_empty() {
        println!(
            "  Corrupt Team List A slots: {:?}",
            extraction.corrupt_slots
        );
    }

    Ok(())
}

fn cmd_show(
    file: &Path,
    dataset: &str,
    limit: Option<usize>,
    layout_path: Option<&Path>,
    best_effort: bool,
) -> twonil_core::Result<()> {
    let layout = load_layout(layout_path)?;
    let source = ByteSource::from_file(file)?;
    let extraction = build_datasets(&source, &layout, extraction_mode(best_effort))?;

    let ds: &Dataset = match dataset.to_lowercase().as_str() {
        "a" => &extraction.dataset_a,
        "b" => &extraction.dataset_b,
        _ => {
            eprintln!("Unknown dataset: {}. Expected 'a' or 'b'", dataset);
            std::process::exit(1);
        }
    };

    println!("{}", ds.header().join("\t"));
    println!("{}", "-".repeat(ds.column_count() * 8));

    let row_limit = limit.unwrap_or(ds.row_count());
    for row in ds.rows.iter().take(row_limit) {
        let mut line = ds.row_values(row).join("\t");
        if row.squad.partial {
            line.push_str("\t[partial]");
        }
        println!("{}", line);
    }
    if ds.row_count() > row_limit {
        println!("... ({} more rows)", ds.row_count() - row_limit);
    }

    Ok(())
}

fn cmd_init_layout(output: &Path) -> twonil_core::Result<()> {
    let layout = FileLayout::default();
    layout.save(output)?;
    println!("Created layout file: {}", output.display());
    println!();
    println!("Edit the constants to re-calibrate, then run:");
    println!(
        "  twonil-cli validate --file <SCOT-94.DAT> --layout {}",
        output.display()
    );
    Ok(())
}
