use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use owo_colors::{OwoColorize as _, Stream};
use std::path::PathBuf;

use chroma::commands::ai::{run as ai, AiArgs};
use chroma::commands::delete::{run as delete, DeleteArgs};
use chroma::commands::export::{run as export, ExportArgs};
use chroma::commands::generate::{run as generate, GenerateArgs};
use chroma::commands::init::{run as init, InitArgs};
use chroma::commands::list::{run as list, ListArgs};
use chroma::commands::load::{run as load, LoadArgs};
use chroma::commands::lock::{run as lock, LockArgs};
use chroma::commands::save::{run as save, SaveArgs};
use chroma::commands::show::{run as show, ShowArgs};
use libchroma::GenerationMode;

#[derive(Parser, Debug, Clone)]
#[command(about = "Chroma, a color palette generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    /// Log what is happening. `RUST_LOG` gives finer control.
    #[clap(long, short, global = true)]
    verbose: bool,

    /// Directory holding `chroma.yaml` and the palette data
    #[clap(long, global = true, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Create a chroma.yaml with the default settings
    Init,
    /// Regenerate every unlocked color
    Generate {
        /// random, monochromatic, analogous, complementary or triadic
        #[arg(long, short)]
        mode: Option<String>,
        /// Number of colors, from 1 to 30
        #[arg(long, short)]
        count: Option<usize>,
        /// Seed color for the harmony modes, e.g. #3b82f6
        #[arg(long, short)]
        base: Option<String>,
    },
    /// Lock or unlock the color at a position (starting at 1)
    Lock { position: usize },
    /// Print the current palette
    Show,
    /// Generate a palette from a description using AI
    Ai {
        prompt: String,
        #[arg(long, short)]
        count: Option<usize>,
        #[arg(long, short)]
        base: Option<String>,
    },
    /// Save the current palette
    Save { name: Option<String> },
    /// List saved palettes
    List,
    /// Make a saved palette the current one
    Load { id: String },
    /// Delete a saved palette
    Delete { id: String },
    /// Write the current palette as a PNG image
    Export {
        /// File name, without extension
        #[arg(long, short)]
        name: Option<String>,
        /// Export 8x8 pixel squares instead of labeled bars
        #[arg(long)]
        pixel: bool,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let mut stdout = std::io::stdout();
    let working_dir = args.dir.as_path();

    let result = match args.command {
        Some(Commands::Init) => init(InitArgs {
            working_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::Generate { mode, count, base }) => generate(GenerateArgs {
            working_dir,
            mode: mode.as_deref().map(GenerationMode::from_name_lossy),
            count,
            base_color: base.as_deref(),
            stdout: &mut stdout,
        }),
        Some(Commands::Lock { position }) => lock(LockArgs {
            working_dir,
            position,
            stdout: &mut stdout,
        }),
        Some(Commands::Show) => show(ShowArgs {
            working_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::Ai {
            prompt,
            count,
            base,
        }) => ai(AiArgs {
            working_dir,
            prompt: &prompt,
            count,
            base_color: base.as_deref(),
            source: None,
            stdout: &mut stdout,
        }),
        Some(Commands::Save { name }) => save(SaveArgs {
            working_dir,
            name: name.as_deref(),
            stdout: &mut stdout,
        }),
        Some(Commands::List) => list(ListArgs {
            working_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::Load { id }) => load(LoadArgs {
            working_dir,
            id: &id,
            stdout: &mut stdout,
        }),
        Some(Commands::Delete { id }) => delete(DeleteArgs {
            working_dir,
            id: &id,
            stdout: &mut stdout,
        }),
        Some(Commands::Export { name, pixel }) => export(ExportArgs {
            working_dir,
            name: name.as_deref(),
            pixel_art: pixel,
            stdout: &mut stdout,
        }),
        None => {
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stream::Stderr, |s| s.red()),
            e
        );
        std::process::exit(1);
    }
}
