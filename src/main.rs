//! CLI entry point for dirtree

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use dirtree::timing::done_message;
use dirtree::tree::absolute_root;
use dirtree::{
    EntryOrder, RenderConfig, RenderError, RenderSummary, TreeFormatter, TreeRenderer, timed,
};
use termcolor::{Ansi, ColorChoice, NoColor, StandardStream};

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print the directory structure")]
#[command(version)]
struct Args {
    /// The root directory to print the structure of
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Show file sizes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Limit the depth of directory traversal
    #[arg(short = 'd', long = "depth", value_name = "N")]
    depth: Option<usize>,

    /// Colorize the output
    #[arg(short = 'c', long = "color")]
    color: bool,

    /// Include file permissions
    #[arg(short = 'p', long = "permissions")]
    permissions: bool,

    /// Write the directory structure to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Ignore entries with these exact names, at every level
    #[arg(short = 'i', long = "ignore", value_name = "NAME", num_args = 0..)]
    ignore: Vec<String>,

    /// Sort entries by name instead of filesystem order
    #[arg(long = "sort")]
    sort: bool,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = RenderConfig {
        show_size: args.size,
        depth_limit: args.depth,
        colorize: args.color,
        include_permissions: args.permissions,
        ignore_dirs: args.ignore.clone(),
        order: if args.sort {
            EntryOrder::Name
        } else {
            EntryOrder::Native
        },
    };

    let root = absolute_root(&args.directory).unwrap_or_else(|e| {
        eprintln!("dirtree: cannot resolve '{}': {}", args.directory.display(), e);
        process::exit(1);
    });
    log::debug!("rendering {} with {:?}", root.display(), config);

    let (result, elapsed) = timed(|| run(&root, args.output.as_deref(), config));

    match result {
        Ok(summary) => {
            log::info!(
                "{} directories, {} files, {} unreadable",
                summary.directories,
                summary.files,
                summary.denied
            );
            eprintln!("\n{}", done_message(elapsed));
        }
        Err(e) => {
            eprintln!("dirtree: {}", e);
            process::exit(1);
        }
    }
}

/// Render `root` to `output`, or to stdout when no file is given.
fn run(
    root: &Path,
    output: Option<&Path>,
    config: RenderConfig,
) -> Result<RenderSummary, RenderError> {
    let renderer = TreeRenderer::new(config);
    let colorize = renderer.config().colorize;

    let Some(path) = output else {
        let choice = if colorize {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut formatter = TreeFormatter::new(StandardStream::stdout(choice));
        return renderer.render(root, &mut formatter);
    };

    let file = File::create(path).map_err(|source| RenderError::OutputFile {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);

    // Colors requested explicitly are kept as ANSI codes in the file.
    if colorize {
        renderer.render(root, &mut TreeFormatter::new(Ansi::new(writer)))
    } else {
        renderer.render(root, &mut TreeFormatter::new(NoColor::new(writer)))
    }
}
