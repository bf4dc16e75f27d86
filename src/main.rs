//! CLI entry point for pursgraph

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pursgraph::discovery::DEFAULT_EXTENSION;
use pursgraph::file_utils::{DEFAULT_MAX_FILE_SIZE, parse_file_size};
use pursgraph::{
    DiscoveryConfig, ModuleSelector, Reporter, SourceWalker, build, print_json, render,
    select_modules_with, write_diagram,
};

const DEFAULT_OUTPUT: &str = "purescript-dependency-graph/output.md";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color for messages on stderr.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pursgraph")]
#[command(about = "Draw the module dependency graph of a PureScript project as a Mermaid flowchart")]
#[command(version)]
struct Args {
    /// Project root
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Directory to scan for sources, relative to the project root
    #[arg(long = "sources-dir", value_name = "DIR")]
    sources_dir: Option<PathBuf>,

    /// Source file extension
    #[arg(short = 'e', long = "extension", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Regular expression selecting the modules to draw (matched anywhere in the module name)
    #[arg(short = 's', long = "select", value_name = "REGEX", default_value = ".*")]
    select: ModuleSelector,

    /// Output file, relative to the project root
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the diagram to stdout instead of writing the output file
    #[arg(long = "stdout", conflicts_with = "json")]
    stdout: bool,

    /// Print the module tree as JSON to stdout instead of drawing it
    #[arg(long = "json")]
    json: bool,

    /// Scan all files (ignore .gitignore and hidden-file rules)
    #[arg(short, long)]
    all: bool,

    /// Skip files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Number of parallel workers for reading sources
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Maximum source file size (default: 1MB).
    /// Larger files are skipped. Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not report skipped files
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Report progress
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let mut reporter = Reporter::new(should_use_color(args.color))
        .quiet(args.quiet)
        .verbose(args.verbose);

    let max_file_size = match args.max_file_size.as_deref() {
        Some(size_str) => parse_file_size(size_str).unwrap_or_else(|e| {
            reporter.error(&format!("invalid --max-file-size '{}': {}", size_str, e));
            process::exit(1);
        }),
        None => DEFAULT_MAX_FILE_SIZE,
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };
    let sources = match &args.sources_dir {
        Some(dir) => root.join(dir),
        None => root.clone(),
    };

    let config = DiscoveryConfig {
        extension: args.extension.trim_start_matches('.').to_string(),
        show_all: args.all,
        ignore_patterns: args.ignore.clone(),
        parallel_workers: args.jobs,
        max_file_size,
    };

    let files = match SourceWalker::new(config.clone()).walk(&sources) {
        Ok(files) => files,
        Err(e) => {
            reporter.error(&format!("cannot access '{}': {}", sources.display(), e));
            process::exit(1);
        }
    };
    reporter.progress(&format!(
        "found {} .{} files under {}",
        files.len(),
        config.extension,
        sources.display()
    ));

    let selection = select_modules_with(&files, &args.select, &config);
    for diagnostic in &selection.diagnostics {
        reporter.diagnostic(diagnostic);
    }
    reporter.progress(&format!(
        "selected {} modules matching '{}' ({} filtered out, {} skipped)",
        selection.modules.len(),
        args.select,
        selection.filtered,
        selection.diagnostics.len()
    ));
    if selection.is_empty() {
        reporter.warning("no modules selected, the diagram will be empty");
    }

    let tree = build(&selection.modules, &args.select);
    reporter.progress(&format!(
        "drawing {} nodes and {} edges",
        tree.descendant_count(),
        tree.dependency_count()
    ));

    let result = if args.json {
        print_json(&tree)
    } else if args.stdout {
        println!("{}", render(&tree));
        Ok(())
    } else {
        let output = root.join(&args.output);
        write_diagram(&output, &render(&tree)).map(|()| {
            reporter.progress(&format!("wrote {}", output.display()));
        })
    };

    if let Err(e) = result {
        reporter.error(&format!("error writing output: {}", e));
        process::exit(1);
    }
}
