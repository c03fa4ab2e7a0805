use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use diffseq::areas::session::Session;
use diffseq::artifacts::core::{PagerWriter, should_page};
use diffseq::artifacts::diff::hunk::HUNK_CONTEXT;
use diffseq::artifacts::myers::options::DiffOptions;
use diffseq::commands::similarity::SimilarityInput;
use minus::Pager;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "diffseq",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare sequences with a bounded Myers diff",
    long_about = "This tool compares files line by line and strings byte by byte \
    using the O(ND) difference algorithm. Large inputs are compared with a cost bound \
    that trades a slightly longer edit script for a predictable running time.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the line differences between two files",
        long_about = "This command prints the unified diff of two files. \
        It exits with status 0 when the files are identical and 1 when they differ."
    )]
    Diff {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The modified file")]
        new: PathBuf,
        #[arg(long, help = "Always search for a shortest edit script")]
        minimal: bool,
        #[arg(
            long = "speed-large-files",
            help = "Cut long searches short when a long run of common lines shows up"
        )]
        speed_large_files: bool,
        #[arg(
            short = 'U',
            long = "unified",
            default_value_t = HUNK_CONTEXT,
            help = "Number of context lines around each change"
        )]
        context: usize,
        #[arg(
            long = "cost-limit",
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Edit cost after which a single search gives up"
        )]
        cost_limit: Option<u32>,
    },
    #[command(
        name = "similarity",
        about = "Print the similarity ratio of two strings",
        long_about = "This command prints (len(a) + len(b) - edits) / (len(a) + len(b)) \
        with six decimals. With --lower-bound, any ratio below the bound may be reported as 0."
    )]
    Similarity {
        #[arg(index = 1, help = "The first string, or file with --files")]
        a: String,
        #[arg(index = 2, help = "The second string, or file with --files")]
        b: String,
        #[arg(
            short = 'l',
            long = "lower-bound",
            default_value_t = 0.0,
            help = "Ratio below which the exact value is not needed"
        )]
        lower_bound: f64,
        #[arg(short, long, help = "Treat both operands as file paths")]
        files: bool,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let pager = should_page().then(Pager::new);
    let writer: Box<dyn Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd.to_string_lossy(), writer)?;

    let code = match &cli.command {
        Commands::Diff {
            old,
            new,
            minimal,
            speed_large_files,
            context,
            cost_limit,
        } => {
            let mut options = DiffOptions::default()
                .with_minimal(*minimal)
                .with_heuristic(*speed_large_files);
            if let Some(limit) = cost_limit {
                options = options.with_too_expensive(*limit as isize);
            }

            if session.diff(old, new, options, *context)? {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::Similarity {
            a,
            b,
            lower_bound,
            files,
        } => {
            let input = if *files {
                SimilarityInput::Files(Path::new(a), Path::new(b))
            } else {
                SimilarityInput::Strings(a, b)
            };

            session.similarity(input, *lower_bound)?;
            ExitCode::SUCCESS
        }
    };

    session.writer().flush()?;
    drop(session);

    if let Some(pager) = pager {
        minus::page_all(pager).context("Failed to page output")?;
    }

    Ok(code)
}
