//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use gradebook_core::Take;

use crate::commands::query::QueryArgs;
use crate::output::OutputFormat;

mod commands;
mod output;
mod traverse;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Exam score database and course queries")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every command that reads a data file.
#[derive(Args)]
struct DataFileArgs {
    /// Data file, relative to the configured data directory
    #[arg(long)]
    file: PathBuf,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct CourseArgs {
    #[command(flatten)]
    data: DataFileArgs,

    /// Course to query (e.g. "Java_Mar_2017")
    #[arg(long)]
    course: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl From<CourseArgs> for QueryArgs {
    fn from(args: CourseArgs) -> Self {
        QueryArgs {
            file: args.data.file,
            course: args.course,
            format: args.format,
            config: args.data.config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell
    Shell {
        /// Override the configured data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a course listing, or one student's scores
    Show {
        #[command(flatten)]
        course: CourseArgs,

        /// Student to look up
        #[arg(long)]
        student: Option<String>,
    },

    /// Filter a course's students by grade band
    Filter {
        #[command(flatten)]
        course: CourseArgs,

        /// Filter name: excellent, average, poor
        #[arg(long)]
        filter: String,

        /// Number of students to take, or "all"
        #[arg(long)]
        take: Option<Take>,
    },

    /// Order a course's students
    Order {
        #[command(flatten)]
        course: CourseArgs,

        /// Order name: ascending, descending, alphabetical
        #[arg(long)]
        order: String,

        /// Number of students to take, or "all"
        #[arg(long)]
        take: Option<Take>,
    },

    /// Per-course summary table
    Summary {
        #[command(flatten)]
        data: DataFileArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Report every problem in a data file
    Validate {
        #[command(flatten)]
        data: DataFileArgs,

        /// Exit code 1 if any problem is found
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "gradebook=debug"
    } else {
        "gradebook=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();

    let result = match cli.command {
        Commands::Shell { data_dir, config } => commands::shell::execute(config, data_dir),
        Commands::Show { course, student } => commands::query::show(course.into(), student),
        Commands::Filter {
            course,
            filter,
            take,
        } => commands::query::filter(course.into(), filter, take),
        Commands::Order {
            course,
            order,
            take,
        } => commands::query::order(course.into(), order, take),
        Commands::Summary { data, format } => {
            commands::summary::execute(data.file, format, data.config)
        }
        Commands::Validate { data, strict } => {
            commands::validate::execute(data.file, strict, data.config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
