mod cli;

use byterange_core::logging::{LogFormat, init_logging};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "byterange",
    version,
    about = "Serve byte ranges of a file the way an HTTP server would"
)]
struct Cli {
    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Json, global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a file for a request carrying the given Range header
    Slice {
        /// File to load into memory
        file: PathBuf,

        /// Range header value, e.g. "bytes=0-499"
        #[arg(long)]
        range: Option<String>,

        /// Path to an HCL serve config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the body here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the Content-Range value for a Range header and resource length
    ContentRange {
        /// Range header value, e.g. "bytes=0-499"
        range: String,

        /// Total resource length in bytes
        length: u64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_format.into());

    match cli.command {
        Command::Slice {
            file,
            range,
            config,
            output,
        } => {
            let status =
                cli::slice::run(&file, range.as_deref(), config.as_deref(), output.as_deref())
                    .await?;
            Ok(cli::slice::exit_code(status))
        }

        Command::ContentRange { range, length } => {
            cli::content_range::run(&range, length);
            Ok(ExitCode::SUCCESS)
        }
    }
}
