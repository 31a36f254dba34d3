use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rtsp::{Method, RequestLine, StartLine, StatusLine, TextCursor};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rtsp-line",
    about = "Parse and generate RTSP start-lines for media-resource control"
)]
struct Args {
    /// Log unknown methods/versions and other parser diagnostics
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode every start-line in FILE (or stdin)
    Parse {
        file: Option<PathBuf>,
    },
    /// Generate a request-line
    Request {
        /// SETUP, ANNOUNCE, TEARDOWN or DESCRIBE
        method: String,
        url: String,
    },
    /// Generate a status-line
    Response {
        code: u32,
        /// Defaults to the canonical phrase for CODE, or its class text
        reason: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(args.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("rtsp-line: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> rtsp::Result<bool> {
    match command {
        Command::Parse { file } => {
            let input = match file {
                Some(path) => fs::read(path)?,
                None => {
                    let mut buf = Vec::new();
                    io::stdin().read_to_end(&mut buf)?;
                    buf
                }
            };
            Ok(parse_all(&input))
        }
        Command::Request { method, url } => {
            let method = Method::from_token(method.as_bytes());
            emit(&StartLine::from(RequestLine::new(method, url)))
        }
        Command::Response { code, reason } => {
            let line = match reason {
                Some(reason) => StatusLine::new(code, &reason),
                None => StatusLine::from_status(code),
            };
            emit(&StartLine::from(line))
        }
    }
}

/// Returns `false` if any line failed to parse.
fn parse_all(input: &[u8]) -> bool {
    let mut cursor = TextCursor::new(input).end_as_terminator(true);
    let mut ok = true;
    let mut line_no = 0;

    while !cursor.is_eof() {
        line_no += 1;
        match StartLine::parse(&mut cursor) {
            Ok(line) => println!("{line_no}: {}", describe(&line)),
            Err(e) => {
                println!("{line_no}: error: {e}");
                ok = false;
            }
        }
    }
    ok
}

fn describe(line: &StartLine) -> String {
    match line {
        StartLine::Request(req) => format!(
            "request method={} ({:?}) url={} resource={} version={:?}",
            req.method_name(),
            req.method(),
            req.url(),
            req.resource_name().unwrap_or("-"),
            req.version
        ),
        StartLine::Response(resp) => format!(
            "response version={:?} status={} reason={:?}",
            resp.version, resp.status_code, resp.reason
        ),
    }
}

fn emit(line: &StartLine) -> rtsp::Result<bool> {
    let bytes = line.to_bytes()?;
    io::stdout().write_all(&bytes)?;
    Ok(true)
}
