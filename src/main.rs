use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use sqlite_seek::cli::Cli;
use sqlite_seek::session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), io::stderr());
    if let Some(path) = cli.database {
        session = session.with_database(path);
    }

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

// Logs go to stderr and stay quiet unless RUST_LOG asks for more, so the
// interactive transcript on stdout is unaffected.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
