//! Shelfmark Console Binary
//!
//! Runs the library menu on stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use shelfmark::{Config, Console, Library};
use tracing_subscriber::{fmt, EnvFilter};

/// Shelfmark library manager
#[derive(Parser, Debug)]
#[command(name = "shelfmark")]
#[command(about = "Book library management console")]
#[command(version)]
struct Args {
    /// Street address of the library
    #[arg(short, long, default_value = "Madison, WI")]
    address: String,

    /// Librarian username
    #[arg(short, long, default_value = "april")]
    username: String,

    /// Librarian password
    #[arg(short, long, default_value = "abc")]
    password: String,

    /// Maximum books one subscriber may hold
    #[arg(short = 'm', long, default_value = "10")]
    max_checked_out: usize,

    /// Book file to load before the first prompt
    #[arg(short, long)]
    load: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr so the menus on stdout stay readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Shelfmark v{}", shelfmark::VERSION);
    tracing::info!("Library address: {}", args.address);

    let config = Config::builder()
        .library_address(&args.address)
        .librarian_username(&args.username)
        .librarian_password(&args.password)
        .max_books_checked_out(args.max_checked_out)
        .build();

    let mut library = match Library::new(config) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to create library: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &args.load {
        match library.load_books(path) {
            Ok(ids) => tracing::info!("Preloaded {} books from {}", ids.len(), path.display()),
            Err(e) => {
                tracing::error!("Failed to preload books: {}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    if let Err(e) = console.run(&mut library) {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}
