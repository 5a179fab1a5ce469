//! bitboard_chess UCI engine

use bitboard_chess::uci::UCI;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut uci = UCI::new();
    uci.run()
}
