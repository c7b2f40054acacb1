//! One module per subcommand. Each exposes its clap arguments and a `run`
//! entry point; nothing executes until `main` dispatches to it.

pub mod fetch_ohlcv;
pub mod fetch_yields;
pub mod real_data;
pub mod simulate;
