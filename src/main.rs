use std::io;

use anyhow::anyhow;
use clap::Parser;

use bankomat::config::{Cli, Command};
use bankomat::{run, run_async, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(config) => {
            telemetry::init(config.env);
            server::serve(config).await
        }
        Command::Replay {
            input,
            use_async,
            env,
        } => {
            telemetry::init(env);
            let result = if use_async {
                run_async(&input, io::stdout()).await
            } else {
                run(&input, io::stdout())
            };
            result.map_err(|err| anyhow!(err))
        }
    }
}
