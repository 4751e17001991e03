use clap::Parser;
use identicon::cli::{Cli, Commands};
use identicon::output::Printer;
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => identicon::cli::render::run(args, &printer)?,
        Commands::Code(args) => identicon::cli::code::run(args)?,
        Commands::Serve(args) => identicon::cli::serve::run(args).await?,
        Commands::Completions(args) => identicon::cli::completions::run(args)?,
    }

    Ok(())
}
