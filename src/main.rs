use clap::Parser;
use locator_advisor::cli::commands::{cmd_analyze, cmd_languages};
use locator_advisor::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Analyze {
            dump,
            format,
            output,
            languages,
            snippet_dir,
        } => {
            // Resolve settings: CLI > config > defaults
            let format = format.unwrap_or_else(|| config.analyze.format.clone());
            let languages = languages.or_else(|| config.analyze.languages.clone());
            let snippet_dir = snippet_dir.or_else(|| config.analyze.snippet_dir.clone());

            cmd_analyze(
                &dump,
                &format,
                output.as_deref(),
                languages.as_deref(),
                snippet_dir.as_deref(),
                cli.verbose,
            )?;
        }
        Commands::Languages => {
            cmd_languages();
        }
    }

    Ok(())
}
