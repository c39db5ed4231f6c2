//! caskr command line entry point

use caskr::cli::{Cli, Commands};
use caskr::{commands, logging};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::List => commands::list::run(cli.tap),
        Commands::Info(args) => commands::info::run(cli.tap, args),
        Commands::Url(args) => commands::url::run(cli.tap, args),
        Commands::Verify(args) => commands::verify::run(cli.tap, args),
        Commands::Fetch(args) => commands::fetch::run(cli.tap, args),
        Commands::Plan(command) => commands::plan::run(cli.tap, cli.appdir, command),
        Commands::Livecheck(args) => commands::livecheck::run(cli.tap, args),
        Commands::Audit(args) => commands::audit::run(cli.tap, args),
        Commands::Version => commands::version::run(cli.tap),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
