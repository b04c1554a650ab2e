use clap::Parser;
use otpvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref name,
            ref value,
        } => otpvault::cli::commands::add::execute(&cli, name, value.as_deref()),
        Commands::Edit {
            ref name,
            ref rename,
            ref value,
        } => otpvault::cli::commands::edit::execute(&cli, name, rename.as_deref(), value.as_deref()),
        Commands::Delete { ref name, force } => {
            otpvault::cli::commands::delete::execute(&cli, name, force)
        }
        Commands::List => otpvault::cli::commands::list::execute(&cli),
        Commands::Show { ref name } => otpvault::cli::commands::show::execute(&cli, name),
        Commands::ChangePassword => otpvault::cli::commands::change_password::execute(&cli),
    };

    if let Err(e) = result {
        otpvault::cli::output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
