use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use storefront::auth::StorefrontHasher;
use storefront::cli_style::{self, get_styles};

#[derive(Parser, Debug)]
#[command(styles=get_styles(), about = "Manage the storefront login password")]
struct CliArgs {
    /// Password hashing scheme.
    #[clap(long, default_value = "argon2")]
    pub hasher: StorefrontHasher,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the hash of a password, to be used as `login.password_hash`
    /// in the config file.
    Hash { password: String },

    /// Verifies a password against a hash, it doesn't change anything.
    Check { password: String, hash: String },
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    match cli_args.command {
        Command::Hash { password } => {
            if password.is_empty() {
                bail!("The password must not be empty");
            }
            let hash = cli_args
                .hasher
                .hash_new(&password)
                .context("Failed to hash the password")?;
            cli_style::print_section_header("Password hash");
            cli_style::print_key_value("Hasher", &cli_args.hasher.to_string());
            cli_style::print_key_value_highlight("password_hash", &hash);
            cli_style::print_section_footer();
            println!("[login]\npassword_hash = \"{}\"", hash);
        }
        Command::Check { password, hash } => {
            match cli_args.hasher.verify(&password, &hash) {
                Ok(true) => cli_style::print_success("The password provided is correct!"),
                Ok(false) => {
                    cli_style::print_error("Wrong password.");
                    std::process::exit(1);
                }
                Err(err) => {
                    cli_style::print_error(&format!(
                        "Could not verify the password, something went wrong: {}",
                        err
                    ));
                    std::process::exit(2);
                }
            }
        }
    }
    Ok(())
}
