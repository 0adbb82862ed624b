use clap::{CommandFactory, Parser, Subcommand};

use super::screens::ScreenKind;
use crate::catalog::ProductId;
use crate::cli_style::{get_styles, CommandHelp};

#[derive(Parser, Debug)]
#[command(styles=get_styles(), name = "", disable_help_subcommand = true)]
pub(crate) struct InnerCli {
    #[command(subcommand)]
    pub command: InnerCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum InnerCommand {
    /// Sign in with the store account.
    Login { email: String, password: String },

    /// Shows the product list again.
    List,

    /// Fetches the product list from the catalog again.
    Reload,

    /// Opens the details of a product from the list.
    Show { product_id: ProductId },

    /// Adds the open product to favorites, or removes it if already there.
    Favorite,

    /// Shows every saved favorite.
    Favorites,

    /// Goes back to the product list.
    Back,

    /// Signs out and returns to the login screen.
    Logout,

    /// Shows the commands available on this screen.
    Help,

    /// Close this program.
    Exit,
}

/// Which screens accept the command named `name`. Unknown names are left to
/// the parser to reject.
pub(crate) fn is_available(name: &str, screen: ScreenKind) -> bool {
    match name {
        "login" => screen == ScreenKind::Login,
        "list" | "reload" | "show" => screen == ScreenKind::ProductList,
        "favorite" | "back" => screen == ScreenKind::ProductDetails,
        "favorites" | "logout" => screen != ScreenKind::Login,
        _ => true,
    }
}

pub(crate) fn parse(args: &[String]) -> Result<InnerCommand, clap::Error> {
    InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)))
        .map(|cli| cli.command)
}

pub(crate) fn command_names() -> Vec<String> {
    InnerCli::command()
        .get_subcommands()
        .map(|sc| sc.get_name().to_string())
        .collect()
}

/// Help entries for the commands accepted on `screen`, in declaration order.
pub(crate) fn help_for(screen: ScreenKind) -> Vec<CommandHelp> {
    InnerCli::command()
        .get_subcommands()
        .filter(|sc| is_available(sc.get_name(), screen))
        .map(|sc| {
            let args = sc
                .get_positionals()
                .map(|arg| format!("<{}>", arg.get_id().as_str().replace('_', "-")))
                .collect::<Vec<_>>()
                .join(" ");
            CommandHelp {
                name: sc.get_name().to_string(),
                args,
                description: sc.get_about().map(|s| s.to_string()).unwrap_or_default(),
            }
        })
        .collect()
}
