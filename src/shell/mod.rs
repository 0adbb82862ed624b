//! Interactive storefront shell.
//!
//! The shell is a small state machine over [`Screen`]. Each input line is
//! parsed into a command, checked against the current screen and executed;
//! the result is a list of [`ShellOutput`] values that the binary renders.
//! Nothing here writes to the terminal, so the whole flow can be driven from
//! tests.

mod commands;
pub mod render;
mod screens;

pub use screens::{
    Notice, NoticeLevel, ProductDetailsState, ProductListState, Screen, ScreenKind,
};

use std::sync::Arc;

use tracing::{debug, error};

use crate::auth::CredentialValidator;
use crate::catalog::{CatalogClient, Product, ProductId};
use crate::cli_style::CommandHelp;
use crate::favorites::FavoritesRepository;
use commands::InnerCommand;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// What a command produced, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellOutput {
    LoginScreen,
    ProductList(ProductListState),
    ProductDetails(ProductDetailsState),
    Favorites(Vec<Product>),
    Help(Vec<CommandHelp>),
    Notice(Notice),
}

#[derive(Debug, PartialEq)]
pub enum CommandExecutionResult {
    Ok(Vec<ShellOutput>),
    Exit,
    Error(String),
}

pub struct Shell {
    catalog: Arc<dyn CatalogClient>,
    favorites: Arc<FavoritesRepository>,
    credentials: Arc<dyn CredentialValidator>,
    screen: Screen,
}

impl Shell {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        favorites: Arc<FavoritesRepository>,
        credentials: Arc<dyn CredentialValidator>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            credentials,
            screen: Screen::Login,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Names of every command, for line completion.
    pub fn command_names() -> Vec<String> {
        commands::command_names()
    }

    /// Output that draws the current screen.
    pub fn current_view(&self) -> ShellOutput {
        match &self.screen {
            Screen::Login => ShellOutput::LoginScreen,
            Screen::ProductList(list) => ShellOutput::ProductList(list.clone()),
            Screen::ProductDetails { details, .. } => ShellOutput::ProductDetails(details.clone()),
        }
    }

    pub async fn execute(&mut self, line: &str) -> CommandExecutionResult {
        let line = line.trim();
        if line.is_empty() {
            return CommandExecutionResult::Ok(Vec::new());
        }

        let args =
            shlex::split(line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

        let screen_kind = self.screen.kind();
        if let Some(name) = args.first() {
            if !commands::is_available(name, screen_kind) {
                return CommandExecutionResult::Error(format!(
                    "'{}' is not available on the {} screen, type 'help' for available commands",
                    name,
                    screen_kind.label()
                ));
            }
        }

        let command = match commands::parse(&args) {
            Ok(command) => command,
            Err(err) => return CommandExecutionResult::Error(err.to_string()),
        };

        match command {
            InnerCommand::Exit => CommandExecutionResult::Exit,
            InnerCommand::Help => {
                CommandExecutionResult::Ok(vec![ShellOutput::Help(commands::help_for(screen_kind))])
            }
            InnerCommand::Login { email, password } => {
                CommandExecutionResult::Ok(self.login(&email, &password).await)
            }
            InnerCommand::List => CommandExecutionResult::Ok(vec![self.current_view()]),
            InnerCommand::Reload => CommandExecutionResult::Ok(self.open_product_list().await),
            InnerCommand::Show { product_id } => self.show(product_id).await,
            InnerCommand::Favorite => CommandExecutionResult::Ok(self.toggle_favorite().await),
            InnerCommand::Favorites => CommandExecutionResult::Ok(vec![ShellOutput::Favorites(
                self.favorites.list_favorites().await,
            )]),
            InnerCommand::Back => {
                self.back();
                CommandExecutionResult::Ok(vec![self.current_view()])
            }
            InnerCommand::Logout => {
                debug!("Logging out");
                self.screen = Screen::Login;
                CommandExecutionResult::Ok(vec![ShellOutput::LoginScreen])
            }
        }
    }

    async fn login(&mut self, email: &str, password: &str) -> Vec<ShellOutput> {
        let accepted = match self.credentials.validate(email, password).await {
            Ok(accepted) => accepted,
            Err(err) => {
                error!("Credential check failed: {:#}", err);
                false
            }
        };

        if !accepted {
            return vec![ShellOutput::Notice(Notice::error(
                INVALID_CREDENTIALS_MESSAGE,
            ))];
        }
        self.open_product_list().await
    }

    /// Enters the product list with a fresh fetch.
    async fn open_product_list(&mut self) -> Vec<ShellOutput> {
        let list = ProductListState::load(self.catalog.as_ref()).await;
        let mut outputs = Vec::new();
        if let Some(message) = &list.error {
            outputs.push(ShellOutput::Notice(Notice::error(message.clone())));
        }
        self.screen = Screen::ProductList(list);
        outputs.push(self.current_view());
        outputs
    }

    async fn show(&mut self, product_id: ProductId) -> CommandExecutionResult {
        let list = match std::mem::replace(&mut self.screen, Screen::Login) {
            Screen::ProductList(list) => list,
            other => {
                self.screen = other;
                return CommandExecutionResult::Error(
                    "Products can only be opened from the product list".to_string(),
                );
            }
        };

        let Some(product) = list.find(product_id).cloned() else {
            self.screen = Screen::ProductList(list);
            return CommandExecutionResult::Error(format!(
                "No product with id {} in the list",
                product_id
            ));
        };

        let details = ProductDetailsState::open(product, &self.favorites).await;
        self.screen = Screen::ProductDetails { list, details };
        CommandExecutionResult::Ok(vec![self.current_view()])
    }

    async fn toggle_favorite(&mut self) -> Vec<ShellOutput> {
        let Screen::ProductDetails { details, .. } = &mut self.screen else {
            return Vec::new();
        };
        let notice = details.toggle(&self.favorites).await;
        vec![ShellOutput::Notice(notice), self.current_view()]
    }

    fn back(&mut self) {
        self.screen = match std::mem::replace(&mut self.screen, Screen::Login) {
            Screen::ProductDetails { list, .. } => Screen::ProductList(list),
            other => other,
        };
    }
}
