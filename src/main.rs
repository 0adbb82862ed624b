use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

use storefront::auth::{ConfiguredCredentials, CredentialValidator};
use storefront::catalog::{CatalogClient, HttpCatalogClient, DEFAULT_PRODUCTS_URL};
use storefront::cli_style::{self, get_styles};
use storefront::config::{AppConfig, CliConfig, FileConfig, StorageBackend, DEFAULT_TIMEOUT_SEC};
use storefront::favorites::FavoritesRepository;
use storefront::kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use storefront::shell::{render, CommandExecutionResult, Shell};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles(), version, about = "Nepal Fashion storefront shell")]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override flags.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// JSON file holding the favorites. When omitted, an existing
    /// storefront_store.json is searched from the current directory upwards.
    #[clap(long, value_parser = parse_path)]
    pub store_path: Option<PathBuf>,

    /// Where favorites are kept.
    #[clap(long, value_enum, default_value_t = StorageBackend::File)]
    pub storage: StorageBackend,

    /// URL of the product list endpoint.
    #[clap(long, default_value = DEFAULT_PRODUCTS_URL)]
    pub catalog_url: String,

    /// Timeout of catalog requests, in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SEC)]
    pub timeout_sec: u64,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            store_path: self
                .store_path
                .clone()
                .or_else(FileKeyValueStore::infer_path),
            storage: self.storage,
            catalog_url: self.catalog_url.clone(),
            timeout_sec: self.timeout_sec,
        }
    }
}

#[derive(rustyline_derive::Hinter)]
struct ShellHelper {
    commands_names: Vec<String>,
}

impl ShellHelper {
    pub fn new() -> Self {
        ShellHelper {
            commands_names: Shell::command_names(),
        }
    }
}

impl Completer for ShellHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}

fn build_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match config.storage {
        StorageBackend::File => {
            info!("Keeping favorites in {:?}", config.store_path);
            Arc::new(FileKeyValueStore::new(config.store_path.clone()))
        }
        StorageBackend::Memory => {
            warn!("Favorites are kept in memory and will be lost on exit");
            Arc::new(MemoryKeyValueStore::new())
        }
    }
}

fn build_credentials(config: &AppConfig) -> Result<Arc<dyn CredentialValidator>> {
    let credentials = match &config.login.password_hash {
        Some(hash) => ConfiguredCredentials::new(config.login.email.clone(), hash.clone()),
        None => ConfiguredCredentials::default_account()?,
    };
    info!("Login enabled for {}", credentials.email());
    Ok(Arc::new(credentials))
}

/// Line that is safe to echo and keep in history.
fn redact(line: &str) -> String {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("login") => match words.next() {
            Some(email) => format!("login {} ********", email),
            None => "login".to_string(),
        },
        _ => line.trim().to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // Logs go to stderr, stdout belongs to the shell
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let catalog: Arc<dyn CatalogClient> = Arc::new(
        HttpCatalogClient::new(config.catalog_url.clone(), config.timeout_sec)
            .context("Failed to create the catalog client")?,
    );
    let favorites = Arc::new(FavoritesRepository::new(build_store(&config)));
    let credentials = build_credentials(&config)?;

    let mut shell = Shell::new(catalog, favorites, credentials);

    let store_description = match config.storage {
        StorageBackend::File => config.store_path.display().to_string(),
        StorageBackend::Memory => "in memory".to_string(),
    };
    cli_style::print_welcome(&[
        ("Catalog", config.catalog_url.as_str()),
        ("Favorites", store_description.as_str()),
        ("Version", env!("CARGO_PKG_VERSION")),
    ]);
    render::render(&shell.current_view());

    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<ShellHelper, FileHistory>::with_config(rl_config)?;
    rl.set_helper(Some(ShellHelper::new()));

    loop {
        let prompt = cli_style::get_prompt(shell.screen().kind().label());
        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let safe_line = redact(&line);
                let _ = rl.add_history_entry(safe_line.as_str());
                let _ = rl.clear_screen();
                cli_style::print_command_echo(&safe_line);

                match shell.execute(&line).await {
                    CommandExecutionResult::Ok(outputs) => render::render_all(&outputs),
                    CommandExecutionResult::Exit => break,
                    CommandExecutionResult::Error(err) => {
                        cli_style::print_error(err.trim_end());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }

    cli_style::print_goodbye();
    Ok(())
}
