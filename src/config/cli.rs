use crate::app::dto::PaginationRequest;
use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "blog-client")]
#[command(about = "Read posts, projects and taxonomy from the public blog API")]
pub struct CliConfig {
    /// Base URL of the public API (overrides config file and BLOG_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct PageArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,
}

impl PageArgs {
    pub fn pagination(&self) -> PaginationRequest {
        PaginationRequest::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List published posts
    Posts {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        category_id: Option<u64>,
        #[arg(long)]
        tag_id: Option<u64>,
    },
    /// Show one post
    Post { slug: String },
    /// Full-text search over posts
    Search {
        query: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Record a view and print the new count
    View { slug: String },
    CategoryPosts {
        slug: String,
        #[command(flatten)]
        page: PageArgs,
    },
    TagPosts {
        slug: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List projects, optionally only featured (or non-featured) ones
    Projects {
        #[arg(long)]
        featured: Option<bool>,
    },
    Project { slug: String },
    Categories,
    Tags,
}

impl CliConfig {
    /// Loads and validates the `--config` file, if one was given.
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// Precedence: command line, then config file, then `base` (environment/defaults).
    pub fn resolve_client_config(
        &self,
        base: ClientConfig,
        file: Option<&TomlConfig>,
    ) -> Result<ClientConfig> {
        let mut resolved = match file {
            Some(file) => file.apply_to(base),
            None => base,
        };

        if let Some(api_url) = &self.api_url {
            resolved.base_url = api_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            resolved.timeout = Duration::from_millis(timeout_ms);
        }

        resolved.validate()?;
        Ok(resolved)
    }

    pub fn verbose_enabled(&self, file: Option<&TomlConfig>) -> bool {
        self.verbose || file.is_some_and(TomlConfig::verbose)
    }

    pub fn json_logs_enabled(&self, file: Option<&TomlConfig>) -> bool {
        self.json_logs || file.is_some_and(TomlConfig::json_logs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(api_url) = &self.api_url {
            validate_url("--api-url", api_url)?;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            validate_positive_number("--timeout-ms", timeout_ms, 1)?;
        }
        Ok(())
    }
}
