use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "recipebox", bin_name = "recipebox", version = get_version())]
#[command(about = "Keep your recipes in a single local file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Recipe file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new recipe
    #[command(alias = "a")]
    Add {
        /// Name of the recipe
        name: String,

        /// Category (e.g. Soup, Dessert)
        category: String,

        /// Ingredient as "name, quantity, unit" (repeatable)
        #[arg(short, long = "ingredient", value_name = "INGREDIENT")]
        ingredients: Vec<String>,

        /// Cooking instructions
        #[arg(long, default_value = "")]
        instructions: String,
    },

    /// List recipes
    #[command(alias = "ls")]
    List {
        /// Show every recipe in full
        #[arg(long)]
        full: bool,
    },

    /// Show one recipe (names are case-insensitive)
    #[command(alias = "v")]
    View {
        /// Name of the recipe
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Edit a recipe: rename, recategorize, rewrite instructions, add ingredients
    #[command(alias = "e")]
    Edit {
        /// Name of the recipe to edit
        name: String,

        /// New name
        #[arg(long = "name", value_name = "NAME")]
        new_name: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New instructions
        #[arg(long)]
        instructions: Option<String>,

        /// Ingredient to append as "name, quantity, unit" (repeatable)
        #[arg(short, long = "ingredient", value_name = "INGREDIENT")]
        ingredients: Vec<String>,
    },

    /// Delete every recipe with this name (case-insensitive)
    #[command(alias = "rm")]
    Delete {
        /// Name of the recipe
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, ingredient-separator)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the flag.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
