use clap::{Args, Parser, Subcommand};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

#[derive(Parser, Debug)]
#[command(name = "rwa", version, about = "Search real-world-asset tokenization cases")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search tokenization cases relevant to an enterprise.
    Search(SearchArgs),

    /// Ask the backend for a canned contract-review intent response.
    Intent(IntentArgs),

    /// List the industries and company types offered for searches.
    Options,

    /// Print the CLI version.
    Version,
}

#[derive(Args, Debug)]
pub struct BackendArgs {
    /// Base URL of the RWA search backend.
    #[arg(long, env = "RWA_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Give up on the backend after this many seconds (default or 0: wait).
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Enterprise name (required).
    #[arg(long)]
    pub company: String,

    /// Industry, e.g. 新能源. Run `rwa options` for the list.
    #[arg(long)]
    pub industry: Option<String>,

    /// Company type, e.g. 上市公司.
    #[arg(long)]
    pub company_type: Option<String>,

    /// Free-text description of the enterprise.
    #[arg(long)]
    pub description: Option<String>,

    /// Skip the backend and use the built-in cases.
    #[arg(long)]
    pub offline: bool,

    /// Print the raw `{ cases: [...] }` JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,

    /// Include smart-contract code examples in the formatted output.
    #[arg(long)]
    pub show_code: bool,

    #[command(flatten)]
    pub backend: BackendArgs,
}

#[derive(Args, Debug)]
pub struct IntentArgs {
    /// The user's chat message.
    pub question: String,

    #[command(flatten)]
    pub backend: BackendArgs,
}
