#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use client::net::api::{ApiError, JsonTransport, Params, get_identity_providers, get_project_activity};
use routing::{RouteTable, Verb};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use wire::ActivityOptions;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("route table failed to build: {0}")]
    Routes(#[from] routing::RouteError),
    #[error("no route matches {verb} {path}")]
    NoRoute { verb: Verb, path: String },
}

#[derive(Parser, Debug)]
#[command(name = "sonar-web", about = "Project activity API and legacy route table CLI")]
struct Cli {
    #[arg(long, env = "SONAR_BASE_URL", default_value = "http://localhost:9000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the activity timeline of a project.
    Activity(ActivityArgs),
    /// List the identity providers offered at login.
    Providers,
    Routes(RoutesCommand),
}

#[derive(Args, Debug)]
struct ActivityArgs {
    project: String,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    page: Option<u32>,

    #[arg(long)]
    page_size: Option<u32>,
}

impl ActivityArgs {
    fn options(&self) -> ActivityOptions {
        ActivityOptions { category: self.category.clone(), page_index: self.page, page_size: self.page_size }
    }
}

#[derive(Args, Debug)]
struct RoutesCommand {
    #[command(subcommand)]
    command: RoutesSubcommand,
}

#[derive(Subcommand, Debug)]
enum RoutesSubcommand {
    /// Print the legacy route table in match order.
    List,
    /// Show which controller action a request path dispatches to.
    Recognize {
        path: String,
        #[arg(long, default_value = "GET")]
        verb: Verb,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Activity(args) => run_activity(&cli.base_url, &args).await,
        Command::Providers => run_providers(&cli.base_url).await,
        Command::Routes(routes) => run_routes(routes),
    }
}

async fn run_activity(base_url: &str, args: &ActivityArgs) -> Result<(), CliError> {
    let transport = HttpTransport::new(base_url);
    let response = get_project_activity(&transport, &args.project, Some(&args.options())).await?;
    tracing::info!(
        analyses = response.analyses.len(),
        total = response.paging.total,
        page = response.paging.page_index,
        "project activity fetched"
    );
    print_json(&serde_json::to_value(&response)?)
}

async fn run_providers(base_url: &str) -> Result<(), CliError> {
    let transport = HttpTransport::new(base_url);
    let providers = get_identity_providers(&transport).await?;
    print_json(&serde_json::to_value(&providers)?)
}

fn run_routes(routes: RoutesCommand) -> Result<(), CliError> {
    let table = routing::legacy::legacy_routes()?;
    match routes.command {
        RoutesSubcommand::List => {
            for line in route_listing(&table) {
                println!("{line}");
            }
            Ok(())
        }
        RoutesSubcommand::Recognize { path, verb } => {
            let dispatch = table.recognize(verb, &path).ok_or(CliError::NoRoute { verb, path })?;
            print_json(&serde_json::json!({
                "pattern": dispatch.pattern,
                "controller": dispatch.controller,
                "action": dispatch.action,
                "params": dispatch.params,
            }))
        }
    }
}

fn route_listing(table: &RouteTable) -> Vec<String> {
    table.routes().iter().map(ToString::to_string).collect()
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// `JsonTransport` over reqwest, rooted at the server base URL.
struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    fn new(base_url: &str) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.to_owned() }
    }
}

fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn check_status(path: &str, response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status { path: path.to_owned(), status: status.as_u16() })
    }
}

#[async_trait(?Send)]
impl JsonTransport for HttpTransport {
    async fn get_json(&self, path: &str, query: &Params) -> Result<Value, ApiError> {
        let url = endpoint_url(&self.base_url, path);
        tracing::info!(%url, ?query, "GET");
        let response = self.http.get(&url).query(query).send().await.map_err(network)?;
        check_status(path, &response)?;
        response.json::<Value>().await.map_err(network)
    }

    async fn post_form(&self, path: &str, form: &Params) -> Result<(), ApiError> {
        let url = endpoint_url(&self.base_url, path);
        tracing::info!(%url, "POST");
        let response = self.http.post(&url).form(form).send().await.map_err(network)?;
        check_status(path, &response)
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
