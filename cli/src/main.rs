use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use theme::dom::bindings::{inline_ids, overlay_ids};
use theme::dom::{Element, MemoryDocument, SearchBindings};
use theme::search::{FuzzyMatcher, IndexError, Overlay, SearchController, SearchIndex, SearchOutcome, SearchVariant};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0} search markup did not resolve")]
    Markup(SearchVariant),
}

#[derive(Parser, Debug)]
#[command(name = "sitekit-cli", about = "Inspect a site's search index and query it like the browser does")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a running preview server.
    Ping {
        #[arg(long, env = "SITEKIT_BASE_URL", default_value = "http://127.0.0.1:5277")]
        base_url: String,
    },
    /// Validate a search index and print its entry count.
    Check(IndexArgs),
    /// Run a query and print the result list the page would render.
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct IndexArgs {
    /// File path or http(s) URL of `search_index.json`.
    #[arg(long, env = "SITEKIT_INDEX", default_value = "public/static/search_index.json")]
    index: String,
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[command(flatten)]
    source: IndexArgs,

    #[arg(long, value_enum, default_value_t = VariantArg::Inline)]
    variant: VariantArg,

    query: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Inline,
    Overlay,
}

impl From<VariantArg> for SearchVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Inline => Self::Inline,
            VariantArg::Overlay => Self::Overlay,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Ping { base_url } => run_ping(&base_url).await,
        Command::Check(args) => {
            let index = load_index(&args.index).await?;
            println!("{}: {} entries", args.index, index.len());
            Ok(())
        }
        Command::Search(args) => {
            let index = load_index(&args.source.index).await?;
            for line in render_search(index, args.variant.into(), &args.query)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let base = base_url.trim_end_matches('/');

    let health = format!("{base}/healthz");
    let response = client.get(&health).send().await?;
    if !response.status().is_success() {
        return Err(CliError::Status { status: response.status().as_u16(), url: health });
    }
    println!("ok");

    let report = client.get(format!("{base}/_sitekit/search-index")).send().await?;
    let json = report.json::<Value>().await?;
    print_json(&json)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load an index from disk or over HTTP with the browser's parser.
async fn load_index(source: &str) -> Result<SearchIndex, CliError> {
    let bytes = if is_remote(source) {
        let response = reqwest::get(source).await?;
        if !response.status().is_success() {
            return Err(CliError::Status { status: response.status().as_u16(), url: source.to_owned() });
        }
        response.bytes().await?.to_vec()
    } else {
        tokio::fs::read(source)
            .await
            .map_err(|source_err| CliError::Read { path: source.to_owned(), source: source_err })?
    };
    Ok(SearchIndex::from_slice(&bytes)?)
}

// =============================================================================
// HEADLESS SEARCH
// =============================================================================

/// Minimal page carrying the markup for `variant`.
fn search_page(variant: SearchVariant) -> MemoryDocument {
    let markup = match variant {
        SearchVariant::Inline => format!(
            r#"<button id="{toggle}"></button>
<div class="marmite-search-bar">
  <input id="{input}" type="search">
  <div class="marmite-search-bar-result"><ul id="{results}"></ul></div>
</div>"#,
            toggle = inline_ids::TOGGLE,
            input = inline_ids::INPUT,
            results = inline_ids::RESULTS,
        ),
        SearchVariant::Overlay => format!(
            r#"<button id="{toggle}"></button>
<div id="{overlay}" style="display: none;">
  <input id="{input}" type="search"><ul id="{results}"></ul>
</div>"#,
            toggle = overlay_ids::TOGGLE,
            overlay = overlay_ids::OVERLAY,
            input = overlay_ids::INPUT,
            results = overlay_ids::RESULTS,
        ),
    };
    MemoryDocument::parse(&markup)
}

/// Open search, type `query`, and return the rendered list as text lines.
fn render_search(index: SearchIndex, variant: SearchVariant, query: &str) -> Result<Vec<String>, CliError> {
    let doc = search_page(variant);
    let bindings = SearchBindings::resolve(&doc, variant).ok_or(CliError::Markup(variant))?;
    let overlay = Overlay::new(bindings.clone());
    let results = bindings.results.clone();
    let input = bindings.input.clone();
    let mut controller = SearchController::new(bindings, FuzzyMatcher::default());
    controller.load(Ok(index));

    overlay.open();
    input.set_value(query);
    let Some(outcome) = controller.refresh() else {
        return Ok(Vec::new());
    };
    if outcome == SearchOutcome::BelowThreshold {
        return Ok(vec!["(hidden)".to_owned()]);
    }
    Ok(results
        .items()
        .iter()
        .map(|item| match item.href() {
            Some(href) => format!("{}\t{href}", item.text()),
            None => item.text().to_owned(),
        })
        .collect())
}
