mod cli;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use country_explorer::api::{CountriesApiClient, HttpCountryRepository};
use country_explorer::config::Config;
use country_explorer::domain::{Continent, CountryTransformer};
use country_explorer::explorer::detail::load_country_detail;
use country_explorer::explorer::CountryExplorer;
use country_explorer::flow::FetchCountriesFlow;
use country_explorer::logging::init_tracing;
use country_explorer::service::CountryService;
use country_explorer::store::{CountriesIntent, CountriesStore};

#[derive(Debug, Parser)]
#[command(
    name = "country-explorer",
    version,
    about = "Search, filter and page through country data"
)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List countries, optionally filtered.
    List {
        /// Case-insensitive match on the common or official name.
        #[arg(long)]
        search: Option<String>,
        /// Continent to include; repeat for several.
        #[arg(long = "continent")]
        continents: Vec<Continent>,
        /// Exact language name, e.g. "Portuguese".
        #[arg(long)]
        language: Option<String>,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print every language spoken in at least one country.
    Languages,
    /// Show one country by ISO code.
    Show { code: String },
}

type Service = CountryService<HttpCountryRepository>;

fn build_service(config: &Config) -> anyhow::Result<Arc<Service>> {
    let client = CountriesApiClient::new(&config.api).context("Failed to create API client")?;
    let transformer = CountryTransformer::with_locale(config.api.locale.clone());
    Ok(Arc::new(CountryService::with_transformer(
        HttpCountryRepository::new(client),
        transformer,
    )))
}

async fn load_explorer(
    service: Arc<Service>,
    config: &Config,
) -> anyhow::Result<CountryExplorer<HttpCountryRepository>> {
    let flow = FetchCountriesFlow::new(CountriesStore::default(), service);
    let explorer = CountryExplorer::new(
        flow,
        Duration::from_millis(config.explorer.search_debounce_ms),
    );

    explorer.load().await.context("Countries fetch did not finish")?;
    if let Some(error) = explorer.store().select(|s| s.error.clone()) {
        bail!(error);
    }
    Ok(explorer)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let service = build_service(&config)?;

    match cli.command {
        Command::List {
            search,
            continents,
            language,
            page,
        } => {
            let explorer = load_explorer(service, &config).await?;
            let store = explorer.store();

            // One-shot run: commit every filter at once instead of going
            // through the debounced search box.
            store.dispatch(CountriesIntent::SetSearchTerm(search.unwrap_or_default()));
            store.dispatch(CountriesIntent::SetContinents(
                continents.iter().map(|c| c.to_string()).collect(),
            ));
            store.dispatch(CountriesIntent::SetLanguage(language.unwrap_or_default()));
            store.dispatch(CountriesIntent::ApplyFilters);
            explorer.go_to_page(page);

            let view = explorer.view();
            if view.pagination.current_page != page {
                eprintln!(
                    "Page {} is out of range, showing page {}",
                    page, view.pagination.current_page
                );
            }
            print!("{}", cli::render_list(&view));
        }
        Command::Languages => {
            let explorer = load_explorer(service, &config).await?;
            for language in explorer.view().available_languages {
                println!("{}", language);
            }
        }
        Command::Show { code } => {
            let detail = load_country_detail(&service, &code).await;
            match (detail.country, detail.error) {
                (Some(country), _) => print!("{}", cli::render_detail(&country)),
                (None, Some(error)) => bail!("{}: {}", error, code),
                (None, None) => bail!("No country code given"),
            }
        }
    }

    Ok(())
}
