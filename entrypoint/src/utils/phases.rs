use std::thread::sleep;

use common::{
    config::CollectorConfig,
    constants::BASE_URL,
    result::{
        nutrition::{NutritionField, NutritionRecord},
        product::{ProductStub, ProductTarget},
    },
    stop::StopSignal,
};
use crawler::{
    discovery::find_browser_executable,
    session::ChromeSession,
    traits::{PageHandle, Query},
};
use csv_connector::connector::CsvConnector;
use retailers::{
    clients::{listing_client::ListingClient, product_client::ProductClient},
    retailers::max_titanium::MaxTitanium,
    structures::Retailer,
};
use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::{
    cli::{Cli, Command, DEFAULT_ZOOM_PERCENT, TestProductArgs, URL_PHASE_ZOOM_PERCENT},
    errors::CollectorError,
};

/// Runs the subcommand `cli` asks for. Blocks until the run is over.
pub fn run(cli: &Cli, stop: &StopSignal) -> Result<(), CollectorError> {
    let phases = Phases::new(cli, stop.clone());

    match &cli.command {
        Command::Urls => phases.collect_urls().map(|_| ()),
        Command::Nutrition => {
            let targets = phases.connector.load_product_targets()?;
            phases.collect_nutrition(&targets)
        }
        Command::Full => phases.full(),
        Command::TestProduct(args) => phases.test_product(args),
        Command::BrowserCheck => phases.browser_check(),
    }
}

struct Phases<'c> {
    cli: &'c Cli,
    config: CollectorConfig,
    connector: CsvConnector,
    stop: StopSignal,
}

impl<'c> Phases<'c> {
    fn new(cli: &'c Cli, stop: StopSignal) -> Self {
        Self {
            cli,
            config: cli.collector_config(),
            connector: CsvConnector::new(cli.output_dir.clone()),
            stop,
        }
    }

    fn collect_urls(&self) -> Result<Vec<ProductStub>, CollectorError> {
        info!("=== Product url collection ===");

        let retailer = MaxTitanium::new();
        let categories = retailer.get_search_terms();

        let session = ChromeSession::launch(&self.cli.launch_config(URL_PHASE_ZOOM_PERCENT))?;
        let client = ListingClient::new(
            &session,
            Box::new(retailer),
            self.config.clone(),
            self.stop.clone(),
        );

        let stubs = client.collect_urls(&categories)?;
        drop(client);
        session.quit();

        for category in &categories {
            let count = stubs
                .iter()
                .filter(|stub| stub.category == category.name)
                .count();
            info!("  {}: {count} products", category.name);
        }

        self.connector.save_product_urls(&stubs)?;

        Ok(stubs)
    }

    fn collect_nutrition(&self, targets: &[ProductTarget]) -> Result<(), CollectorError> {
        info!("=== Nutrition collection ===");

        let records = self.collect_records(targets)?;

        for record in &records {
            info!(
                "  {}: {} kcal, {} g protein",
                record.product_name, record.calories_kcal, record.protein_g
            );
        }

        self.connector.save_nutrition(&records)?;

        Ok(())
    }

    fn collect_records(
        &self,
        targets: &[ProductTarget],
    ) -> Result<Vec<NutritionRecord>, CollectorError> {
        let session = ChromeSession::launch(&self.cli.launch_config(DEFAULT_ZOOM_PERCENT))?;
        let client = ProductClient::new(
            &session,
            Box::new(MaxTitanium::new()),
            self.config.clone(),
            self.stop.clone(),
        );

        let records = client.collect_nutrition(targets)?;
        drop(client);
        session.quit();

        Ok(records)
    }

    fn full(&self) -> Result<(), CollectorError> {
        let stubs = self.collect_urls()?;

        if stubs.is_empty() {
            return Err(CollectorError::NoProductUrls);
        }

        info!(
            "Starting nutrition collection in {:?}",
            self.config.phase_delay
        );
        sleep(self.config.phase_delay);

        let targets: Vec<ProductTarget> = stubs.iter().map(ProductTarget::from).collect();
        self.collect_nutrition(&targets)
    }

    fn test_product(&self, args: &TestProductArgs) -> Result<(), CollectorError> {
        info!("=== Single product test ===");

        let target = ProductTarget {
            url: args.url.clone(),
            category: args.category.clone(),
        };
        let records = self.collect_records(std::slice::from_ref(&target))?;

        match records.first() {
            Some(record) => {
                info!("Product: {}", record.product_name);
                for field in NutritionField::iter() {
                    info!("  {field}: {}", record.get(field));
                }
            }
            None => warn!("No data extracted from {}", target.url),
        }

        self.connector.save_test_product(&records)?;

        Ok(())
    }

    fn browser_check(&self) -> Result<(), CollectorError> {
        let executable = find_browser_executable(self.cli.chrome_path.as_deref())?;
        info!("Browser executable: {}", executable.display());

        let launch = self.cli.launch_config(DEFAULT_ZOOM_PERCENT);
        info!(
            "Headless: {}, zoom: {}%, output directory: {}, max scrolls: {}",
            launch.is_headless(),
            launch.zoom_percent(),
            self.connector.output_dir().display(),
            self.config.max_scrolls
        );

        let session = ChromeSession::launch(&launch)?;
        session.navigate(BASE_URL)?;
        session.wait_until(&Query::css("body"), self.config.core_timeout)?;
        info!("Loaded '{}'", session.title()?);
        session.quit();

        info!("Browser check passed");

        Ok(())
    }
}
