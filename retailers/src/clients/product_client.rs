use std::{fmt::Display, thread::sleep};

use common::{
    config::CollectorConfig,
    result::{nutrition::NutritionRecord, product::ProductTarget},
    stop::StopSignal,
};
use crawler::{
    errors::CrawlerError,
    traits::{ElementHandle, PageHandle},
};
use tracing::{debug, info, warn};

use crate::{
    errors::RetailerError,
    locator::{Located, RetryPolicy, resolve},
    nutrition::{parser::NutritionParser, table::read_first_table},
    structures::Retailer,
};

/// Where a product page currently is in its extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductStage {
    WaitingForCore,
    ResolvingPanel,
    OpeningPanel,
    ReadingTable,
}

impl Display for ProductStage {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProductStage::WaitingForCore => "waiting for product heading",
            ProductStage::ResolvingPanel => "looking for nutrition panel",
            ProductStage::OpeningPanel => "opening nutrition panel",
            ProductStage::ReadingTable => "reading nutrition table",
        };

        write!(formatter, "{name}")
    }
}

/// Visits product pages one by one and reads their nutrition facts.
pub struct ProductClient<'p, P: PageHandle> {
    page: &'p P,
    retailer: Box<dyn Retailer>,
    parser: NutritionParser,
    config: CollectorConfig,
    stop: StopSignal,
}

impl<'p, P: PageHandle> ProductClient<'p, P> {
    pub fn new(
        page: &'p P,
        retailer: Box<dyn Retailer>,
        config: CollectorConfig,
        stop: StopSignal,
    ) -> Self {
        Self::with_parser(page, retailer, NutritionParser::new(), config, stop)
    }

    pub fn with_parser(
        page: &'p P,
        retailer: Box<dyn Retailer>,
        parser: NutritionParser,
        config: CollectorConfig,
        stop: StopSignal,
    ) -> Self {
        Self {
            page,
            retailer,
            parser,
            config,
            stop,
        }
    }

    /// One record per product whose page rendered, in input order.
    pub fn collect_nutrition(
        &self,
        products: &[ProductTarget],
    ) -> Result<Vec<NutritionRecord>, RetailerError> {
        info!("Processing {} products", products.len());

        let mut records = Vec::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            if self.stop.is_raised() {
                return Err(RetailerError::Interrupted(records.len()));
            }

            info!("[{}/{}]", index + 1, products.len());

            if let Some(record) = self.collect_product(product)? {
                records.push(record);
            }

            if index + 1 < products.len() {
                sleep(self.config.product_delay);
            }
        }

        info!("{} of {} products extracted", records.len(), products.len());

        Ok(records)
    }

    /// Reads one product page.
    ///
    /// `Ok(None)` when the page fails to load or never shows its heading. A
    /// missing or broken nutrition panel still yields a record, with zeroed
    /// values. Only a lost browser session is an `Err`.
    pub fn collect_product(
        &self,
        product: &ProductTarget,
    ) -> Result<Option<NutritionRecord>, RetailerError> {
        info!("Processing: {}", product.url);

        if let Err(err) = self.page.navigate(&product.url) {
            if !err.is_transient() {
                return Err(err.into());
            }

            warn!("Skipping {}: {err}", product.url);
            return Ok(None);
        }

        debug!("{}: {}", product.url, ProductStage::WaitingForCore);
        let core_query = self.retailer.get_product_core_query();
        let name = match self
            .page
            .wait_until(&core_query, self.config.core_timeout)
            .and_then(|heading| heading.text())
        {
            Ok(name) => name.trim().to_string(),
            Err(err) => {
                warn!("Skipping {}: {err}", product.url);
                return Ok(None);
            }
        };
        info!("Product: {name}");

        let record = NutritionRecord::new(name, product.url.clone(), product.category.clone());

        sleep(self.config.pre_scan_settle);

        let rows = match self.read_panel(&product.url) {
            Ok(rows) => rows,
            Err(err) => {
                warn!("Nutrition panel unusable on {}: {err}", product.url);
                Vec::new()
            }
        };

        let record = record.with_values_from(&self.parser.parse(&rows));
        info!(
            "Extracted: {} kcal, {} g protein",
            record.calories_kcal, record.protein_g
        );

        Ok(Some(record))
    }

    fn read_panel(&self, url: &str) -> Result<Vec<(String, String)>, CrawlerError> {
        debug!("{url}: {}", ProductStage::ResolvingPanel);

        let target = self.retailer.get_panel_target();
        let policy = RetryPolicy {
            max_attempts: self.config.max_scrolls,
            scroll_step_px: self.config.scroll_step_px,
            settle: self.config.scroll_settle,
        };

        let control = match resolve(self.page, &target, &policy)? {
            Located::Found {
                element,
                strategy,
                scrolls,
            } => {
                info!("Nutrition panel found via {strategy} after {scrolls} scroll(s)");
                element
            }
            Located::NotFound { scrolls } => {
                warn!("Nutrition panel not found after {scrolls} scroll(s)");
                return Ok(Vec::new());
            }
        };

        debug!("{url}: {}", ProductStage::OpeningPanel);
        control.scroll_into_view()?;
        sleep(self.config.scroll_into_view_settle);
        control.click()?;
        sleep(self.config.post_click_settle);

        debug!("{url}: {}", ProductStage::ReadingTable);
        let rows = read_first_table(self.page)?;

        if rows.is_empty() {
            warn!("Nutrition panel opened but no table rows were found");
        }

        Ok(rows)
    }
}
