use std::path::{Path, PathBuf};

use common::{
    constants::{NUTRITION_FILENAME, PRODUCT_URLS_BASENAME, TEST_PRODUCT_FILENAME},
    result::{nutrition::NutritionRecord, product::ProductStub, product::ProductTarget},
};
use tracing::{info, warn};

use crate::{
    collections::{
        nutrition::NutritionRow, product_targets::read_product_targets,
        product_urls::ProductUrlRow,
    },
    errors::ConnectorError,
    sink::{COMMA, TAB, write, write_lines},
};

/// Files written by a url collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedProductUrls {
    pub csv: PathBuf,
    pub txt: PathBuf,
}

/// Reads and writes the collector's files under one output directory.
///
/// Saving an empty collection writes nothing and returns `None`.
pub struct CsvConnector {
    output_dir: PathBuf,
}

impl CsvConnector {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn product_urls_path(&self) -> PathBuf {
        self.output_dir.join(format!("{PRODUCT_URLS_BASENAME}.csv"))
    }

    fn product_urls_list_path(&self) -> PathBuf {
        self.output_dir.join(format!("{PRODUCT_URLS_BASENAME}.txt"))
    }

    /// Comma separated product file plus a plain url list next to it.
    pub fn save_product_urls(
        &self,
        stubs: &[ProductStub],
    ) -> Result<Option<SavedProductUrls>, ConnectorError> {
        if stubs.is_empty() {
            warn!("No product urls to save");
            return Ok(None);
        }

        let saved = SavedProductUrls {
            csv: self.product_urls_path(),
            txt: self.product_urls_list_path(),
        };

        let rows: Vec<ProductUrlRow> = stubs.iter().map(ProductUrlRow::from).collect();
        write(&rows, &saved.csv, COMMA)?;
        write_lines(stubs.iter().map(|stub| stub.url.as_str()), &saved.txt)?;

        info!("Saved {} product urls", stubs.len());
        info!("  CSV: {}", saved.csv.display());
        info!("  TXT: {}", saved.txt.display());

        Ok(Some(saved))
    }

    pub fn load_product_targets(&self) -> Result<Vec<ProductTarget>, ConnectorError> {
        read_product_targets(&self.product_urls_path(), COMMA)
    }

    pub fn save_nutrition(
        &self,
        records: &[NutritionRecord],
    ) -> Result<Option<PathBuf>, ConnectorError> {
        self.save_nutrition_as(records, NUTRITION_FILENAME)
    }

    pub fn save_test_product(
        &self,
        records: &[NutritionRecord],
    ) -> Result<Option<PathBuf>, ConnectorError> {
        self.save_nutrition_as(records, TEST_PRODUCT_FILENAME)
    }

    /// Tab separated nutrition file named `filename` in the output directory.
    fn save_nutrition_as(
        &self,
        records: &[NutritionRecord],
        filename: &str,
    ) -> Result<Option<PathBuf>, ConnectorError> {
        if records.is_empty() {
            warn!("No nutrition records to save");
            return Ok(None);
        }

        let path = self.output_dir.join(filename);
        let rows: Vec<NutritionRow> = records.iter().map(NutritionRow::from).collect();
        write(&rows, &path, TAB)?;

        info!("Saved {} products to {}", records.len(), path.display());

        Ok(Some(path))
    }
}
