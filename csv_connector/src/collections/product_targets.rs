use std::path::Path;

use common::result::product::ProductTarget;
use csv::ReaderBuilder;
use serde::Deserialize;

use crate::errors::ConnectorError;

const REQUIRED_COLUMNS: [&str; 2] = ["url", "categoria"];

#[derive(Debug, Deserialize)]
struct ProductTargetRow {
    url: String,
    categoria: String,
}

impl From<ProductTargetRow> for ProductTarget {
    fn from(row: ProductTargetRow) -> Self {
        Self {
            url: row.url,
            category: row.categoria,
        }
    }
}

/// Reads the `(url, categoria)` pairs of a product url file, in file order.
/// Other columns are ignored.
pub(crate) fn read_product_targets(
    path: &Path,
    delimiter: u8,
) -> Result<Vec<ProductTarget>, ConnectorError> {
    if !path.is_file() {
        return Err(ConnectorError::InputMissing(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().delimiter(delimiter).from_path(path)?;

    let headers = reader.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(ConnectorError::MissingColumn(missing, path.to_path_buf()));
    }

    reader
        .deserialize::<ProductTargetRow>()
        .map(|row| row.map(ProductTarget::from).map_err(ConnectorError::from))
        .collect()
}
