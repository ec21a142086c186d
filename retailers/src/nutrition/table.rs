use crawler::{
    errors::CrawlerError,
    traits::{ElementHandle, PageHandle, Query},
};
use tracing::{debug, warn};

const TABLE_SELECTOR: &str = "table";
const ROW_SELECTOR: &str = "tr";
const CELL_SELECTOR: &str = "td";

/// Reads `(label, value)` pairs from the first table on the page.
///
/// Rows with fewer than two cells (headers, spacers) are skipped, as are
/// rows whose cells cannot be read. No table at all yields an empty list.
pub fn read_first_table<P: PageHandle>(page: &P) -> Result<Vec<(String, String)>, CrawlerError> {
    let Some(table) = page.find_one(&Query::css(TABLE_SELECTOR))? else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();

    for (index, row) in table.find_all(ROW_SELECTOR)?.iter().enumerate() {
        let cells = match row.find_all(CELL_SELECTOR) {
            Ok(cells) => cells,
            Err(err) => {
                warn!("Failed to read row {}: {err}", index + 1);
                continue;
            }
        };

        if cells.len() < 2 {
            continue;
        }

        match (cells[0].text(), cells[1].text()) {
            (Ok(label), Ok(value)) => {
                let (label, value) = (label.trim().to_string(), value.trim().to_string());
                debug!("  {}. {label}: {value}", index + 1);
                rows.push((label, value));
            }
            (Err(err), _) | (_, Err(err)) => warn!("Failed to read row {}: {err}", index + 1),
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakePage};

    fn row(label: &str, value: &str) -> FakeElement {
        FakeElement::new("").with_children(
            "td",
            vec![FakeElement::new(label), FakeElement::new(value)],
        )
    }

    #[test]
    fn reads_label_value_pairs_and_skips_header_rows() {
        let header = FakeElement::new("").with_children("td", vec![FakeElement::new("Quantidade por porção")]);
        let table = FakeElement::new("").with_children(
            "tr",
            vec![header, row(" Proteínas (g) ", "25,4 g "), row("Sódio", "85 mg")],
        );
        let page = FakePage::single(FakePage::document().with(Query::css("table"), vec![table]));

        let rows = read_first_table(&page).unwrap();

        assert_eq!(
            rows,
            vec![
                ("Proteínas (g)".to_string(), "25,4 g".to_string()),
                ("Sódio".to_string(), "85 mg".to_string()),
            ]
        );
    }

    #[test]
    fn missing_table_is_empty() {
        let page = FakePage::single(FakePage::document());

        assert!(read_first_table(&page).unwrap().is_empty());
    }
}
