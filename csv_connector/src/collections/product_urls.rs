use common::{result::product::ProductStub, utils::format_collected_at};
use serde::Serialize;

use crate::sink::Tabular;

/// One line of the product url file.
#[derive(Debug, Serialize)]
pub struct ProductUrlRow<'a> {
    pub nome_produto: &'a str,
    pub url: &'a str,
    pub slug: &'a str,
    pub categoria: &'a str,
    pub data_coleta: String,
}

impl Tabular for ProductUrlRow<'_> {
    const COLUMNS: &'static [&'static str] =
        &["nome_produto", "url", "slug", "categoria", "data_coleta"];
}

impl<'a> From<&'a ProductStub> for ProductUrlRow<'a> {
    fn from(stub: &'a ProductStub) -> Self {
        Self {
            nome_produto: &stub.name,
            url: &stub.url,
            slug: &stub.slug,
            categoria: &stub.category,
            data_coleta: format_collected_at(&stub.collected_at),
        }
    }
}
