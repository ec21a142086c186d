use common::result::nutrition::NutritionRecord;
use serde::Serialize;

use crate::sink::Tabular;

/// One line of a nutrition file.
#[derive(Debug, Serialize)]
pub struct NutritionRow<'a> {
    #[serde(rename = "NOME_PRODUTO")]
    pub product_name: &'a str,
    #[serde(rename = "URL")]
    pub url: &'a str,
    #[serde(rename = "CATEGORIA")]
    pub category: &'a str,
    #[serde(rename = "PORCAO (g)")]
    pub portion_g: f64,
    #[serde(rename = "CALORIAS (kcal)")]
    pub calories_kcal: f64,
    #[serde(rename = "CARBOIDRATOS (g)")]
    pub carbs_g: f64,
    #[serde(rename = "PROTEINAS (g)")]
    pub protein_g: f64,
    #[serde(rename = "GORDURAS_TOTAIS (g)")]
    pub fat_total_g: f64,
    #[serde(rename = "GORDURAS_SATURADAS (g)")]
    pub fat_saturated_g: f64,
    #[serde(rename = "FIBRAS (g)")]
    pub fiber_g: f64,
    #[serde(rename = "ACUCARES (g)")]
    pub sugar_g: f64,
    #[serde(rename = "SODIO (mg)")]
    pub sodium_mg: f64,
}

impl Tabular for NutritionRow<'_> {
    const COLUMNS: &'static [&'static str] = &[
        "NOME_PRODUTO",
        "URL",
        "CATEGORIA",
        "PORCAO (g)",
        "CALORIAS (kcal)",
        "CARBOIDRATOS (g)",
        "PROTEINAS (g)",
        "GORDURAS_TOTAIS (g)",
        "GORDURAS_SATURADAS (g)",
        "FIBRAS (g)",
        "ACUCARES (g)",
        "SODIO (mg)",
    ];
}

impl<'a> From<&'a NutritionRecord> for NutritionRow<'a> {
    fn from(record: &'a NutritionRecord) -> Self {
        Self {
            product_name: &record.product_name,
            url: &record.url,
            category: &record.category,
            portion_g: record.portion_g,
            calories_kcal: record.calories_kcal,
            carbs_g: record.carbs_g,
            protein_g: record.protein_g,
            fat_total_g: record.fat_total_g,
            fat_saturated_g: record.fat_saturated_g,
            fiber_g: record.fiber_g,
            sugar_g: record.sugar_g,
            sodium_mg: record.sodium_mg,
        }
    }
}
