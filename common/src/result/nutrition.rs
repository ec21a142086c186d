use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Numeric fields of a nutrition facts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Deserialize, Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum NutritionField {
    Portion,
    Calories,
    Carbohydrates,
    Protein,
    FatTotal,
    FatSaturated,
    Fiber,
    Sugar,
    Sodium,
}

/// Nutrition facts of one product.
///
/// Every numeric field starts at zero and stays at zero when the source
/// table has no usable value for it: zero means "not found", never
/// "confirmed absent".
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NutritionRecord {
    pub product_name: String,
    pub url: String,
    pub category: String,
    pub portion_g: f64,
    pub calories_kcal: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_total_g: f64,
    pub fat_saturated_g: f64,
    pub fiber_g: f64,
    pub sugar_g: f64,
    pub sodium_mg: f64,
}

impl NutritionRecord {
    pub fn new(product_name: String, url: String, category: String) -> Self {
        Self {
            product_name,
            url,
            category,
            ..Default::default()
        }
    }

    pub fn get(&self, field: NutritionField) -> f64 {
        match field {
            NutritionField::Portion => self.portion_g,
            NutritionField::Calories => self.calories_kcal,
            NutritionField::Carbohydrates => self.carbs_g,
            NutritionField::Protein => self.protein_g,
            NutritionField::FatTotal => self.fat_total_g,
            NutritionField::FatSaturated => self.fat_saturated_g,
            NutritionField::Fiber => self.fiber_g,
            NutritionField::Sugar => self.sugar_g,
            NutritionField::Sodium => self.sodium_mg,
        }
    }

    pub fn set(&mut self, field: NutritionField, value: f64) {
        let slot = match field {
            NutritionField::Portion => &mut self.portion_g,
            NutritionField::Calories => &mut self.calories_kcal,
            NutritionField::Carbohydrates => &mut self.carbs_g,
            NutritionField::Protein => &mut self.protein_g,
            NutritionField::FatTotal => &mut self.fat_total_g,
            NutritionField::FatSaturated => &mut self.fat_saturated_g,
            NutritionField::Fiber => &mut self.fiber_g,
            NutritionField::Sugar => &mut self.sugar_g,
            NutritionField::Sodium => &mut self.sodium_mg,
        };

        *slot = value;
    }

    /// Copies the parsed nutrition values into a record that carries identity.
    pub fn with_values_from(mut self, parsed: &NutritionRecord) -> Self {
        use strum::IntoEnumIterator;

        for field in NutritionField::iter() {
            self.set(field, parsed.get(field));
        }

        self
    }
}
