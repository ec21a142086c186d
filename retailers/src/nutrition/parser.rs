use common::result::nutrition::{NutritionField, NutritionRecord};
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    nutrition::mapping::{ExtractionRule, FieldMapping, default_field_mappings},
    utils::conversions::{number_with_unit_regex, text_to_number, text_to_number_with_unit},
};

struct CompiledMapping {
    mapping: FieldMapping,
    unit_regex: Option<Regex>,
}

impl CompiledMapping {
    fn new(mapping: FieldMapping) -> Self {
        let unit_regex = match &mapping.rule {
            ExtractionRule::Plain => None,
            ExtractionRule::WithUnit(unit) => Some(number_with_unit_regex(unit)),
        };

        Self {
            mapping,
            unit_regex,
        }
    }

    fn extract(&self, value: &str) -> f64 {
        match &self.unit_regex {
            Some(unit_regex) => text_to_number_with_unit(value, unit_regex),
            None => text_to_number(value),
        }
    }
}

/// Turns the `(label, value)` rows of a nutrition table into a record.
///
/// Needs no browser: everything happens on the extracted text.
pub struct NutritionParser {
    mappings: Vec<CompiledMapping>,
}

impl Default for NutritionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionParser {
    pub fn new() -> Self {
        Self::with_mappings(default_field_mappings())
    }

    pub fn with_mappings(mappings: Vec<FieldMapping>) -> Self {
        Self {
            mappings: mappings.into_iter().map(CompiledMapping::new).collect(),
        }
    }

    /// Maps one row to its field and value. The first mapping whose label is
    /// contained in the row label wins; unknown labels yield `None`.
    pub fn parse_row(&self, label: &str, value: &str) -> Option<(NutritionField, f64)> {
        let label = label.trim();

        let Some(compiled) = self
            .mappings
            .iter()
            .find(|compiled| compiled.mapping.matches(label))
        else {
            trace!("Ignoring unmapped label {label:?}");
            return None;
        };

        Some((compiled.mapping.field, compiled.extract(value.trim())))
    }

    /// Rows are applied in table order, so a later row for the same field
    /// overwrites an earlier one. Fields no row maps to stay at 0.
    pub fn parse<L, V>(&self, rows: &[(L, V)]) -> NutritionRecord
    where
        L: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = NutritionRecord::default();

        for (label, value) in rows {
            if let Some((field, number)) = self.parse_row(label.as_ref(), value.as_ref()) {
                debug!("{field} = {number} (from {:?})", value.as_ref());
                record.set(field, number);
            }
        }

        record
    }
}
