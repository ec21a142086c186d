use std::borrow::Cow;

use common::result::nutrition::NutritionField;

/// How the value cell of a matched row becomes a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionRule {
    /// First integer or decimal in the cell.
    Plain,
    /// First number directly followed by the unit, or 0.
    WithUnit(Cow<'static, str>),
}

/// One row of the Field Mapping Table: a label fragment and where its value goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub label: Cow<'static, str>,
    pub field: NutritionField,
    pub rule: ExtractionRule,
}

impl FieldMapping {
    pub fn plain(label: impl Into<Cow<'static, str>>, field: NutritionField) -> Self {
        Self {
            label: label.into(),
            field,
            rule: ExtractionRule::Plain,
        }
    }

    pub fn with_unit(
        label: impl Into<Cow<'static, str>>,
        field: NutritionField,
        unit: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            label: label.into(),
            field,
            rule: ExtractionRule::WithUnit(unit.into()),
        }
    }

    pub fn matches(&self, label: &str) -> bool {
        label.contains(self.label.as_ref())
    }
}

const fn plain(label: &'static str, field: NutritionField) -> FieldMapping {
    FieldMapping {
        label: Cow::Borrowed(label),
        field,
        rule: ExtractionRule::Plain,
    }
}

/// Labels of the Brazilian nutrition facts table, checked in order.
pub const DEFAULT_FIELD_MAPPINGS: &[FieldMapping] = &[
    plain("Porção", NutritionField::Portion),
    FieldMapping {
        label: Cow::Borrowed("Valor Energético"),
        field: NutritionField::Calories,
        rule: ExtractionRule::WithUnit(Cow::Borrowed("kcal")),
    },
    plain("Carboidratos", NutritionField::Carbohydrates),
    plain("Proteínas", NutritionField::Protein),
    plain("Gorduras Totais", NutritionField::FatTotal),
    plain("Gorduras Saturadas", NutritionField::FatSaturated),
    plain("Fibra Alimentar", NutritionField::Fiber),
    plain("Sódio", NutritionField::Sodium),
];

pub fn default_field_mappings() -> Vec<FieldMapping> {
    DEFAULT_FIELD_MAPPINGS.to_vec()
}
