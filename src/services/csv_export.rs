use anyhow::anyhow;

use crate::domain::{GeneratorOptions, ResultSet};

pub const CSV_FILE_NAME: &str = "autosuggest_results.csv";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportLayout {
    /// Type, Modifier, Query
    Categorized,
    /// Modifier, Query
    Plain,
}

impl From<GeneratorOptions> for ExportLayout {
    fn from(options: GeneratorOptions) -> Self {
        match options.categorize {
            true => ExportLayout::Categorized,
            false => ExportLayout::Plain,
        }
    }
}

impl ExportLayout {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            ExportLayout::Categorized => &["Type", "Modifier", "Query"],
            ExportLayout::Plain => &["Modifier", "Query"],
        }
    }
}

pub fn to_csv(result_set: &ResultSet, layout: ExportLayout) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(layout.headers())?;

    for record in result_set.records() {
        match layout {
            ExportLayout::Categorized => writer.write_record([
                record.category.as_deref().unwrap_or(""),
                record.modifier.as_str(),
                record.suggestion.as_str(),
            ])?,
            ExportLayout::Plain => {
                writer.write_record([record.modifier.as_str(), record.suggestion.as_str()])?
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush csv writer: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}
