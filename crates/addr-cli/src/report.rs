use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use addr_common::column_strings;
use addr_normalization::{ADDRESS_KEY_COLUMNS, FieldStats, NormalizationStats};

use crate::pipeline::PipelineResult;

/// Print the duplicate report, removal count, and run summary.
pub fn print_summary(result: &PipelineResult) -> anyhow::Result<()> {
    if let Some(table) = duplicate_table(&result.duplicates)? {
        println!("Duplicate addresses found:");
        println!("{table}");
        println!("{}", total_duplicates_line(result.duplicate_count));
    }
    println!("{}", removed_line(result.removed));
    println!("{}", stats_table(&result.stats));
    println!("{}", summary_line(result));
    Ok(())
}

pub fn total_duplicates_line(count: usize) -> String {
    format!("Total duplicates found: {count}")
}

pub fn removed_line(removed: usize) -> String {
    format!("Removed {removed} duplicate addresses.")
}

pub fn summary_line(result: &PipelineResult) -> String {
    let destination = match &result.output {
        Some(path) => path.display().to_string(),
        None => "(dry run, not written)".to_string(),
    };
    format!(
        "Rows: {} in, {} out. Output: {destination}",
        result.input_rows, result.output_rows
    )
}

/// Key columns of every duplicated row, or `None` when there are none.
pub fn duplicate_table(duplicates: &DataFrame) -> anyhow::Result<Option<Table>> {
    if duplicates.height() == 0 {
        return Ok(None);
    }
    let mut columns = Vec::with_capacity(ADDRESS_KEY_COLUMNS.len());
    for name in ADDRESS_KEY_COLUMNS {
        columns.push(column_strings(duplicates, name)?);
    }

    let mut table = Table::new();
    table.set_header(ADDRESS_KEY_COLUMNS.iter().map(|name| header_cell(name)));
    apply_report_table_style(&mut table);
    for row in 0..duplicates.height() {
        table.add_row(columns.iter().map(|values| value_cell(values[row].as_deref())));
    }
    Ok(Some(table))
}

fn stats_table(stats: &NormalizationStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Present"),
        header_cell("Changed"),
        header_cell("Nulled"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let rows: [(&str, &FieldStats); 4] = [
        (ADDRESS_KEY_COLUMNS[0], &stats.street),
        (ADDRESS_KEY_COLUMNS[1], &stats.city),
        (ADDRESS_KEY_COLUMNS[2], &stats.state),
        (ADDRESS_KEY_COLUMNS[3], &stats.zip),
    ];
    for (name, field) in rows {
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(field.present),
            count_cell(field.changed, Color::Green),
            count_cell(field.nulled, Color::Yellow),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn duplicates() -> DataFrame {
        let columns = [
            ("street", [Some("1 Oak Road"), Some("1 Oak Road")]),
            ("city", [Some("Boston"), Some("Boston")]),
            ("state", [Some("MA"), Some("MA")]),
            ("zip", [None, None]),
        ]
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn report_lines() {
        assert_eq!(total_duplicates_line(2), "Total duplicates found: 2");
        assert_eq!(removed_line(1), "Removed 1 duplicate addresses.");
    }

    #[test]
    fn duplicate_table_lists_key_columns() {
        let table = duplicate_table(&duplicates()).unwrap().unwrap();
        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("1 Oak Road"));
        assert!(rendered.contains("Boston"));
    }

    #[test]
    fn no_duplicates_no_table() {
        let empty = duplicates().head(Some(0));
        assert!(duplicate_table(&empty).unwrap().is_none());
    }
}
