use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Habitat"),
        header_cell("Residents"),
        header_cell("IDs"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for habitat in &result.habitats {
        table.add_row(vec![
            Cell::new(&habitat.species)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(habitat.residents),
            Cell::new(&habitat.ids),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.admitted).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    if result.written {
        println!("Report written to {}", result.output_path.display());
    } else {
        println!(
            "Dry run: {} left untouched",
            result.output_path.display()
        );
    }
    if !result.skipped.is_empty() {
        eprintln!("Skipped lines:");
        for line in &result.skipped {
            eprintln!("- line {}: {}: {}", line.number, line.reason, line.text);
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
