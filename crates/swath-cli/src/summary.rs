//! Table rendering for `swath show`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use swath_model::SwathGroup;

/// One row per swath group plus a totals row.
pub fn summary_table<'a>(groups: impl IntoIterator<Item = &'a SwathGroup>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Visible"),
        header_cell("Folder"),
        header_cell("Arrays"),
        header_cell("Parameter sets"),
        header_cell("Filters"),
        header_cell("Velocity"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for index in 3..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_arrays = 0usize;
    let mut total_params = 0usize;
    let mut total_filters = 0usize;
    let mut total_enabled = 0usize;
    for group in groups {
        let params = group.processing_count();
        let filters = group.filter_count();
        let enabled = enabled_filter_count(group);
        total_arrays += group.arrays.len();
        total_params += params;
        total_filters += filters;
        total_enabled += enabled;

        table.add_row(vec![
            Cell::new(&group.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            visible_cell(group.visible),
            folder_cell(&group.folder),
            count_cell(group.arrays.len()),
            count_cell(params),
            filter_cell(enabled, filters),
            Cell::new(group.propagation_velocity),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_arrays).add_attribute(Attribute::Bold),
        Cell::new(total_params).add_attribute(Attribute::Bold),
        filter_cell(total_enabled, total_filters).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn enabled_filter_count(group: &SwathGroup) -> usize {
    group
        .arrays
        .iter()
        .flat_map(|array| &array.processing_params)
        .map(|params| params.enabled_filters().count())
        .sum()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn visible_cell(visible: bool) -> Cell {
    if visible {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn folder_cell(folder: &str) -> Cell {
    if folder.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(folder)
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

/// `enabled/total`, dimmed when there are no filters at all.
fn filter_cell(enabled: usize, total: usize) -> Cell {
    let text = format!("{enabled}/{total}");
    if total == 0 {
        dim_cell(text)
    } else if enabled < total {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swath_model::{Array, DataProcessingParameters, FilterItem};

    fn plain(mut table: Table) -> String {
        table.force_no_tty();
        table.to_string()
    }

    #[test]
    fn one_row_per_group_plus_total() {
        let groups = [SwathGroup::new("North"), SwathGroup::new("South")];
        let table = summary_table(&groups);
        assert_eq!(table.row_iter().count(), 3);

        let text = plain(table);
        assert!(text.contains("North"));
        assert!(text.contains("South"));
        assert!(text.contains("TOTAL"));
    }

    #[test]
    fn filters_show_enabled_over_total() {
        let params = DataProcessingParameters::new("Standard", "P")
            .with_filter(FilterItem::new(true, "A"))
            .with_filter(FilterItem::new(false, "B"));
        let group = SwathGroup::new("G").with_array(Array::new("Ant", 1).with_processing(params));

        let text = plain(summary_table([&group]));
        assert!(text.contains("1/2"));
    }
}
