use std::path::Path;

use busy_model::{AssignmentTable, DATE_FORMAT, DateWindow};
use busy_report::{Dashboard, ResourceView};
use chrono::NaiveDate;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Width in characters of text bars and timelines.
const BAR_WIDTH: usize = 40;

pub fn print_generated(table: &AssignmentTable, path: &Path) {
    println!("Generated {} assignments", table.len());
    println!("Output: {}", path.display());
    let mut grid = Table::new();
    grid.set_header(vec![
        header_cell("Project Name"),
        header_cell("Start Date"),
        header_cell("End Date"),
        header_cell("Days"),
        header_cell("Resources"),
    ]);
    apply_table_style(&mut grid);
    align_column(&mut grid, 3, CellAlignment::Right);
    for assignment in &table.assignments {
        grid.add_row(vec![
            project_cell(assignment.project()),
            Cell::new(format_date(assignment.start())),
            Cell::new(format_date(assignment.end())),
            Cell::new(assignment.duration_days()),
            Cell::new(assignment.resources_label()),
        ]);
    }
    println!("{grid}");
}

pub fn print_resources(window: &DateWindow, resources: &[String]) {
    println!(
        "Resources busy from {} to {}",
        format_date(window.start()),
        format_date(window.end())
    );
    if resources.is_empty() {
        println!("(none)");
        return;
    }
    for resource in resources {
        println!("- {resource}");
    }
}

pub fn print_dashboard(dashboard: &Dashboard, show_heatmap: bool) {
    println!("Resource Management Dashboard");
    println!();
    println!(
        "Busy periods from {} to {}",
        format_date(dashboard.window.start()),
        format_date(dashboard.window.end())
    );
    print_filtered_table(dashboard);

    let Some(view) = &dashboard.selection else {
        println!("No resources are busy in this window.");
        return;
    };
    println!();
    println!("Busy Days for Resource: {}", view.resource);
    print_busy_table(view);
    if view.busy.is_empty() {
        println!("(no busy days in this window)");
        return;
    }
    println!();
    println!("Pie Chart of Busy Days for Resource: {}", view.resource);
    print_pie(view);
    println!();
    println!("Bar Chart of Busy Days for Resource: {}", view.resource);
    print_bar(view);
    println!();
    println!("Gantt Chart of Busy Days for Resource: {}", view.resource);
    print_gantt(view, &dashboard.window);
    if show_heatmap {
        println!();
        println!("Heatmap of Busy Days for Resource: {}", view.resource);
        print_heatmap(view);
    }
}

fn print_filtered_table(dashboard: &Dashboard) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Project Name"),
        header_cell("Start Date"),
        header_cell("End Date"),
        header_cell("Resource"),
    ]);
    apply_table_style(&mut table);
    for row in &dashboard.filtered {
        table.add_row(vec![
            project_cell(&row.project),
            Cell::new(format_date(row.start)),
            Cell::new(format_date(row.end)),
            Cell::new(&row.resource),
        ]);
    }
    println!("{table}");
}

fn print_busy_table(view: &ResourceView) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Project"),
        header_cell("Busy Days"),
        header_cell("Start Date"),
        header_cell("End Date"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &view.busy {
        table.add_row(vec![
            project_cell(&entry.project),
            Cell::new(entry.busy_days),
            Cell::new(format_date(entry.start)),
            Cell::new(format_date(entry.end)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(view.total_busy_days).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn print_pie(view: &ResourceView) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Project"),
        header_cell("Busy Days"),
        header_cell("Share"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for slice in &view.pie {
        table.add_row(vec![
            project_cell(&slice.project),
            Cell::new(slice.busy_days),
            Cell::new(format!("{:.1}%", slice.share)),
            Cell::new(share_bar(slice.share, BAR_WIDTH)).fg(Color::Green),
        ]);
    }
    println!("{table}");
}

fn print_bar(view: &ResourceView) {
    let max = view
        .bar
        .iter()
        .map(|entry| entry.busy_days)
        .max()
        .unwrap_or(0);
    let label_width = view
        .bar
        .iter()
        .map(|entry| entry.project.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &view.bar {
        println!(
            "{:<label_width$} | {} {}",
            entry.project,
            scaled_bar(entry.busy_days, max, BAR_WIDTH),
            entry.busy_days
        );
    }
}

fn print_gantt(view: &ResourceView, window: &DateWindow) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Project"),
        header_cell("Start Date"),
        header_cell("End Date"),
        header_cell("Timeline"),
    ]);
    apply_table_style(&mut table);
    for bar in &view.gantt {
        table.add_row(vec![
            project_cell(&bar.project),
            Cell::new(format_date(bar.start)),
            Cell::new(format_date(bar.end)),
            Cell::new(timeline(bar.start, bar.end, window, BAR_WIDTH)).fg(Color::Blue),
        ]);
    }
    println!("{table}");
}

fn print_heatmap(view: &ResourceView) {
    let heatmap = &view.heatmap;
    let mut table = Table::new();
    let mut header = vec![header_cell("Date")];
    header.extend(heatmap.projects.iter().map(|project| header_cell(project)));
    table.set_header(header);
    apply_table_style(&mut table);
    for column in 1..=heatmap.projects.len() {
        align_column(&mut table, column, CellAlignment::Center);
    }
    for (date, counts) in heatmap.dates.iter().zip(&heatmap.cells) {
        let mut row = vec![Cell::new(date)];
        row.extend(counts.iter().map(|&count| heat_cell(count)));
        table.add_row(row);
    }
    println!("{table}");
}

/// Bar of `value` relative to `max`, at least one block for positive values.
fn scaled_bar(value: i64, max: i64, width: usize) -> String {
    if value <= 0 || max <= 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

fn share_bar(share: f64, width: usize) -> String {
    scaled_bar((share * 10.0).round() as i64, 1000, width)
}

/// Place `[start, end]` on a `width`-column track spanning the window.
fn timeline(start: NaiveDate, end: NaiveDate, window: &DateWindow, width: usize) -> String {
    let days = window.day_count().max(1) as f64;
    let scale = width as f64 / days;
    let offset = (start - window.start()).num_days().max(0) as f64;
    let length = ((end - start).num_days() + 1).max(1) as f64;
    let from = ((offset * scale).floor() as usize).min(width.saturating_sub(1));
    let to = (((offset + length) * scale).ceil() as usize).clamp(from + 1, width);
    let mut track = String::with_capacity(width * 3);
    for column in 0..width {
        track.push(if (from..to).contains(&column) { '█' } else { '·' });
    }
    track
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
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

fn project_cell(project: &str) -> Cell {
    Cell::new(project)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn heat_cell(count: u32) -> Cell {
    match count {
        0 => dim_cell("·"),
        1 => Cell::new(count).fg(Color::Yellow),
        _ => Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn scaled_bar_bounds() {
        assert_eq!(scaled_bar(0, 10, 10), "");
        assert_eq!(scaled_bar(10, 10, 10).chars().count(), 10);
        assert_eq!(scaled_bar(1, 1000, 10).chars().count(), 1);
        assert_eq!(scaled_bar(5, 10, 10).chars().count(), 5);
    }

    #[test]
    fn timeline_covers_whole_window() {
        let window = DateWindow::new(date(3, 1), date(3, 10)).unwrap();
        assert_eq!(timeline(date(3, 1), date(3, 10), &window, 10), "█".repeat(10));
    }

    #[test]
    fn timeline_places_partial_span() {
        let window = DateWindow::new(date(3, 1), date(3, 10)).unwrap();
        assert_eq!(timeline(date(3, 3), date(3, 4), &window, 10), "··██······");
        let last_day = timeline(date(3, 10), date(3, 10), &window, 10);
        assert!(last_day.ends_with('█'));
        assert_eq!(last_day.chars().filter(|ch| *ch == '█').count(), 1);
    }
}
