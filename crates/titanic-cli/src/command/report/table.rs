//! Text tables for the report command.

use std::fmt;

use titanic_analysis::{
    age::AgeDistribution,
    correlation::{CorrelationMatrix, format_coefficient},
    format_percent,
    summary::SurvivalSummary,
    survival::SurvivalBreakdown,
};
use titanic_data::TableView;

const MAX_CELL_WIDTH: usize = 32;

fn print_title(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));
}

fn rate_or_dash(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_owned(), format_percent)
}

pub(super) fn print_summary(summary: &SurvivalSummary) {
    print_title("Data summary");
    println!("  {:<15} {:>10}", "Passengers", summary.passengers);
    println!("  {:<15} {:>10}", "Survivors", summary.survivors);
    println!("  {:<15} {:>10}", "Survival rate", rate_or_dash(summary.rate));
}

pub(crate) fn print_table(title: &str, view: &TableView) {
    print_title(&format!("{title} ({} rows)", view.rows.len()));
    for line in format_table(view) {
        println!("{line}");
    }
}

/// Lays out a table with one space between columns; numeric columns are right-aligned.
fn format_table(view: &TableView) -> Vec<String> {
    let cells = view
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| truncate(&cell.to_string())).collect())
        .collect::<Vec<Vec<String>>>();
    let numeric = (0..view.headers.len())
        .map(|col| view.column_range(col).is_some())
        .collect::<Vec<_>>();
    let widths = view
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let mut lines = vec![format_row(view.headers.iter().copied(), &widths, &numeric)];
    lines.push("-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1)));
    lines.extend(
        cells
            .iter()
            .map(|row| format_row(row.iter().map(String::as_str), &widths, &numeric)),
    );
    lines
}

fn format_row<'a, I>(values: I, widths: &[usize], numeric: &[bool]) -> String
where
    I: Iterator<Item = &'a str>,
{
    values
        .zip(widths)
        .zip(numeric)
        .map(|((value, width), numeric)| {
            if *numeric {
                format!("{value:>width$}")
            } else {
                format!("{value:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_owned()
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_owned();
    }
    let mut out = text.chars().take(MAX_CELL_WIDTH - 1).collect::<String>();
    out.push('…');
    out
}

pub(super) fn print_breakdown<K>(title: &str, label_col: &str, breakdown: &SurvivalBreakdown<K>)
where
    K: fmt::Display,
{
    print_title(title);
    for line in format_breakdown(label_col, breakdown) {
        println!("{line}");
    }
}

fn format_breakdown<K>(label_col: &str, breakdown: &SurvivalBreakdown<K>) -> Vec<String>
where
    K: fmt::Display,
{
    let mut lines = vec![
        format!(
            "  {:<12} {:>10} {:>10} {:>10}",
            label_col, "Passengers", "Survivors", "Rate"
        ),
        format!("  {}", "-".repeat(45)),
    ];
    lines.extend(breakdown.groups.iter().map(|g| {
        let key = g.key.to_string();
        format!(
            "  {:<12} {:>10} {:>10} {:>10}",
            key,
            g.passengers,
            g.survivors,
            format_percent(g.rate)
        )
    }));
    lines.push(format!("  {}", "-".repeat(45)));
    lines.push(format!(
        "  {:<12} {:>10} {:>10} {:>10}",
        "Overall",
        breakdown.grouped_count(),
        breakdown.groups.iter().map(|g| g.survivors).sum::<usize>(),
        rate_or_dash(breakdown.overall_rate)
    ));
    if breakdown.excluded > 0 {
        lines.push(format!("  ({} rows excluded)", breakdown.excluded));
    }
    lines
}

pub(super) fn print_age(distribution: &AgeDistribution) {
    print_title("Passenger age distribution");
    println!("  {:>13} {:>6}", "Age", "Count");
    println!("  {}", "-".repeat(20));
    for bin in &distribution.bins {
        println!(
            "  {:>5.1} - {:>5.1} {:>6}",
            bin.start, bin.end, bin.count
        );
    }
    println!();
    let age = |value: Option<f64>| value.map_or_else(|| "-".to_owned(), |m| format!("{m:.2}"));
    println!("  Mean age: {}", age(distribution.mean));
    println!("  Median age: {}", age(distribution.median));
    println!("  Rows without age: {}", distribution.excluded);
}

pub(super) fn print_correlation(matrix: &CorrelationMatrix) {
    print_title("Correlation between key features");
    for line in format_correlation(matrix) {
        println!("{line}");
    }
}

fn format_correlation(matrix: &CorrelationMatrix) -> Vec<String> {
    let mut header = format!("  {:<10}", "");
    for label in &matrix.labels {
        header.push_str(&format!(" {label:>9}"));
    }
    let mut lines = vec![header];
    for (label, row) in matrix.labels.iter().zip(&matrix.values) {
        let mut line = format!("  {label:<10}");
        for value in row {
            line.push_str(&format!(" {:>9}", format_coefficient(*value)));
        }
        lines.push(line);
    }
    lines
}
