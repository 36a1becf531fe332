//! Draws sheet tables as bordered terminal grids.

use colored::*;
use soulchart_core::sheet::{Align, Cell, Rgb, Sheet, Table};
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, print};

fn pad(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(text.width());
    match align {
        Align::Left => format!("{text}{}", " ".repeat(gap)),
        Align::Right => format!("{}{text}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

/// Final width of every column: the declared minimum grown to fit its contents.
pub fn column_widths(table: &Table) -> Vec<usize> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let cells = table
                .rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.text.width());
            cells
                .chain([column.header.width(), column.width])
                .max()
                .unwrap_or(column.width)
        })
        .collect()
}

fn paint(cell: &Cell, padded: String) -> ColoredString {
    // Black is the paper default; on a terminal it becomes the regular text color.
    match cell.color {
        Rgb::BLACK => padded.color(colors::TEXT_DEFAULT),
        Rgb(r, g, b) => padded.truecolor(r, g, b),
    }
}

fn header_line(table: &Table, widths: &[usize]) -> String {
    let Rgb(r, g, b) = table.header_fill;
    let sep = "│".color(colors::SEPARATOR).to_string();
    let cells: Vec<String> = table
        .columns
        .iter()
        .zip(widths)
        .map(|(column, &width)| {
            let padded = pad(&column.header, width, column.align);
            if table.header_fill == Rgb::WHITE {
                padded.bold().to_string()
            } else {
                padded.black().on_truecolor(r, g, b).to_string()
            }
        })
        .collect();
    format!("{sep}{}{sep}", cells.join(&sep))
}

fn row_line(table: &Table, row: &[Cell], widths: &[usize]) -> String {
    let sep = "│".color(colors::SEPARATOR).to_string();
    let cells: Vec<String> = table
        .columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(idx, (column, &width))| {
            let blank = Cell::blank();
            let cell = row.get(idx).unwrap_or(&blank);
            paint(cell, pad(&cell.text, width, column.align)).to_string()
        })
        .collect();
    format!("{sep}{}{sep}", cells.join(&sep))
}

fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let parts: Vec<String> = widths.iter().map(|&w| "─".repeat(w)).collect();
    format!("{left}{}{right}", parts.join(mid))
        .color(colors::SEPARATOR)
        .to_string()
}

/// Lines of one table, ready to print.
pub fn render_table(table: &Table) -> Vec<String> {
    let widths = column_widths(table);
    let mut lines = vec![
        table.title.color(colors::ACCENT).bold().to_string(),
        rule(&widths, "┌", "┬", "┐"),
        header_line(table, &widths),
    ];
    if !table.rows.is_empty() {
        lines.push(rule(&widths, "├", "┼", "┤"));
        lines.extend(table.rows.iter().map(|row| row_line(table, row, &widths)));
    }
    lines.push(rule(&widths, "└", "┴", "┘"));
    lines
}

pub fn print_sheet(sheet: &Sheet) {
    for (idx, table) in sheet.tables.iter().enumerate() {
        if idx > 0 {
            crate::mprint!();
        }
        for line in render_table(table) {
            print::print(&line);
        }
    }
}
