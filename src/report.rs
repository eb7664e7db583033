use crate::domain::model::LanguageStats;

const HEADERS: [&str; 4] = [
    "Programming Language",
    "Vacancies Found",
    "Vacancies Processed",
    "Average Salary",
];

/// ASCII grid table with the title spliced into the top border, one row
/// per language in the (already ranked) input order.
pub fn render_table(title: &str, ranked: &[(String, LanguageStats)]) -> String {
    let rows: Vec<[String; 4]> = ranked
        .iter()
        .map(|(language, stats)| {
            [
                language.clone(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats.average_salary().to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|header| display_width(header)).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let header_cells: Vec<String> = HEADERS.iter().map(|header| header.to_string()).collect();

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(title_border(title, &widths));
    lines.push(format_row(&header_cells, &widths));
    lines.push(separator(&widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.push(separator(&widths));

    lines.join("\n")
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn separator(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn title_border(title: &str, widths: &[usize]) -> String {
    let plain = separator(widths);
    if title.len() + 1 >= plain.len() {
        return plain;
    }
    let mut line = String::from("+");
    line.push_str(title);
    line.push_str(&plain[title.len() + 1..]);
    line
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(&center(cell, *width));
        line.push_str(" |");
    }
    line
}

fn center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
