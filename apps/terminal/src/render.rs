//! # Results Table Rendering
//!
//! Turns the displayed rows into a plain-text table, the terminal stand-in
//! for the GUI's results grid. Pure string building; printing is the shell
//! loop's job.
//!
//! ```text
//!   id  product  description        quantity  code           date added
//!   --  -------  -----------------  --------  -------------  -------------------
//!    1  Laptop   14-inch ultrabook         4  4006381333931  2024-11-05 09:30:00
//! >  2  Mouse    Wireless                 12  123456789012   2024-11-05 09:31:12
//! ```
//!
//! The `>` marks the selected row. Column widths stretch to the widest cell
//! so nothing is ever truncated.

use stockdesk_core::StockRecord;

const HEADERS: [&str; 6] = ["id", "product", "description", "quantity", "code", "date added"];

/// Columns rendered right-aligned (numeric).
const RIGHT_ALIGNED: [usize; 2] = [0, 3];

/// Renders the rows as a text table, marking the selected row.
pub fn render_table(rows: &[StockRecord], selected: Option<i64>) -> String {
    if rows.is_empty() {
        return "  (no records)\n".to_string();
    }

    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.product.clone(),
                r.description.clone(),
                r.quantity.to_string(),
                r.code.clone(),
                r.date_added.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| format!("{:<1$}", h, *w))
        .collect();
    push_line(&mut out, "  ", &header);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, "  ", &separator);

    for (record, row) in rows.iter().zip(cells.iter()) {
        let marker = if selected == Some(record.id) { "> " } else { "  " };
        let formatted: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| {
                if RIGHT_ALIGNED.contains(&i) {
                    format!("{:>1$}", cell, *w)
                } else {
                    format!("{:<1$}", cell, *w)
                }
            })
            .collect();
        push_line(&mut out, marker, &formatted);
    }

    out
}

/// Joins the columns with a two-space gutter and appends a trimmed line.
fn push_line(out: &mut String, prefix: &str, columns: &[String]) {
    let line = format!("{}{}", prefix, columns.join("  "));
    out.push_str(line.trim_end());
    out.push('\n');
}

// =============================================================================
// Unit Tests
// =============================================================================
