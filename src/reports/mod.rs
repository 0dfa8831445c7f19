use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyfit::geometry::grid_rows;
use keyfit::layouts::Layout;
use keyfit::scorer::{
    DerivedStats, LayoutRun, Metric, NormalizationReference, ScoreBreakdown, ScoredToken,
};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn join_pct(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.0}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_layout_grid(layout: &Layout) {
    println!("\nLayout: {} ({} keys)", layout.name, layout.table.len());
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    // Unshifted rows only; the shifted twin of each row follows it in the grid.
    for row in grid_rows(&layout.grid).iter().step_by(2) {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&tok| {
                let label = if tok == keyfit::consts::ENTER_TOKEN { "⏎" } else { tok };
                Cell::new(label).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

/// One row per analysed word: raw totals, usages and the weighted score.
pub fn print_word_report(rows: &[(String, DerivedStats, ScoreBreakdown, f64)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Keys"),
        Cell::new("Effort"),
        Cell::new("Dist"),
        Cell::new("Fingers %"),
        Cell::new("L|R %"),
        Cell::new("Rows %"),
        Cell::new("Sym"),
        Cell::new("Even"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=9);

    for (word, s, _, score) in rows {
        table.add_row(vec![
            Cell::new(word).add_attribute(Attribute::Bold),
            Cell::new(s.position),
            Cell::new(format!("{:.1}", s.effort)),
            Cell::new(format!("{:.1}", s.distance)),
            Cell::new(join_pct(&s.fingers_usage)),
            Cell::new(format!("{:.0}|{:.0}", s.hands_usage[0], s.hands_usage[1])),
            Cell::new(join_pct(&s.rows_usage)),
            Cell::new(format!("{:.1}", s.symmetry)),
            Cell::new(format!("{:.1}", s.evenness)),
            Cell::new(format!("{:.4}", score)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);

    let mut parts = new_table();
    parts.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Effort"),
        Cell::new("Dist"),
        Cell::new("Fingers"),
        Cell::new("Hands"),
        Cell::new("Rows"),
    ]);
    align_right(&mut parts, 1..=5);
    for (word, _, b, _) in rows {
        parts.add_row(vec![
            Cell::new(word).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", b.effort)),
            Cell::new(format!("{:.4}", b.distance)),
            Cell::new(format!("{:.4}", b.finger_imbalance)),
            Cell::new(format!("{:.4}", b.hand_imbalance)),
            Cell::new(format!("{:.4}", b.row_imbalance)),
        ]);
    }
    println!("{}", parts);
}

pub fn print_comparison_report(runs: &[LayoutRun]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Reached").fg(Color::Cyan),
        Cell::new("Effort/Key"),
        Cell::new("Dist/Key"),
        Cell::new("Fingers %"),
        Cell::new("L|R %"),
        Cell::new("Sym"),
        Cell::new("Even"),
        Cell::new("SF %").fg(Color::Red),
        Cell::new("SH %"),
        Cell::new("Row %"),
    ]);
    align_right(&mut table, 1..=10);

    let best = runs.iter().map(|r| r.tally.position).max().unwrap_or(0);

    for run in runs {
        let name_cell = if run.tally.position == best && best > 0 {
            Cell::new(&run.name)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&run.name).add_attribute(Attribute::Bold)
        };

        let Ok(s) = DerivedStats::from_tally(&run.tally) else {
            table.add_row(vec![name_cell, Cell::new("0")]);
            continue;
        };
        let shares = s.overhead_shares().unwrap_or_default();

        table.add_row(vec![
            name_cell,
            Cell::new(s.position).fg(Color::Cyan),
            Cell::new(format!("{:.3}", s.effort_per_key())),
            Cell::new(format!("{:.3}", s.distance_per_key())),
            Cell::new(join_pct(&s.fingers_usage)),
            Cell::new(format!("{:.1}|{:.1}", s.hands_usage[0], s.hands_usage[1])),
            Cell::new(format!("{:.1}", s.symmetry)),
            Cell::new(format!("{:.1}", s.evenness)),
            Cell::new(format!("{:.1}", shares.same_finger)).fg(Color::Red),
            Cell::new(format!("{:.1}", shares.same_hand)),
            Cell::new(format!("{:.1}", shares.row_change)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_reference_report(reference: &NormalizationReference) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Mean"),
        Cell::new("Std Dev"),
    ]);
    align_right(&mut table, 1..=4);

    for metric in Metric::iter() {
        let r = reference.range(metric);
        table.add_row(vec![
            Cell::new(metric).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", r.min)),
            Cell::new(format!("{:.4}", r.max)),
            Cell::new(format!("{:.4}", r.mean)),
            Cell::new(format!("{:.4}", r.std_dev)),
        ]);
    }
    println!("\n{}", table);
    println!("Fingerprint: {}", reference.fingerprint());
}

pub fn print_ranked_report(ranked: &[(String, ScoredToken)], top: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Freq"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    align_right(&mut table, 2..=3);

    for (i, (word, s)) in ranked.iter().take(top).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(word),
            Cell::new(s.frequency),
            Cell::new(format!("{:.2}", s.score)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}
