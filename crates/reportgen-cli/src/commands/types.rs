//! The `reportgen types` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use reportgen_core::ReportKind;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Description"]);

    for (index, kind) in ReportKind::ALL.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(kind),
            Cell::new(kind.description()),
        ]);
    }

    println!("{table}");
    Ok(())
}
