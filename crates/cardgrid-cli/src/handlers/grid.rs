use crate::cli::PositionArgs;
use crate::output;
use cardgrid_core::{AppConfig, GridError, GridLayout};
use serde::Serialize;

use super::effective_columns;

#[derive(Serialize)]
struct PositionReport {
    index: usize,
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
}

pub fn handle_position(config: &AppConfig, args: PositionArgs) -> anyhow::Result<()> {
    let layout = GridLayout::new(args.grid.items, effective_columns(config, &args.grid))?;
    let position = layout
        .position(args.index)
        .ok_or(GridError::IndexOutOfRange {
            index: args.index,
            len: layout.item_count(),
        })?;

    output::output_success(PositionReport {
        index: args.index,
        row: position.row,
        column: position.column,
        rows: layout.row_count(),
        columns: layout.column_count(),
    });
    Ok(())
}
