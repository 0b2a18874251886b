use crate::cli::GridArgs;
use crate::gallery::{CellEvent, Gallery};
use cardgrid_core::AppConfig;
use cardgrid_tui::events::{should_quit, EventHandler};
use cardgrid_tui::{GridNavigationController, KeyBus};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::Write;
use std::rc::Rc;

use super::effective_columns;

pub async fn handle(config: &AppConfig, args: GridArgs) -> anyhow::Result<()> {
    let columns = effective_columns(config, &args);
    let gallery = Gallery::new(args.items, columns, 0)?;
    let bus = Rc::new(KeyBus::new());
    let mut controller = GridNavigationController::new(bus.clone(), gallery.props())?;
    controller.mount();

    let raw_mode = RawModeGuard::enable()?;
    let result = run(&gallery, &bus, &controller).await;
    drop(raw_mode);
    controller.unmount();
    result
}

/// Keeps the terminal in raw mode until dropped, including on unwind.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::error!("Failed to restore terminal mode: {}", e);
        }
    }
}

async fn run(
    gallery: &Gallery,
    bus: &KeyBus,
    controller: &GridNavigationController,
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(
        stdout,
        "{} items in {} columns. Arrows move, Enter activates, Esc or q quits.\r\n",
        controller.layout().item_count(),
        controller.layout().column_count()
    )?;
    print_selection(&mut stdout, gallery)?;

    let mut events = EventHandler::new();
    while let Some((key, _consumed)) = events.pump_key(bus).await {
        if gallery.exited() || should_quit(&key) {
            break;
        }
        controller.update(gallery.props())?;
        for cell_event in gallery.take_events() {
            match cell_event {
                CellEvent::Focused(_) => print_selection(&mut stdout, gallery)?,
                CellEvent::Activated(index) => {
                    write!(stdout, "activated {}\r\n", index)?;
                    stdout.flush()?;
                }
            }
        }
    }
    events.stop();
    Ok(())
}

fn print_selection(stdout: &mut std::io::Stdout, gallery: &Gallery) -> std::io::Result<()> {
    match (gallery.selected(), gallery.position()) {
        (Some(index), Some(position)) => write!(
            stdout,
            "selected {} (row {}, column {})\r\n",
            index, position.row, position.column
        )?,
        _ => write!(stdout, "grid is empty\r\n")?,
    }
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    #[test]
    fn test_raw_mode_restored_after_panic() {
        // Without a terminal raw mode cannot be entered and there is nothing to restore.
        let Ok(guard) = RawModeGuard::enable() else {
            return;
        };
        let result = std::panic::catch_unwind(move || {
            let _guard = guard;
            panic!("interactive session failed");
        });
        assert!(result.is_err());
        assert!(!is_raw_mode_enabled().unwrap());
    }
}
