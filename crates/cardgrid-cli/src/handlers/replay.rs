use crate::cli::ReplayArgs;
use crate::gallery::{CellEvent, Gallery};
use crate::output;
use cardgrid_core::AppConfig;
use cardgrid_tui::{keys, GridNavigationController, KeyBus};
use serde::Serialize;
use std::rc::Rc;

use super::effective_columns;

#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub key: String,
    pub consumed: bool,
    pub index: Option<usize>,
    pub row: Option<usize>,
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub items: usize,
    pub columns: usize,
    pub start: Option<usize>,
    pub steps: Vec<ReplayStep>,
    pub final_index: Option<usize>,
    pub exited: bool,
}

pub fn handle(config: &AppConfig, args: ReplayArgs) -> anyhow::Result<()> {
    let columns = effective_columns(config, &args.grid);
    let report = replay(args.grid.items, columns, args.start, &args.keys)?;
    output::output_success(report);
    Ok(())
}

/// Feed named keys through a mounted controller, re-rendering after each one.
///
/// Once the controller signals exit it is unmounted, so later keys reach no listener.
pub fn replay(
    items: usize,
    columns: usize,
    start: usize,
    key_names: &[String],
) -> anyhow::Result<ReplayReport> {
    let events = key_names
        .iter()
        .map(|name| keys::parse_key_name(name))
        .collect::<Result<Vec<_>, _>>()?;

    let gallery = Gallery::new(items, columns, start)?;
    let bus = Rc::new(KeyBus::new());
    let mut controller = GridNavigationController::new(bus.clone(), gallery.props())?;
    controller.mount();

    let initial = gallery.selected();
    let mut steps = Vec::with_capacity(events.len());
    for event in &events {
        let consumed = bus.dispatch(event);
        if gallery.exited() {
            controller.unmount();
        }
        controller.update(gallery.props())?;

        let mut focused = None;
        let mut activated = None;
        for cell_event in gallery.take_events() {
            match cell_event {
                CellEvent::Focused(index) => focused = Some(index),
                CellEvent::Activated(index) => activated = Some(index),
            }
        }

        let position = gallery.position();
        steps.push(ReplayStep {
            key: keys::key_name(event),
            consumed,
            index: gallery.selected(),
            row: position.map(|p| p.row),
            column: position.map(|p| p.column),
            focused,
            activated,
        });
    }

    Ok(ReplayReport {
        items,
        columns,
        start: initial,
        steps,
        final_index: gallery.selected(),
        exited: gallery.exited(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_replay_tracks_selection_and_focus() {
        let report = replay(9, 3, 7, &names(&["ArrowDown", "ArrowUp", "ArrowLeft"])).unwrap();

        let indices: Vec<_> = report.steps.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![Some(1), Some(7), Some(6)]);

        let focused: Vec<_> = report.steps.iter().map(|s| s.focused).collect();
        assert_eq!(focused, vec![Some(1), Some(7), Some(6)]);

        assert_eq!(report.steps[0].row, Some(0));
        assert_eq!(report.steps[0].column, Some(1));
        assert_eq!(report.final_index, Some(6));
        assert!(!report.exited);
    }

    #[test]
    fn test_replay_enter_activates_current_cell() {
        let report = replay(4, 2, 3, &names(&["Enter"])).unwrap();
        assert_eq!(report.steps[0].activated, Some(3));
        assert_eq!(report.steps[0].focused, None);
        assert_eq!(report.final_index, Some(3));
    }

    #[test]
    fn test_replay_escape_stops_navigation() {
        let report = replay(4, 2, 0, &names(&["Escape", "ArrowRight"])).unwrap();
        assert!(report.exited);
        assert!(report.steps[0].consumed);
        assert!(!report.steps[1].consumed);
        assert_eq!(report.final_index, Some(0));
    }

    #[test]
    fn test_replay_unrecognized_key() {
        let report = replay(4, 2, 1, &names(&["a"])).unwrap();
        assert!(!report.steps[0].consumed);
        assert_eq!(report.steps[0].index, Some(1));
    }

    #[test]
    fn test_replay_empty_grid() {
        let report = replay(0, 3, 0, &names(&["ArrowRight", "ArrowUp"])).unwrap();
        assert!(report.steps.iter().all(|s| s.consumed && s.index.is_none()));
        assert_eq!(report.start, None);
    }

    #[test]
    fn test_replay_rejects_bad_input() {
        assert!(replay(9, 0, 0, &[]).is_err());
        assert!(replay(9, 3, 9, &[]).is_err());
        assert!(replay(9, 3, 0, &names(&["PageDown"])).is_err());
    }
}
