use cardgrid_core::{GridLayout, GridPosition, GridResult, SelectionState};
use cardgrid_tui::{ElementRef, FocusableElement, GridNavProps};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    Focused(usize),
    Activated(usize),
}

/// Stand-in for a rendered card. Only the cell for the current selection exists.
struct CellHandle {
    index: usize,
    mounted: Rc<Cell<Option<usize>>>,
    log: Rc<RefCell<Vec<CellEvent>>>,
}

impl FocusableElement for CellHandle {
    fn is_mounted(&self) -> bool {
        self.mounted.get() == Some(self.index)
    }

    fn focus(&self) {
        self.log.borrow_mut().push(CellEvent::Focused(self.index));
    }

    fn activate(&self) {
        self.log.borrow_mut().push(CellEvent::Activated(self.index));
    }
}

/// Owns the selection and exit flag the navigation controller reports into.
pub struct Gallery {
    layout: GridLayout,
    selection: Rc<RefCell<SelectionState>>,
    exited: Rc<Cell<bool>>,
    mounted: Rc<Cell<Option<usize>>>,
    log: Rc<RefCell<Vec<CellEvent>>>,
}

impl Gallery {
    pub fn new(items: usize, columns: usize, start: usize) -> GridResult<Self> {
        let layout = GridLayout::new(items, columns)?;
        let mut selection = SelectionState::new(items);
        if items > 0 {
            selection.select(start)?;
        }
        Ok(Self {
            layout,
            selection: Rc::new(RefCell::new(selection)),
            exited: Rc::new(Cell::new(false)),
            mounted: Rc::new(Cell::new(None)),
            log: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// Render the current selection into controller props.
    pub fn props(&self) -> GridNavProps {
        let current = self.selection.borrow().get();
        self.mounted.set(current);

        let selection = Rc::clone(&self.selection);
        let exited = Rc::clone(&self.exited);
        let props = GridNavProps::new(
            self.layout.item_count(),
            self.layout.column_count(),
            move |index| {
                if let Err(e) = selection.borrow_mut().select(index) {
                    tracing::error!("Rejected selection change: {}", e);
                }
            },
            move || exited.set(true),
        )
        .with_current_index(current.unwrap_or(0));

        match current {
            Some(index) => {
                let element: ElementRef = Rc::new(CellHandle {
                    index,
                    mounted: Rc::clone(&self.mounted),
                    log: Rc::clone(&self.log),
                });
                props.with_element(element)
            }
            None => props,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.borrow().get()
    }

    pub fn position(&self) -> Option<GridPosition> {
        self.selected().and_then(|index| self.layout.position(index))
    }

    pub fn exited(&self) -> bool {
        self.exited.get()
    }

    /// Drain cell events recorded since the last call.
    pub fn take_events(&self) -> Vec<CellEvent> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}
