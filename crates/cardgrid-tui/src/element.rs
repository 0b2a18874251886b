use std::rc::Rc;

/// Handle to whatever currently represents the selected grid cell.
///
/// A handle can outlive the cell it points at. Callers check `is_mounted`
/// before focusing or activating it.
pub trait FocusableElement {
    fn is_mounted(&self) -> bool;
    fn focus(&self);
    fn activate(&self);
}

pub type ElementRef = Rc<dyn FocusableElement>;
