//! Show / hide / toggle directives over element ids

use crate::document::Document;
use crate::DomError;

/// What to do with the display state of a group of elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Show,
    Hide,
    /// Flip each element independently
    Toggle,
}

impl From<Option<bool>> for Visibility {
    fn from(visible: Option<bool>) -> Self {
        match visible {
            Some(true) => Visibility::Show,
            Some(false) => Visibility::Hide,
            None => Visibility::Toggle,
        }
    }
}

/// Apply a visibility directive to one or more elements.
///
/// Every id is resolved before anything changes, so a missing id leaves the
/// document untouched.
pub fn toggle_visibility<S: AsRef<str>>(
    doc: &mut Document,
    ids: &[S],
    directive: Visibility,
) -> Result<(), DomError> {
    for id in ids {
        doc.element(id.as_ref())?;
    }
    for id in ids {
        let element = doc.element_mut(id.as_ref())?;
        element.hidden = match directive {
            Visibility::Show => false,
            Visibility::Hide => true,
            Visibility::Toggle => !element.hidden,
        };
    }
    Ok(())
}
