mod alert;
mod button;
mod modal;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use modal::{Modal, ModalKind};
pub(crate) use spinner::Spinner;
