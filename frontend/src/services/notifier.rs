use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser rejected the notice: {0}")]
    Rejected(String),
}

/// Shows a short message to the user.
pub trait Notifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// Blocking `window.alert` dialog
pub struct WindowNotifier;

impl Notifier for WindowNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let window = web_sys::window().ok_or(NotifyError::NoWindow)?;
        window
            .alert_with_message(message)
            .map_err(|e| NotifyError::Rejected(format!("{:?}", e)))
    }
}

/// Notifier handed to components through context
#[derive(Clone)]
pub struct NotifierHandle(Rc<dyn Notifier>);

impl NotifierHandle {
    pub fn new<N: Notifier + 'static>(notifier: N) -> Self {
        Self(Rc::new(notifier))
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.0.as_ref()
    }
}

impl Default for NotifierHandle {
    fn default() -> Self {
        Self::new(WindowNotifier)
    }
}

impl PartialEq for NotifierHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
