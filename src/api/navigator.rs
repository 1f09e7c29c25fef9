use std::rc::Rc;

/// Moves the browser to another view.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn redirect(&self, path: &str) {
        (**self).redirect(path)
    }
}

/// Full page navigation through `window.location`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "web")]
impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        use dioxus_logger::tracing;

        let Some(window) = web_sys::window() else {
            tracing::error!("No window available to redirect to {}", path);
            return;
        };

        if let Err(e) = window.location().set_href(path) {
            tracing::error!("Failed to redirect to {}: {:?}", path, e);
        }
    }
}
