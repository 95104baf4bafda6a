//! Viewport width sources. The sidebar reads the width once at mount and then
//! follows resize notifications through a subscription that is released when
//! the component unmounts.

use crate::app_lib::AppError;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::warn;

pub type ResizeHandler = Box<dyn Fn(f64) + Send + Sync>;

/// Platform capability: current width plus change notifications.
pub trait ResizeSource: Send + Sync {
    fn width(&self) -> Option<f64>;
    fn subscribe(&self, handler: ResizeHandler) -> ResizeSubscription;
}

/// Live resize listener. Dropping it (or calling [`cancel`](Self::cancel))
/// removes the listener; release happens at most once.
#[must_use = "dropping the subscription removes the listener"]
pub struct ResizeSubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ResizeSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ResizeSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The browser window: `innerWidth` and the `resize` event.
#[derive(Clone, Copy, Debug)]
pub struct BrowserViewport {
    _private: (),
}

impl BrowserViewport {
    /// Fails when there is no window, e.g. outside a browser.
    pub fn detect() -> Result<Self, AppError> {
        if window_width().is_none() {
            return Err(AppError::Platform("Window not found".into()));
        }
        Ok(Self { _private: () })
    }
}

#[cfg(target_arch = "wasm32")]
fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
fn window_width() -> Option<f64> {
    None
}

impl ResizeSource for BrowserViewport {
    fn width(&self) -> Option<f64> {
        window_width()
    }

    #[cfg(target_arch = "wasm32")]
    fn subscribe(&self, handler: ResizeHandler) -> ResizeSubscription {
        use leptos::ev;
        use leptos_dom::helpers::window_event_listener;

        let handle = window_event_listener(ev::resize, move |_| {
            if let Some(width) = window_width() {
                handler(width);
            }
        });
        tracing::debug!("window resize listener added");
        ResizeSubscription::new(move || {
            handle.remove();
            tracing::debug!("window resize listener removed");
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn subscribe(&self, _handler: ResizeHandler) -> ResizeSubscription {
        ResizeSubscription::inert()
    }
}

type SharedHandler = Arc<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct ManualInner {
    width: Option<f64>,
    next_id: u64,
    handlers: Vec<(u64, SharedHandler)>,
}

/// In-memory viewport whose width is driven by the host.
#[derive(Clone, Default)]
pub struct ManualViewport {
    inner: Arc<Mutex<ManualInner>>,
}

impl ManualViewport {
    pub fn new(width: Option<f64>) -> Self {
        let viewport = Self::default();
        viewport.lock().width = width;
        viewport
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Updates the width and notifies live listeners.
    pub fn set_width(&self, width: f64) {
        let handlers: Vec<SharedHandler> = {
            let mut inner = self.lock();
            inner.width = Some(width);
            inner.handlers.iter().map(|(_, handler)| handler.clone()).collect()
        };
        for handler in handlers {
            handler(width);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.lock().handlers.len()
    }
}

impl fmt::Debug for ManualViewport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        formatter
            .debug_struct("ManualViewport")
            .field("width", &inner.width)
            .field("listeners", &inner.handlers.len())
            .finish()
    }
}

impl ResizeSource for ManualViewport {
    fn width(&self) -> Option<f64> {
        self.lock().width
    }

    fn subscribe(&self, handler: ResizeHandler) -> ResizeSubscription {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, SharedHandler::from(handler)));
            id
        };

        let weak: Weak<Mutex<ManualInner>> = Arc::downgrade(&self.inner);
        ResizeSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .handlers
                    .retain(|(handler_id, _)| *handler_id != id);
            }
        })
    }
}

/// Shared handle to the resize source injected into the sidebar.
#[derive(Clone)]
pub struct Viewport(Arc<dyn ResizeSource>);

impl Viewport {
    pub fn new(source: impl ResizeSource + 'static) -> Self {
        Self(Arc::new(source))
    }

    /// The browser window, or a width-less source when there is none.
    pub fn browser() -> Self {
        match BrowserViewport::detect() {
            Ok(browser) => Self::new(browser),
            Err(err) => {
                warn!("falling back to a fixed viewport: {err}");
                Self::new(ManualViewport::new(None))
            }
        }
    }

    pub fn width(&self) -> Option<f64> {
        self.0.width()
    }

    pub fn subscribe(&self, handler: impl Fn(f64) + Send + Sync + 'static) -> ResizeSubscription {
        self.0.subscribe(Box::new(handler))
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Viewport(..)")
    }
}

impl From<ManualViewport> for Viewport {
    fn from(viewport: ManualViewport) -> Self {
        Self::new(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::{BrowserViewport, ManualViewport, ResizeSource, ResizeSubscription, Viewport};
    use crate::app_lib::AppError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn(f64) + Send + Sync + 'static) {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler_calls = calls.clone();
        (calls, move |_| {
            handler_calls.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn manual_viewport_reports_width() {
        let viewport = ManualViewport::new(Some(500.0));
        assert_eq!(viewport.width(), Some(500.0));
        viewport.set_width(1200.0);
        assert_eq!(viewport.width(), Some(1200.0));
    }

    #[test]
    fn listener_is_not_invoked_after_drop() {
        let viewport = ManualViewport::new(Some(1200.0));
        let handle = Viewport::from(viewport.clone());
        let (calls, handler) = counter();

        let subscription = handle.subscribe(handler);
        viewport.set_width(600.0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(subscription);
        viewport.set_width(900.0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn cancel_releases_only_its_own_listener() {
        let viewport = ManualViewport::new(Some(1200.0));
        let handle = Viewport::from(viewport.clone());
        let (first_calls, first) = counter();
        let (second_calls, second) = counter();

        let first = handle.subscribe(first);
        let _second = handle.subscribe(second);
        first.cancel();
        viewport.set_width(700.0);

        assert_eq!(first_calls.load(Ordering::SeqCst), 0);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn repeated_mount_cycles_do_not_leak_listeners() {
        let viewport = ManualViewport::new(Some(1200.0));
        for _ in 0..5 {
            let (_, handler) = counter();
            let _subscription = viewport.subscribe(Box::new(handler));
            assert_eq!(viewport.listener_count(), 1);
        }
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_the_viewport_is_harmless() {
        let viewport = ManualViewport::new(None);
        let (_, handler) = counter();
        let subscription = viewport.subscribe(Box::new(handler));
        drop(viewport);
        drop(subscription);
    }

    #[test]
    fn inert_subscription_releases_nothing() {
        ResizeSubscription::inert().cancel();
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn browser_viewport_is_unavailable_off_wasm() {
        assert!(matches!(BrowserViewport::detect(), Err(AppError::Platform(_))));
        assert_eq!(Viewport::browser().width(), None);
    }
}
