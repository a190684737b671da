//! Clipboard gateway.
//!
//! Backends expose an asynchronous primary write and a synchronous fallback.
//! `copy_to_clipboard` tries them in order and reports a plain `bool`; no
//! clipboard failure reaches the caller as an error.

use dioxus::logger::tracing::{error, warn};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardError {
    Unavailable,
    Rejected(String),
    Platform(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard is not available"),
            ClipboardError::Rejected(msg) => write!(f, "clipboard write rejected: {msg}"),
            ClipboardError::Platform(msg) => write!(f, "clipboard error: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardBackend {
    /// Whether the primary write path can be attempted at all.
    fn is_available(&self) -> bool;

    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>>;

    fn write_text_fallback(&self, text: &str) -> Result<(), ClipboardError>;
}

pub async fn copy_to_clipboard(backend: &dyn ClipboardBackend, text: &str) -> bool {
    if backend.is_available() {
        match backend.write_text(text).await {
            Ok(()) => return true,
            Err(e) => error!("Failed to copy to clipboard: {e}"),
        }
    } else {
        warn!("Clipboard API not available, trying fallback");
    }

    match backend.write_text_fallback(text) {
        Ok(()) => true,
        Err(e) => {
            error!("Fallback clipboard copy failed: {e}");
            false
        }
    }
}

pub fn default_clipboard() -> Rc<dyn ClipboardBackend> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(web::WebClipboard)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(native::SystemClipboard::default())
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{ClipboardBackend, ClipboardError};
    use futures_util::future::LocalBoxFuture;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{window, HtmlDocument, HtmlTextAreaElement};

    fn js_error(value: JsValue) -> ClipboardError {
        ClipboardError::Platform(format!("{value:?}"))
    }

    /// `navigator.clipboard` with a hidden-textarea `execCommand("copy")`
    /// fallback for insecure contexts and older browsers.
    pub struct WebClipboard;

    impl ClipboardBackend for WebClipboard {
        fn is_available(&self) -> bool {
            window()
                .map(|w| {
                    let navigator = w.navigator();
                    js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
                        .map(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
                        .unwrap_or(false)
                })
                .unwrap_or(false)
        }

        fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
            let text = text.to_owned();
            Box::pin(async move {
                let win = window().ok_or(ClipboardError::Unavailable)?;
                let promise = win.navigator().clipboard().write_text(&text);
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
            })
        }

        fn write_text_fallback(&self, text: &str) -> Result<(), ClipboardError> {
            let document = window()
                .and_then(|w| w.document())
                .ok_or(ClipboardError::Unavailable)?;
            let body = document.body().ok_or(ClipboardError::Unavailable)?;

            let textarea: HtmlTextAreaElement = document
                .create_element("textarea")
                .map_err(js_error)?
                .dyn_into()
                .map_err(|_| ClipboardError::Platform("textarea cast failed".into()))?;
            textarea.set_value(text);
            let style = textarea.style();
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("left", "-999999px");
            let _ = style.set_property("top", "-999999px");

            body.append_child(&textarea).map_err(js_error)?;
            let _ = textarea.focus();
            textarea.select();

            let copied = document
                .dyn_into::<HtmlDocument>()
                .map_err(|_| ClipboardError::Unavailable)
                .and_then(|doc| doc.exec_command("copy").map_err(js_error));
            let _ = body.remove_child(&textarea);

            match copied? {
                true => Ok(()),
                false => Err(ClipboardError::Rejected("execCommand returned false".into())),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{ClipboardBackend, ClipboardError};
    use futures_util::future::{self, LocalBoxFuture};
    use std::cell::RefCell;

    fn platform_error(e: arboard::Error) -> ClipboardError {
        ClipboardError::Platform(e.to_string())
    }

    /// System clipboard through `arboard`. The handle is opened on first use
    /// and kept for the life of the backend; on X11 and Wayland the copied
    /// text is only served while it is alive. There is no selection-based
    /// fallback outside the browser.
    #[derive(Default)]
    pub struct SystemClipboard {
        clipboard: RefCell<Option<arboard::Clipboard>>,
    }

    impl SystemClipboard {
        fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
            let mut slot = self.clipboard.borrow_mut();
            if slot.is_none() {
                *slot = Some(arboard::Clipboard::new().map_err(platform_error)?);
            }
            match slot.as_mut() {
                Some(clipboard) => clipboard.set_text(text.to_owned()).map_err(platform_error),
                None => Err(ClipboardError::Unavailable),
            }
        }
    }

    impl ClipboardBackend for SystemClipboard {
        fn is_available(&self) -> bool {
            true
        }

        fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
            Box::pin(future::ready(self.set_text(text)))
        }

        fn write_text_fallback(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }
    }

}


#[cfg(test)]
mod tests {
    use super::testing::FakeClipboard;
    use super::*;

    #[tokio::test]
    async fn primary_success_skips_fallback() {
        let clipboard = FakeClipboard::working();
        assert!(copy_to_clipboard(&clipboard, "hello").await);
        assert_eq!(*clipboard.written.borrow(), vec!["hello".to_string()]);
        assert_eq!(clipboard.fallback_calls.get(), 0);
    }

    #[tokio::test]
    async fn unavailable_primary_uses_fallback() {
        let clipboard = Rc::new(FakeClipboard {
            unavailable: true,
            ..FakeClipboard::default()
        });
        assert!(copy_to_clipboard(&clipboard, "hello").await);
        assert_eq!(clipboard.fallback_calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_primary_uses_fallback() {
        let clipboard = Rc::new(FakeClipboard {
            primary_fails: true,
            ..FakeClipboard::default()
        });
        assert!(copy_to_clipboard(&clipboard, "hello").await);
        assert_eq!(clipboard.fallback_calls.get(), 1);
    }

    #[tokio::test]
    async fn both_paths_failing_reports_false() {
        let clipboard = FakeClipboard::broken();
        assert!(!copy_to_clipboard(&clipboard, "hello").await);
        assert!(clipboard.written.borrow().is_empty());
    }
}
