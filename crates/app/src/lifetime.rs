use dioxus::prelude::*;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Cancellation flag tied to a component's lifetime.
///
/// Async work started by a component checks the token before touching the
/// component's signals; a dropped component cancels its token so late
/// results are discarded.
#[derive(Clone, Debug, Default)]
pub struct LifetimeToken {
    cancelled: Rc<Cell<bool>>,
}

impl LifetimeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Await `fut` and keep its output only if the token is still live.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        let output = fut.await;
        if self.is_cancelled() {
            None
        } else {
            Some(output)
        }
    }
}

/// Largest delay `setTimeout` honours; anything above fires immediately.
const MAX_TIMER_MS: u64 = i32::MAX as u64;

fn timer_script(ms: u64) -> String {
    let ms = ms.min(MAX_TIMER_MS);
    format!("await new Promise((r) => setTimeout(r, {ms})); return true;")
}

/// Resolve after `ms` milliseconds using the browser's timer.
///
/// Without a timer (no JS runtime) this resolves at once and logs a warning.
pub async fn sleep_ms(ms: u64) {
    if ms > MAX_TIMER_MS {
        tracing::warn!(requested = ms, max = MAX_TIMER_MS, "timer delay clamped");
    }
    if let Err(e) = document::eval(&timer_script(ms)).join::<bool>().await {
        tracing::warn!(error = %e, delay_ms = ms, "timer unavailable, continuing without delay");
    }
}

/// A token that is cancelled when the calling component unmounts.
pub fn use_lifetime() -> LifetimeToken {
    let token = use_hook(LifetimeToken::new);
    {
        let token = token.clone();
        use_drop(move || token.cancel());
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_script_clamps_to_browser_limit() {
        assert!(timer_script(250).contains("setTimeout(r, 250)"));
        assert!(timer_script(u64::MAX).contains("setTimeout(r, 2147483647)"));
    }

    #[tokio::test]
    async fn guard_passes_output_while_live() {
        let token = LifetimeToken::new();
        assert_eq!(token.guard(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn guard_drops_output_after_cancel() {
        let token = LifetimeToken::new();
        let clone = token.clone();
        let result = token
            .guard(async move {
                clone.cancel();
                "late"
            })
            .await;
        assert_eq!(result, None);
        assert!(token.is_cancelled());
    }
}
