use dioxus::prelude::*;

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Media query matching the mobile range.
pub fn mobile_media_query() -> String {
    format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX - 1)
}

/// Script that reports the current match, then every change, until the
/// Rust side sends any message to unsubscribe.
fn watch_script() -> String {
    format!(
        r#"
        const mq = window.matchMedia("{query}");
        const listener = (e) => dioxus.send(e.matches);
        dioxus.send(mq.matches);
        mq.addEventListener("change", listener);
        await dioxus.recv();
        mq.removeEventListener("change", listener);
        "#,
        query = mobile_media_query()
    )
}

/// Reactive "is this a mobile viewport" flag.
///
/// The `matchMedia` listener is added when the component mounts and
/// removed when it unmounts. Before the first report (and during SSR) the
/// value is `false`.
pub fn use_is_mobile() -> Signal<bool> {
    let mut is_mobile = use_signal(|| false);

    let watcher = use_hook(|| {
        let eval = document::eval(&watch_script());
        let mut receiver = eval.clone();
        spawn(async move {
            while let Ok(matches) = receiver.recv::<bool>().await {
                if *is_mobile.peek() != matches {
                    is_mobile.set(matches);
                }
            }
        });
        eval
    });

    use_drop(move || {
        if let Err(e) = watcher.send(true) {
            tracing::debug!(error = %e, "breakpoint watcher already gone");
        }
    });

    is_mobile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_query_matches_breakpoint() {
        assert_eq!(mobile_media_query(), "(max-width: 767px)");
        assert!(watch_script().contains("removeEventListener"));
    }
}
