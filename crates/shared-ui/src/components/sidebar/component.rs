use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Shared sidebar state.
///
/// On desktop the sidebar is docked and `open` toggles between expanded and
/// collapsed. On mobile it is an overlay drawer that closes after navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
    pub mobile: bool,
}

impl SidebarState {
    /// State after a menu item is chosen.
    pub fn after_navigate(self) -> Self {
        if self.mobile {
            Self { open: false, ..self }
        } else {
            self
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            open: !self.open,
            ..self
        }
    }

    /// Whether the backdrop overlay should be shown.
    pub fn shows_backdrop(&self) -> bool {
        self.mobile && self.open
    }
}

/// Provides sidebar state to children and follows the caller's breakpoint
/// signal.
#[component]
pub fn SidebarProvider(
    #[props(default = true)] default_open: bool,
    mobile: Signal<bool>,
    children: Element,
) -> Element {
    let mut state = use_signal(|| {
        let mobile = *mobile.peek();
        SidebarState {
            open: default_open && !mobile,
            mobile,
        }
    });
    use_context_provider(|| state);

    use_effect(move || {
        let mobile = mobile();
        let current = *state.peek();
        if current.mobile != mobile {
            // Crossing the breakpoint docks the sidebar open on desktop and
            // hides the drawer on mobile.
            state.set(SidebarState { open: !mobile, mobile });
        }
    });

    let current = state();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if current.open { "true" } else { "false" },
            "data-mobile": if current.mobile { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// The sidebar container, docked on the right edge in RTL.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let current = state();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if current.open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if current.shows_backdrop() {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| {
                    let s = *state.peek();
                    state.set(SidebarState { open: false, ..s });
                },
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// Titled group of menu entries.
#[component]
pub fn SidebarGroup(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            if !label.is_empty() {
                div { class: "sidebar-group-label", "{label}" }
            }
            ul { class: "sidebar-menu", {children} }
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

/// One navigation entry. Highlighted when `active`; closes the drawer on
/// mobile after it is clicked.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li { class: "sidebar-menu-item",
            button {
                class: "sidebar-menu-button",
                r#type: "button",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| {
                    let s = *state.peek();
                    state.set(s.after_navigate());
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Hamburger button that opens or closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "إظهار القائمة الجانبية",
            onclick: move |_| {
                let s = *state.peek();
                state.set(s.toggled());
            },
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// Main content column beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigating_closes_only_the_mobile_drawer() {
        let mobile = SidebarState { open: true, mobile: true };
        assert!(!mobile.after_navigate().open);

        let desktop = SidebarState { open: true, mobile: false };
        assert!(desktop.after_navigate().open);
    }

    #[test]
    fn backdrop_only_for_open_mobile_drawer() {
        assert!(SidebarState { open: true, mobile: true }.shows_backdrop());
        assert!(!SidebarState { open: true, mobile: false }.shows_backdrop());
        assert!(!SidebarState { open: false, mobile: true }.shows_backdrop());
    }

    #[test]
    fn toggle_flips_open() {
        let s = SidebarState { open: false, mobile: false };
        assert!(s.toggled().open);
        assert!(!s.toggled().toggled().open);
    }
}
