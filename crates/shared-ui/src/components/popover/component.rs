use dioxus::prelude::*;
use dioxus_primitives::popover as prim;

#[component]
pub fn PopoverRoot(mut props: prim::PopoverRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "popover", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::PopoverRoot { ..props }
    }
}

#[component]
pub fn PopoverTrigger(mut props: prim::PopoverTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "popover-trigger", None, false));

    rsx! {
        prim::PopoverTrigger { ..props }
    }
}

/// Floating panel anchored to the trigger. Rendered only while open.
#[component]
pub fn PopoverContent(mut props: prim::PopoverContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("popover-content".to_string());
    }

    rsx! {
        prim::PopoverContent { ..props }
    }
}
