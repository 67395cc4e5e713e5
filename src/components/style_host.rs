use dioxus::prelude::*;

use crate::style::registry::StyleRegistry;

#[derive(PartialEq, Props, Clone)]
pub struct StyleHostProps {
    children: Element,
}

/// Gives the inputs below it their own [`StyleRegistry`]. Without a host,
/// inputs share one registry at the root of the app.
#[component]
pub fn StyleHost(props: StyleHostProps) -> Element {
    use_context_provider(|| Signal::new(StyleRegistry::default()));

    rsx! {
        {props.children}
    }
}
