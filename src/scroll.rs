use log::debug;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

/// Smoothly scrolls the referenced node into view. Does nothing if the node
/// is not mounted.
pub fn scroll_into_view(node: &NodeRef) {
    let Some(element) = node.cast::<Element>() else {
        debug!("Scroll target is not mounted, ignoring");
        return;
    };

    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
