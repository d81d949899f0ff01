use log::debug;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

/// Something the page can bring into the viewport.
pub trait ScrollTarget {
    fn scroll_into_view_smoothly(&self);
}

impl ScrollTarget for Element {
    fn scroll_into_view_smoothly(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Scrolls to `target` when there is one. Returns whether it did.
pub fn scroll_to<T: ScrollTarget + ?Sized>(target: Option<&T>) -> bool {
    match target {
        Some(target) => {
            target.scroll_into_view_smoothly();
            true
        }
        None => {
            debug!("Registration form not rendered, nothing to scroll to");
            false
        }
    }
}

/// Smoothly scrolls the registration form into view. Does nothing when the
/// form is not mounted, e.g. after a completed registration.
pub fn scroll_to_form(form_ref: &NodeRef) {
    scroll_to(form_ref.cast::<Element>().as_ref());
}
