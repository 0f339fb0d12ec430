//! Browser-only DOM helpers. No-ops during SSR.

/// Id of the projects section, target of the hero call-to-action.
pub const PROJECTS_ANCHOR: &str = "projects";

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::warn!("scroll target #{id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
