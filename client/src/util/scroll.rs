//! In-page navigation between section anchors.

/// Smooth-scroll the element with `id` to the top of the viewport.
///
/// Unknown ids are ignored. No-op outside the browser.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            log::debug!("scroll target #{id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Current vertical scroll offset of the page, 0 outside the browser.
pub fn page_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
