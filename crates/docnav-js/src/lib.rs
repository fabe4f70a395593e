//! WASM bindings for docnav page helpers.
//!
//! Exposes the toggle handlers and page-load entry point under the names page
//! templates call from inline `onclick` attributes and `onload`.
//!
//! Handlers never throw: the event dispatcher ignores return values, so
//! failures are logged to the console and the page carries on.

mod logging;

use docnav_browser::{
    BrowserDocument, DocNavError, InitPlan, ReplaceControl, append_element, collapse_inner_only,
    copy_second_level_list, find_second_level_list, reveal_active_ancestors, run_init,
    toggle_visibility, toggle_with_replace_control, toggle_with_triangle,
};
use wasm_bindgen::prelude::*;

pub use logging::init_logging;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
}

fn with_document<R>(action: impl FnOnce(&mut BrowserDocument) -> R) -> Option<R> {
    match BrowserDocument::current() {
        Some(mut doc) => Some(action(&mut doc)),
        None => {
            tracing::warn!("no document available");
            None
        }
    }
}

fn log_failure<T>(operation: &str, result: Result<T, DocNavError>) {
    if let Err(error) = result {
        tracing::warn!(%error, operation, "docnav handler failed");
    }
}

#[wasm_bindgen(js_name = toggleVisibility)]
pub fn toggle_visibility_handler(id: &str) {
    with_document(|doc| log_failure("toggleVisibility", toggle_visibility(doc, id)));
}

#[wasm_bindgen(js_name = toggleVisibilityWithTriangle)]
pub fn toggle_with_triangle_handler(id_target: &str, id_triangle: &str) {
    with_document(|doc| {
        log_failure(
            "toggleVisibilityWithTriangle",
            toggle_with_triangle(doc, id_target, id_triangle),
        )
    });
}

#[wasm_bindgen(js_name = toggleVisibilityWithReplaceControl)]
pub fn toggle_with_replace_control_handler(
    id_target: &str,
    id_replace_control: &str,
    open_control_contents: &str,
    close_control_contents: &str,
) {
    with_document(|doc| {
        log_failure(
            "toggleVisibilityWithReplaceControl",
            toggle_with_replace_control(
                doc,
                id_target,
                id_replace_control,
                open_control_contents,
                close_control_contents,
            ),
        )
    });
}

/// Markup for a replace control, for templates that write it themselves.
#[wasm_bindgen(js_name = replaceControlHtml)]
pub fn replace_control_html(
    id_target: &str,
    id_replace_control: &str,
    open_control_contents: &str,
    close_control_contents: &str,
) -> String {
    ReplaceControl::new(
        id_target,
        id_replace_control,
        open_control_contents,
        close_control_contents,
    )
    .render()
}

/// Append a replace control to the element with id `id_parent`.
///
/// Templates that write markup inline use [`replace_control_html`] instead.
#[wasm_bindgen(js_name = appendOptionalReplaceControl)]
pub fn append_optional_replace_control(
    id_parent: &str,
    id_target: &str,
    id_replace_control: &str,
    open_control_contents: &str,
    close_control_contents: &str,
) {
    let control = ReplaceControl::new(
        id_target,
        id_replace_control,
        open_control_contents,
        close_control_contents,
    );
    with_document(|doc| {
        log_failure(
            "appendOptionalReplaceControl",
            append_element(doc, id_parent, &control.to_element()),
        )
    });
}

#[wasm_bindgen(js_name = displayInnerOnlyTocListElements)]
pub fn display_inner_only_toc_list_elements() {
    with_document(|doc| collapse_inner_only(doc));
}

/// The second-level list element, or `undefined` when there is none.
#[wasm_bindgen(js_name = findTocSecondLevelList)]
pub fn find_toc_second_level_list(toc_parent_id: &str, index: usize) -> Option<web_sys::Element> {
    with_document(|doc| match find_second_level_list(&*doc, toc_parent_id, index) {
        Ok(list) => Some(list),
        Err(error) => {
            tracing::warn!(%error, "findTocSecondLevelList");
            None
        }
    })
    .flatten()
}

#[wasm_bindgen(js_name = copyTocSecondLevelList)]
pub fn copy_toc_second_level_list(toc_parent_id: &str, index: usize, target_div_id: &str) {
    with_document(|doc| copy_second_level_list(doc, toc_parent_id, index, target_div_id));
}

#[wasm_bindgen(js_name = showNavigationParentListOfActive)]
pub fn show_navigation_parent_list_of_active() {
    with_document(|doc| reveal_active_ancestors(doc, docnav_browser::DEFAULT_NAVIGATION_ID));
}

/// Page-load entry point with the default plan.
#[wasm_bindgen(js_name = init)]
pub fn init_page() {
    with_document(|doc| run_init(doc, &InitPlan::default()));
}

/// Page-load entry point with a plan object such as
/// `{ copies: [{ source, index, destination }], navigationId, collapseInnerOnly }`.
#[wasm_bindgen(js_name = initWithPlan)]
pub fn init_page_with_plan(plan: JsValue) -> Result<(), JsError> {
    let plan: InitPlan = serde_wasm_bindgen::from_value(plan)
        .map_err(|e| JsError::new(&format!("Invalid init plan: {}", e)))?;
    plan.validate()
        .map_err(|e| JsError::new(&e.to_string()))?;
    with_document(|doc| run_init(doc, &plan));
    Ok(())
}
