//! WASM browser tests for the exported handlers.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use docnav_browser::{BrowserDocument, DocumentTree};
use docnav_js::{append_optional_replace_control, toggle_with_replace_control_handler};

const FIXTURE_ID: &str = "docnav-js-fixture";

fn setup() -> BrowserDocument {
    let doc = BrowserDocument::current().expect("document");
    let document = doc.document();
    if let Some(previous) = document.get_element_by_id(FIXTURE_ID) {
        previous.remove();
    }
    let fixture = document.create_element("div").expect("create fixture");
    fixture.set_id(FIXTURE_ID);
    fixture.set_inner_html(
        r#"<div id="slot"></div><div id="usage" style="display: none">usage</div>"#,
    );
    document
        .body()
        .expect("body")
        .append_child(&fixture)
        .expect("append fixture");
    doc
}

#[wasm_bindgen_test]
fn test_append_control_then_toggle() {
    let doc = setup();
    append_optional_replace_control("slot", "usage", "usage-ctl", "Show more", "Show less");

    let control = doc.element_by_id("usage-ctl").expect("control mounted");
    let parent = doc.parent_element(&control).expect("control wrapper");
    assert_eq!(
        doc.parent_element(&parent).and_then(|slot| slot.get_attribute("id")),
        Some("slot".to_string())
    );
    assert_eq!(control.text_content().as_deref(), Some("Show more"));

    toggle_with_replace_control_handler("usage", "usage-ctl", "Show more", "Show less");
    let usage = doc.element_by_id("usage").unwrap();
    assert_eq!(doc.display(&usage).as_deref(), Some("block"));
    assert_eq!(control.text_content().as_deref(), Some("Show less"));
}

#[wasm_bindgen_test]
fn test_append_control_missing_parent_leaves_page() {
    let doc = setup();
    append_optional_replace_control("no-such-slot", "usage", "usage-ctl", "Show more", "Show less");
    assert!(doc.element_by_id("usage-ctl").is_none());
}
