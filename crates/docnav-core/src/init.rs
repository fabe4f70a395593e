//! Page-load sequence.

use crate::config::InitPlan;
use crate::toc::{
    CollapseReport, collapse_inner_only, copy_second_level_list, reveal_active_ancestors,
};
use crate::tree::DocumentTree;

/// What [`run_init`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    pub copied: usize,
    pub skipped: usize,
    pub collapse: Option<CollapseReport>,
    pub revealed: usize,
}

/// Run the copy table in order, the optional collapse pass, then expand the
/// navigation around the active page.
pub fn run_init<T: DocumentTree>(tree: &mut T, plan: &InitPlan) -> InitReport {
    let span = tracing::info_span!("docnav_init", copies = plan.copies.len());
    let _guard = span.enter();

    let mut report = InitReport::default();
    for step in &plan.copies {
        if copy_second_level_list(tree, &step.source, step.index, &step.destination).is_copied() {
            report.copied += 1;
        } else {
            report.skipped += 1;
        }
    }

    if plan.collapse_inner_only {
        report.collapse = Some(collapse_inner_only(tree));
    }

    report.revealed = reveal_active_ancestors(tree, &plan.navigation_id);
    tracing::debug!(?report, "init complete");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CopyStep;
    use crate::markup::Element;
    use crate::memory::MemoryDocument;
    use crate::toc::{ACTIVE_CLASS, PAGE_CLASS, TOC_CLASS};

    fn item(title: &str, sub: Option<&str>) -> Element {
        let mut li = Element::builder("li").child(
            Element::builder("a")
                .class(PAGE_CLASS)
                .attr("href", format!("{title}.html"))
                .text(title),
        );
        if let Some(sub) = sub {
            li = li.child(
                Element::builder("ul").child(
                    Element::builder("li").child(
                        Element::builder("a")
                            .class(PAGE_CLASS)
                            .attr("href", format!("{sub}.html"))
                            .text(sub),
                    ),
                ),
            );
        }
        li.build()
    }

    fn site_page() -> MemoryDocument {
        MemoryDocument::from_element(
            Element::builder("body")
                .child(
                    Element::builder("div").id("navigation").child(
                        Element::builder("ul")
                            .id("nav-top")
                            .display("none")
                            .child(
                                Element::builder("li").child(
                                    Element::builder("a")
                                        .class(PAGE_CLASS)
                                        .class(ACTIVE_CLASS)
                                        .attr("href", "node.html")
                                        .text("Node"),
                                ),
                            ),
                    ),
                )
                .child(
                    Element::builder("div").id("ethNodeToc").child(
                        Element::builder("div").class(TOC_CLASS).child(
                            Element::builder("ul")
                                .child(item("chainId", Some("chainIdSet")))
                                .child(item("plain", None))
                                .child(item("url", Some("urlSet"))),
                        ),
                    ),
                )
                .child(Element::builder("div").id("chainIdList"))
                .child(Element::builder("div").id("urlList"))
                .build(),
        )
    }

    #[test]
    fn test_default_plan_on_partial_page() {
        let mut doc = site_page();
        let report = run_init(&mut doc, &InitPlan::default());
        assert_eq!(report.copied, 2);
        assert_eq!(report.skipped, 7);
        assert_eq!(report.collapse, None);
        assert_eq!(report.revealed, 1);

        let chain = doc.element_by_id("chainIdList").unwrap();
        assert!(doc.inner_html(chain).contains("chainIdSet.html"));
        let url = doc.element_by_id("urlList").unwrap();
        assert!(doc.inner_html(url).contains("urlSet.html"));
        let nav = doc.element_by_id("nav-top").unwrap();
        assert_eq!(doc.display(&nav).as_deref(), Some("block"));
    }

    #[test]
    fn test_custom_plan_runs_in_order() {
        let mut doc = site_page();
        // Both steps write the same destination; the last one wins.
        let plan = InitPlan {
            copies: vec![
                CopyStep::new("ethNodeToc", 0, "chainIdList"),
                CopyStep::new("ethNodeToc", 1, "chainIdList"),
            ],
            navigation_id: "missing-nav".to_string(),
            collapse_inner_only: true,
        };
        let report = run_init(&mut doc, &plan);
        assert_eq!(report.copied, 2);
        assert_eq!(report.revealed, 0);
        assert_eq!(report.collapse, Some(CollapseReport::default()));

        let chain = doc.element_by_id("chainIdList").unwrap();
        assert_eq!(doc.text_content(chain), "urlSet");
    }
}
