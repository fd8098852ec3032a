//! Human-visible text of a DOM subtree.
//!
//! The preferred source is the tree's own rendered text (`innerText` in a
//! browser). Some embedding contexts report nothing there even though raw text
//! exists, so a blank result falls back to walking text nodes and skipping
//! anything that would not be shown.
use crate::words::WordCounter;

/// Elements whose text is never rendered as page content.
const NON_CONTENT_TAGS: [&str; 4] = ["script", "style", "noscript", "title"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text(String),
    /// Comments, processing instructions and the like.
    Other,
}

/// Visibility-related style of an element.
///
/// `display: none` removes the whole subtree. `visibility` is inherited and a
/// descendant may turn it back on, so it is tracked per element: `None` means
/// the element inherits from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub display_none: bool,
    pub visibility_hidden: Option<bool>,
}

impl Visibility {
    /// Whether text directly inside the element is hidden, given the parent's
    /// effective state.
    pub fn hides_text(self, parent_hidden: bool) -> bool {
        self.visibility_hidden.unwrap_or(parent_hidden)
    }
}

/// Read-only view of a document tree.
pub trait VisibilityTree {
    type Node: Clone;

    /// Layout-aware text of `element`, when the backend can produce it.
    fn rendered_text(&self, element: &Self::Node) -> Option<String>;
    fn kind(&self, node: &Self::Node) -> NodeKind;
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;
    fn tag_name(&self, element: &Self::Node) -> String;
    fn attribute(&self, element: &Self::Node, name: &str) -> Option<String>;
    fn visibility(&self, element: &Self::Node) -> Visibility;
}

pub fn visible_text<T: VisibilityTree>(tree: &T, element: &T::Node) -> String {
    if let Some(rendered) = tree.rendered_text(element) {
        if !rendered.trim().is_empty() {
            return rendered;
        }
    }
    let mut out = String::new();
    for child in tree.children(element) {
        collect_visible(tree, &child, false, &mut out);
    }
    out
}

fn collect_visible<T: VisibilityTree>(
    tree: &T,
    node: &T::Node,
    parent_hidden: bool,
    out: &mut String,
) {
    match tree.kind(node) {
        NodeKind::Text(text) => {
            if !parent_hidden {
                out.push_str(&text);
            }
        }
        NodeKind::Element => {
            if is_pruned(tree, node) {
                return;
            }
            let visibility = tree.visibility(node);
            if visibility.display_none {
                return;
            }
            let hidden = visibility.hides_text(parent_hidden);
            for child in tree.children(node) {
                collect_visible(tree, &child, hidden, out);
            }
        }
        NodeKind::Other => {}
    }
}

/// Subtrees that never contribute text, whatever their descendants declare.
fn is_pruned<T: VisibilityTree>(tree: &T, element: &T::Node) -> bool {
    let tag = tree.tag_name(element);
    if NON_CONTENT_TAGS
        .iter()
        .any(|skipped| tag.eq_ignore_ascii_case(skipped))
    {
        return true;
    }
    tree.attribute(element, "aria-hidden").as_deref() == Some("true")
}

/// Counts the visible words of `region`; `None` means the region is not there
/// (yet), which callers treat as "not ready" rather than as zero.
pub fn count_in_document<T: VisibilityTree>(
    tree: &T,
    region: Option<&T::Node>,
    counter: &dyn WordCounter,
) -> Option<u64> {
    region.map(|element| counter.count(&visible_text(tree, element)))
}
