use ego_tree::NodeId;
use scraper::{Html, Node, Selector};
use thiserror::Error;

use crate::visible::{count_in_document, visible_text, NodeKind, Visibility, VisibilityTree};
use crate::words::WordCounter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("invalid content selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Static HTML document with a content region located by selector.
///
/// There is no layout engine behind it, so rendered text is never available
/// and extraction always takes the text-node walk. Visibility comes from
/// inline `style` declarations and the `hidden` attribute.
pub struct HtmlPage {
    html: Html,
    selector: Selector,
}

impl HtmlPage {
    pub fn parse(markup: &str, content_selector: &str) -> Result<Self, PageError> {
        let selector =
            Selector::parse(content_selector).map_err(|err| PageError::InvalidSelector {
                selector: content_selector.to_string(),
                message: err.to_string(),
            })?;
        Ok(Self {
            html: Html::parse_document(markup),
            selector,
        })
    }

    /// Swaps in new markup, as a page rewriting itself would.
    pub fn replace(&mut self, markup: &str) {
        self.html = Html::parse_document(markup);
    }

    pub fn region(&self) -> Option<NodeId> {
        self.html.select(&self.selector).next().map(|element| element.id())
    }

    pub fn region_text(&self) -> Option<String> {
        self.region().map(|region| visible_text(self, &region))
    }

    pub fn count_words(&self, counter: &dyn WordCounter) -> Option<u64> {
        let region = self.region();
        count_in_document(self, region.as_ref(), counter)
    }

    fn element(&self, id: NodeId) -> Option<&scraper::node::Element> {
        self.html.tree.get(id).and_then(|node| node.value().as_element())
    }
}

impl VisibilityTree for HtmlPage {
    type Node = NodeId;

    fn rendered_text(&self, _element: &NodeId) -> Option<String> {
        None
    }

    fn kind(&self, node: &NodeId) -> NodeKind {
        match self.html.tree.get(*node).map(|node| node.value()) {
            Some(Node::Element(_)) => NodeKind::Element,
            Some(Node::Text(text)) => NodeKind::Text(text.text.to_string()),
            _ => NodeKind::Other,
        }
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.html
            .tree
            .get(*node)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default()
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.element(*element)
            .map(|element| element.name().to_string())
            .unwrap_or_default()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.element(*element)
            .and_then(|element| element.attr(name))
            .map(str::to_string)
    }

    fn visibility(&self, element: &NodeId) -> Visibility {
        let Some(element) = self.element(*element) else {
            return Visibility::default();
        };
        let mut visibility = inline_visibility(element.attr("style").unwrap_or_default());
        if element.attr("hidden").is_some() {
            visibility.display_none = true;
        }
        visibility
    }
}

fn inline_visibility(style: &str) -> Visibility {
    let mut visibility = Visibility::default();
    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let value = value.trim().trim_end_matches("!important").trim();
        match property.trim().to_ascii_lowercase().as_str() {
            "display" => visibility.display_none = value.eq_ignore_ascii_case("none"),
            "visibility" => {
                visibility.visibility_hidden = Some(value.eq_ignore_ascii_case("hidden"))
            }
            _ => {}
        }
    }
    visibility
}
