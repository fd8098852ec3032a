use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node, Window};
use wordcount_engine::{NodeKind, Visibility, VisibilityTree};

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Live DOM of one document, read through its own window so computed styles
/// resolve against the right frame.
///
/// Nodes of a frame document belong to another JS realm where `instanceof`
/// checks against this module's classes fail, so casts go through node type
/// and namespace checks instead of `dyn_ref`.
pub(crate) struct LiveTree<'a> {
    window: &'a Window,
}

impl<'a> LiveTree<'a> {
    pub(crate) fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

pub(crate) fn as_element(node: &Node) -> Option<&Element> {
    (node.node_type() == Node::ELEMENT_NODE).then(|| node.unchecked_ref::<Element>())
}

fn as_html_element(node: &Node) -> Option<&HtmlElement> {
    as_element(node)
        .filter(|element| element.namespace_uri().as_deref() == Some(XHTML_NS))
        .map(|element| element.unchecked_ref::<HtmlElement>())
}

impl VisibilityTree for LiveTree<'_> {
    type Node = Node;

    fn rendered_text(&self, element: &Node) -> Option<String> {
        as_html_element(element).map(HtmlElement::inner_text)
    }

    fn kind(&self, node: &Node) -> NodeKind {
        match node.node_type() {
            Node::ELEMENT_NODE => NodeKind::Element,
            Node::TEXT_NODE | Node::CDATA_SECTION_NODE => {
                NodeKind::Text(node.node_value().unwrap_or_default())
            }
            _ => NodeKind::Other,
        }
    }

    fn children(&self, node: &Node) -> Vec<Node> {
        let list = node.child_nodes();
        (0..list.length()).filter_map(|index| list.item(index)).collect()
    }

    fn tag_name(&self, element: &Node) -> String {
        as_element(element).map(Element::tag_name).unwrap_or_default()
    }

    fn attribute(&self, element: &Node, name: &str) -> Option<String> {
        as_element(element).and_then(|element| element.get_attribute(name))
    }

    fn visibility(&self, element: &Node) -> Visibility {
        let Some(element) = as_element(element) else {
            return Visibility::default();
        };
        match self.window.get_computed_style(element) {
            Ok(Some(style)) => Visibility {
                display_none: style
                    .get_property_value("display")
                    .is_ok_and(|value| value == "none"),
                // Computed values are already resolved against the parent.
                visibility_hidden: style
                    .get_property_value("visibility")
                    .ok()
                    .map(|value| value == "hidden"),
            },
            _ => Visibility::default(),
        }
    }
}
