//! Locating the conventionally-named frames inside a document.

use crate::{document::Node, Error, FileResponse, Result};

/// Finds the `frame_name` frame directly on the `page_name` page.
pub fn extract_frame<'a>(
    file: &'a FileResponse,
    page_name: &str,
    frame_name: &str,
) -> Result<&'a Node> {
    let page = file
        .pages()
        .find(|page| page.name == page_name)
        .ok_or_else(|| Error::PageNotFound(page_name.to_string()))?;

    find_child(page, |node| node.is_frame() && node.name == frame_name).ok_or_else(|| {
        Error::FrameNotFound {
            page: page_name.to_string(),
            frame: frame_name.to_string(),
        }
    })
}

pub fn filter_children(node: &Node, predicate: impl Fn(&Node) -> bool) -> Vec<&Node> {
    node.children.iter().filter(|child| predicate(child)).collect()
}

pub fn find_child(node: &Node, predicate: impl Fn(&Node) -> bool) -> Option<&Node> {
    node.children.iter().find(|child| predicate(child))
}
