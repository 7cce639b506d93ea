use indexmap::IndexMap;
use tracing::{debug, info};

use super::{
    frame::{extract_frame, filter_children, find_child},
    progress::{log_percentage, ProgressKind},
};
use crate::{
    document::{Node, Style},
    DesignTokens, Error, FileResponse, Result, Token, TokenOrGroup, TokenType, TokenValue,
};

const PAGE_NAME: &str = "   ↳ Typography";
const FRAME_NAME: &str = "Typography";
const SAMPLE_NAME: &str = "Sample";

/// Typography tokens keyed by text style name.
///
/// Layout: each font frame in the `Typography` frame holds type-stack
/// instances; each instance wraps a frame whose `Sample` frame contains one
/// text node per style.
pub fn extract_fonts(file: &FileResponse) -> Result<DesignTokens> {
    info!("Extracting fonts...");

    let container = extract_frame(file, PAGE_NAME, FRAME_NAME)?;
    let font_frames = filter_children(container, Node::is_frame);
    if font_frames.is_empty() {
        return Err(Error::NoFonts);
    }

    let mut tokens = DesignTokens::new();
    for font_frame in font_frames {
        info!("Extracting {} fonts...", font_frame.name);
        tokens = tokens.merge(extract_fonts_from_frame(file, font_frame)?);
        info!("{} font extraction complete!", font_frame.name);
    }

    info!("Font extraction complete!");
    Ok(tokens)
}

fn extract_fonts_from_frame(file: &FileResponse, frame: &Node) -> Result<DesignTokens> {
    let stack_items = filter_children(frame, Node::is_instance);

    let mut tokens = DesignTokens::new();
    for (index, stack_item) in stack_items.iter().enumerate() {
        log_percentage(ProgressKind::Fonts, index, stack_items.len(), None);

        let children_container =
            find_child(stack_item, Node::is_frame).ok_or(Error::MissingStackContainer)?;
        let sample = find_child(children_container, |node| {
            node.is_frame() && node.name == SAMPLE_NAME
        })
        .ok_or(Error::MissingSampleContainer)?;

        for font_spec in &sample.children {
            if !font_spec.is_visible() {
                debug!(node = %font_spec.name, "skipping hidden font sample");
                continue;
            }
            if !font_spec.is_text() {
                return Err(Error::NotText);
            }
            let style = text_style(file, font_spec)?;
            tokens.insert(style.name.clone(), font_token(font_spec)?);
        }
    }
    Ok(tokens)
}

fn text_style<'a>(file: &'a FileResponse, font_spec: &Node) -> Result<&'a Style> {
    let key = font_spec
        .style_key("text")
        .ok_or(Error::MissingStyleKey { role: "text" })?;
    file.style(key).ok_or_else(|| Error::StyleNotFound {
        role: "text",
        key: key.to_string(),
    })
}

fn font_token(font_spec: &Node) -> Result<TokenOrGroup> {
    let style = font_spec
        .style
        .as_ref()
        .ok_or_else(|| Error::MissingTypeStyle(font_spec.name.clone()))?;

    let family = match &style.font_post_script_name {
        Some(post_script) => format!("{}, {}", style.font_family, post_script),
        None => style.font_family.clone(),
    };
    let typography =
        |value: TokenValue| -> TokenOrGroup { Token::new(value, TokenType::Typography).into() };

    let mut group: IndexMap<String, TokenOrGroup> = IndexMap::new();
    group.insert("family".to_string(), typography(family.into()));
    group.insert("lineheight".to_string(), typography(format!("{}px", style.line_height_px).into()));
    group.insert("size".to_string(), typography(format!("{}px", style.font_size).into()));
    group.insert("spacing".to_string(), typography(format!("{}px", style.letter_spacing).into()));
    group.insert("weight".to_string(), typography(style.font_weight.into()));
    Ok(TokenOrGroup::Group(group))
}
