use tracing::info;

use super::{
    frame::{extract_frame, filter_children},
    progress::{log_percentage, ProgressKind},
};
use crate::{document::Node, DesignTokens, Error, FileResponse, Result, Token, TokenType};

const PAGE_NAME: &str = "   ↳ Spacing";
const FRAME_NAME: &str = "Spacers";

/// Spacing tokens keyed by spacer name, sized by the spacer's width.
pub fn extract_spacers(file: &FileResponse) -> Result<DesignTokens> {
    info!("Extracting spacers...");

    let spacer_frame = extract_frame(file, PAGE_NAME, FRAME_NAME)?;
    let spacers = filter_children(spacer_frame, |node| {
        node.is_visible() && (node.is_instance() || node.is_frame())
    });

    let mut tokens = DesignTokens::new();
    for (index, spacer) in spacers.iter().enumerate() {
        log_percentage(ProgressKind::Spacers, index, spacers.len(), None);
        tokens.insert(
            spacer.name.clone(),
            Token::new(format!("{}px", width(spacer)?), TokenType::Spacing),
        );
    }

    info!("Spacer extraction complete!");
    Ok(tokens)
}

fn width(spacer: &Node) -> Result<f64> {
    spacer
        .absolute_bounding_box
        .map(|bounds| bounds.width)
        .ok_or_else(|| Error::MissingBoundingBox(spacer.name.clone()))
}
