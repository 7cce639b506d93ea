use tracing::{debug, info};

use super::{
    frame::extract_frame,
    progress::{log_percentage, ProgressKind},
};
use crate::{
    document::{Node, PaintType},
    DesignTokens, Error, FileResponse, Result, Token, TokenType,
};

const PAGE_NAME: &str = "   ↳ Color";
const FRAME_NAME: &str = "Colors";

/// Color tokens keyed by fill style name.
///
/// Swatches may be nested at any depth inside the `Colors` frame; any node
/// carrying a `fill` style reference counts as one.
pub fn extract_colors(file: &FileResponse) -> Result<DesignTokens> {
    info!("Extracting colors...");

    let color_frame = extract_frame(file, PAGE_NAME, FRAME_NAME)?;
    let swatches: Vec<&Node> = color_frame
        .descendants()
        .into_iter()
        .filter(|node| node.style_key("fill").is_some())
        .collect();
    if swatches.is_empty() {
        return Err(Error::NoColors);
    }

    let mut tokens = DesignTokens::new();
    for (index, swatch) in swatches.iter().enumerate() {
        log_percentage(ProgressKind::Colors, index, swatches.len(), Some(swatch.name.as_str()));

        let key = swatch
            .style_key("fill")
            .ok_or(Error::MissingStyleKey { role: "fill" })?;
        let style = file.style(key).ok_or_else(|| Error::StyleNotFound {
            role: "fill",
            key: key.to_string(),
        })?;
        let value = solid_fill_hex(swatch)?;
        debug!(style = %style.name, %value, "color swatch");
        tokens.insert(style.name.clone(), Token::new(value, TokenType::Color));
    }

    info!("Color extraction complete!");
    Ok(tokens)
}

fn solid_fill_hex(swatch: &Node) -> Result<String> {
    let paint = swatch
        .fills
        .iter()
        .find(|paint| paint.visible && paint.type_ == PaintType::Solid)
        .and_then(|paint| Some((paint.color?, paint.opacity)))
        .ok_or_else(|| Error::MissingSolidFill(swatch.name.clone()))?;

    let (mut color, opacity) = paint;
    color.a *= opacity;
    Ok(color.to_color().to_hex_string())
}
