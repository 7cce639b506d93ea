use tracing::{debug, info};

use super::{
    effects::{box_drop_shadow, box_inset_shadow, drop_shadow_effects, inset_shadow_effects},
    frame::{extract_frame, filter_children},
    progress::{log_percentage, ProgressKind},
};
use crate::{document::Node, DesignTokens, Error, FileResponse, Result, Token, TokenType};

const PAGE_NAME: &str = "   ↳ Shadow";
const FRAME_NAME: &str = "Styles";

/// Shadow tokens keyed by the name of each frame in the `Styles` frame.
///
/// A frame with two or more drop shadows becomes a layered `box-shadow`;
/// otherwise its first inner shadow becomes an inset one. Frames with
/// neither produce nothing.
pub fn extract_shadows(file: &FileResponse) -> Result<DesignTokens> {
    info!("Extracting shadows...");

    let style_frame = extract_frame(file, PAGE_NAME, FRAME_NAME)?;
    let shadow_frames = filter_children(style_frame, Node::is_frame);

    let mut tokens = DesignTokens::new();
    for (index, shadow_frame) in shadow_frames.iter().enumerate() {
        log_percentage(ProgressKind::Shadows, index, shadow_frames.len(), None);

        let incomplete = || Error::IncompleteShadow(shadow_frame.name.clone());
        let drop_shadows = drop_shadow_effects(&shadow_frame.effects);
        if drop_shadows.len() >= 2 {
            let value = box_drop_shadow(&drop_shadows).ok_or_else(incomplete)?;
            tokens.insert(shadow_frame.name.clone(), Token::new(value, TokenType::Shadows));
            continue;
        }

        match inset_shadow_effects(&shadow_frame.effects).first() {
            Some(inset) => {
                let value = box_inset_shadow(inset).ok_or_else(incomplete)?;
                tokens.insert(shadow_frame.name.clone(), Token::new(value, TokenType::Shadows));
            }
            None => debug!(frame = %shadow_frame.name, "no shadow definition found"),
        }
    }

    info!("Shadow extraction complete!");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn shadow(offset_y: f64, alpha: f64) -> Value {
        json!({
            "type": "DROP_SHADOW",
            "color": { "r": 0, "g": 0, "b": 0, "a": alpha },
            "offset": { "x": 0, "y": offset_y },
            "radius": offset_y * 2.0
        })
    }

    fn file(children: Value) -> FileResponse {
        serde_json::from_value(json!({
            "document": {
                "type": "DOCUMENT",
                "children": [{
                    "name": PAGE_NAME,
                    "type": "CANVAS",
                    "children": [{ "name": FRAME_NAME, "type": "FRAME", "children": children }]
                }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn extracts_drop_and_inset_shadows() {
        let file = file(json!([
            { "name": "Elevation/1", "type": "FRAME", "effects": [shadow(1.0, 0.1), shadow(2.0, 0.2)] },
            { "name": "Pressed", "type": "FRAME", "effects": [
                { "type": "INNER_SHADOW", "color": { "r": 0, "g": 0, "b": 0, "a": 0.5 },
                  "offset": { "x": 0, "y": 1 }, "radius": 1 }
            ] },
            { "name": "Label", "type": "TEXT", "effects": [shadow(1.0, 0.1), shadow(2.0, 0.2)] }
        ]));

        let tokens = extract_shadows(&file).unwrap();
        assert_eq!(
            serde_json::to_value(&tokens).unwrap(),
            json!({
                "Elevation/1": {
                    "value": "0px 2px 4px 0px rgba(0, 0, 0, 0.2), 0px 1px 2px 0px rgba(0, 0, 0, 0.1)",
                    "type": "shadows"
                },
                "Pressed": {
                    "value": "inset 0px 1px 1px 0px rgba(0, 0, 0, 0.5)",
                    "type": "shadows"
                }
            })
        );
    }

    #[test]
    fn a_single_drop_shadow_is_not_a_definition() {
        let file = file(json!([
            { "name": "Flat", "type": "FRAME", "effects": [shadow(1.0, 0.1)] },
            { "name": "Empty", "type": "FRAME" }
        ]));
        assert!(extract_shadows(&file).unwrap().is_empty());
    }

    #[test]
    fn shadow_without_color_is_an_error() {
        let file = file(json!([
            { "name": "Raised", "type": "FRAME", "effects": [
                shadow(1.0, 0.1),
                { "type": "DROP_SHADOW", "offset": { "x": 0, "y": 2 }, "radius": 4 }
            ] }
        ]));
        assert!(matches!(
            extract_shadows(&file),
            Err(Error::IncompleteShadow(name)) if name == "Raised"
        ));
    }

    #[test]
    fn missing_styles_frame_is_an_error() {
        let file: FileResponse = serde_json::from_value(json!({
            "document": { "type": "DOCUMENT", "children": [{ "name": PAGE_NAME, "type": "CANVAS" }] }
        }))
        .unwrap();
        assert!(matches!(
            extract_shadows(&file),
            Err(Error::FrameNotFound { .. })
        ));
    }
}
