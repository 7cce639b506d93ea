//! Figma shadow effects rendered as CSS `box-shadow` layers.

use itertools::Itertools;

use crate::document::{Effect, EffectType, Rgba};

pub fn drop_shadow_effects(effects: &[Effect]) -> Vec<&Effect> {
    effects
        .iter()
        .filter(|effect| effect.visible && effect.type_ == EffectType::DropShadow)
        .collect()
}

pub fn inset_shadow_effects(effects: &[Effect]) -> Vec<&Effect> {
    effects
        .iter()
        .filter(|effect| effect.visible && effect.type_ == EffectType::InnerShadow)
        .collect()
}

/// Figma stacks layers bottom-up while CSS lists the top layer first.
/// `None` when a layer has no color or offset.
pub fn box_drop_shadow(effects: &[&Effect]) -> Option<String> {
    let layers = effects
        .iter()
        .rev()
        .map(|effect| shadow_layer(effect))
        .collect::<Option<Vec<_>>>()?;
    Some(layers.join(", "))
}

pub fn box_inset_shadow(effect: &Effect) -> Option<String> {
    shadow_layer(effect).map(|layer| format!("inset {layer}"))
}

fn shadow_layer(effect: &Effect) -> Option<String> {
    let offset = effect.offset?;
    let color = effect.color?;
    Some(format!(
        "{}px {}px {}px {}px {}",
        offset.x,
        offset.y,
        effect.radius,
        effect.spread,
        rgba(color)
    ))
}

fn rgba(color: Rgba) -> String {
    let [r, g, b, _] = color.to_color().to_rgba8();
    let alpha = (color.a * 100.0).round() / 100.0;
    format!("rgba({r}, {g}, {b}, {alpha})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn effects() -> Vec<Effect> {
        serde_json::from_value(json!([
            { "type": "DROP_SHADOW", "color": { "r": 0, "g": 0, "b": 0, "a": 0.1 },
              "offset": { "x": 0, "y": 1 }, "radius": 2 },
            { "type": "LAYER_BLUR", "radius": 4 },
            { "type": "DROP_SHADOW", "visible": false, "color": { "r": 1, "g": 0, "b": 0, "a": 1 },
              "offset": { "x": 0, "y": 0 }, "radius": 0 },
            { "type": "DROP_SHADOW", "color": { "r": 0, "g": 0, "b": 0, "a": 0.25 },
              "offset": { "x": 0, "y": 4 }, "radius": 8, "spread": -2 },
            { "type": "INNER_SHADOW", "color": { "r": 1, "g": 1, "b": 1, "a": 0.5 },
              "offset": { "x": 0, "y": 2 }, "radius": 4 }
        ]))
        .unwrap()
    }

    #[test]
    fn drop_shadows_are_reversed_into_css_order() {
        let effects = effects();
        let drops = drop_shadow_effects(&effects);
        assert_eq!(drops.len(), 2);
        assert_eq!(
            box_drop_shadow(&drops).unwrap(),
            "0px 4px 8px -2px rgba(0, 0, 0, 0.25), 0px 1px 2px 0px rgba(0, 0, 0, 0.1)"
        );
    }

    #[test]
    fn inset_shadow() {
        let effects = effects();
        let insets = inset_shadow_effects(&effects);
        assert_eq!(insets.len(), 1);
        assert_eq!(
            box_inset_shadow(insets[0]).unwrap(),
            "inset 0px 2px 4px 0px rgba(255, 255, 255, 0.5)"
        );
    }

    #[test]
    fn layers_without_color_or_offset_render_nothing() {
        let effects: Vec<Effect> = serde_json::from_value(json!([
            { "type": "DROP_SHADOW", "offset": { "x": 0, "y": 1 }, "radius": 2 },
            { "type": "DROP_SHADOW", "color": { "r": 0, "g": 0, "b": 0, "a": 0.25 }, "radius": 8 }
        ]))
        .unwrap();
        assert_eq!(box_inset_shadow(&effects[0]), None);
        assert_eq!(box_inset_shadow(&effects[1]), None);
        assert_eq!(box_drop_shadow(&drop_shadow_effects(&effects)), None);
    }
}
