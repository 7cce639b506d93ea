//! The subset of the Figma `GET /v1/files/:key` response the extractors read.

use std::collections::HashMap;

use csscolorparser::Color;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FileResponse {
    #[serde(default)]
    pub name: String,
    pub document: Node,
    #[serde(default)]
    pub styles: HashMap<String, Style>,
}
impl FileResponse {
    pub fn pages(&self) -> impl Iterator<Item = &Node> {
        self.document
            .children
            .iter()
            .filter(|node| node.type_ == NodeType::Canvas)
    }
    pub fn style(&self, key: &str) -> Option<&Style> {
        self.styles.get(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Instance,
    Component,
    ComponentSet,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_: NodeType,
    pub visible: Option<bool>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    /// Style role (`text`, `fill`, `effect`, ...) to style key.
    #[serde(default)]
    pub styles: HashMap<String, String>,
    pub style: Option<TypeStyle>,
    pub absolute_bounding_box: Option<Rectangle>,
}
impl Node {
    /// Nodes are visible unless Figma says otherwise.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
    pub fn is_frame(&self) -> bool {
        self.type_ == NodeType::Frame
    }
    pub fn is_instance(&self) -> bool {
        self.type_ == NodeType::Instance
    }
    pub fn is_text(&self) -> bool {
        self.type_ == NodeType::Text
    }
    pub fn style_key(&self, role: &str) -> Option<&str> {
        self.styles.get(role).map(String::as_str)
    }
    /// Depth-first, pre-order walk of every node below this one.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub style_type: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: String,
    pub font_post_script_name: Option<String>,
    pub font_weight: f64,
    pub font_size: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    pub line_height_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub type_: EffectType,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub color: Option<Rgba>,
    pub offset: Option<Vector>,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub spread: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub type_: PaintType,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    pub color: Option<Rgba>,
}

/// Figma colors carry channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_opacity")]
    pub a: f64,
}
impl Rgba {
    pub fn to_color(self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rectangle {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn default_true() -> bool {
    true
}
fn default_opacity() -> f64 {
    1.0
}
