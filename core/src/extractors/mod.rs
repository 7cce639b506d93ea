use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DesignTokens, FileResponse, Result};

mod colors;
mod effects;
mod fonts;
pub mod frame;
pub mod progress;
mod shadows;
mod spacers;

pub use colors::extract_colors;
pub use fonts::extract_fonts;
pub use shadows::extract_shadows;
pub use spacers::extract_spacers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fonts,
    Shadows,
    Colors,
    Spacers,
}
impl Category {
    /// Extraction order; later categories win name collisions.
    pub const ALL: [Category; 4] = [
        Category::Fonts,
        Category::Shadows,
        Category::Colors,
        Category::Spacers,
    ];

    pub fn extract(&self, file: &FileResponse) -> Result<DesignTokens> {
        match self {
            Category::Fonts => extract_fonts(file),
            Category::Shadows => extract_shadows(file),
            Category::Colors => extract_colors(file),
            Category::Spacers => extract_spacers(file),
        }
    }
}
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Fonts => "fonts",
            Category::Shadows => "shadows",
            Category::Colors => "colors",
            Category::Spacers => "spacers",
        })
    }
}
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.to_string() == s)
            .ok_or_else(|| format!("unknown token category: {s}"))
    }
}

/// Runs the selected extractors in [`Category::ALL`] order and merges their
/// mappings. Any failure aborts the whole extraction.
pub fn extract_all(file: &FileResponse, categories: &[Category]) -> Result<DesignTokens> {
    Category::ALL
        .into_iter()
        .filter(|category| categories.contains(category))
        .try_fold(DesignTokens::new(), |tokens, category| {
            Ok(tokens.merge(category.extract(file)?))
        })
}
