use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A document that does not follow the naming and layout conventions the
/// extractors rely on. Every variant aborts the extraction.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Could not find page \"{0}\", is figma setup correctly?")]
    PageNotFound(String),

    #[error("Could not find frame \"{frame}\" on page \"{page}\", is figma setup correctly?")]
    FrameNotFound { page: String, frame: String },

    #[error("No fonts found, is figma setup correctly?")]
    NoFonts,

    #[error("No stack item children container found for type stack, is figma setup correctly?")]
    MissingStackContainer,

    #[error("No sample container found for type stack, is figma setup correctly?")]
    MissingSampleContainer,

    #[error("Font node was not of type text, is figma setup correctly?")]
    NotText,

    #[error("Font node \"{0}\" has no type style, is figma setup correctly?")]
    MissingTypeStyle(String),

    #[error("Could not get {role} style as the style key provided is undefined")]
    MissingStyleKey { role: &'static str },

    #[error("Could not find {role} style \"{key}\", has a style been generated on figma for this {role}?")]
    StyleNotFound { role: &'static str, key: String },

    #[error("Shadow \"{0}\" has an effect without a color or offset, is figma setup correctly?")]
    IncompleteShadow(String),

    #[error("No colors found, is figma setup correctly?")]
    NoColors,

    #[error("Color swatch \"{0}\" has no visible solid fill, is figma setup correctly?")]
    MissingSolidFill(String),

    #[error("Spacer \"{0}\" has no bounding box, is figma setup correctly?")]
    MissingBoundingBox(String),
}
