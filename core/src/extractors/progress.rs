use std::fmt;

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressKind {
    Spacers,
    Fonts,
    Colors,
    Shadows,
}
impl fmt::Display for ProgressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProgressKind::Spacers => "spacers",
            ProgressKind::Fonts => "fonts",
            ProgressKind::Colors => "colors",
            ProgressKind::Shadows => "shadows",
        })
    }
}

pub fn percentage(index: usize, length: usize) -> u32 {
    if length == 0 {
        return 100;
    }
    (((index + 1) as f64 / length as f64) * 100.0).round() as u32
}

pub fn log_percentage(kind: ProgressKind, index: usize, length: usize, extra: Option<&str>) {
    let percent = percentage(index, length);
    match extra {
        Some(extra) => info!("Extracting {kind}: {percent}% {extra}"),
        None => info!("Extracting {kind}: {percent}%"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_whole_percent() {
        assert_eq!(percentage(0, 3), 33);
        assert_eq!(percentage(1, 3), 67);
        assert_eq!(percentage(2, 3), 100);
        assert_eq!(percentage(0, 0), 100);
    }
}
