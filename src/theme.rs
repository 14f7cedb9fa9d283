//! Named style descriptors for rendered conversations.
//!
//! # Available Themes
//! - `bw` (default): black on white, Arial
//! - `color`: blue on light gray, Verdana
//! - `modern`: dark slate gray on white, Helvetica
//! - `traditional`: black on beige, Times New Roman

/// Theme used when a requested name is not registered.
pub const DEFAULT_THEME: &str = "bw";

const THEMES: [(&str, &str); 4] = [
    ("bw", "color: black; background: white; font-family: Arial;"),
    (
        "color",
        "color: blue; background: lightgray; font-family: Verdana;",
    ),
    (
        "modern",
        "color: darkslategray; background: white; font-family: Helvetica;",
    ),
    (
        "traditional",
        "color: black; background: beige; font-family: Times New Roman;",
    ),
];

fn lookup(name: &str) -> Option<&'static str> {
    THEMES
        .iter()
        .find(|(theme, _)| *theme == name)
        .map(|(_, style)| *style)
}

/// Style descriptor for `name`, falling back to the `bw` theme.
pub fn get_style(name: &str) -> &'static str {
    match lookup(name) {
        Some(style) => {
            log::info!("Applying theme: {name}");
            style
        }
        None => {
            log::warn!("Requested theme '{name}' not found, defaulting to '{DEFAULT_THEME}'");
            THEMES[0].1
        }
    }
}

pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

/// Registered theme names in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|(name, _)| *name)
}
