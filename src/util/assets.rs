use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            let svg = load_text("favicon.svg");
            format!("data:image/svg+xml;utf8,{}", escape_svg(&svg))
        })
        .as_str()
}

fn load_text(path: &str) -> String {
    let asset = EmbeddedAssets::get(path)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"));
    String::from_utf8(asset.data.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

/// Minimal escaping so an inline SVG survives inside a data URI.
fn escape_svg(svg: &str) -> String {
    svg.trim()
        .replace('\n', " ")
        .replace('#', "%23")
        .replace('"', "'")
}
