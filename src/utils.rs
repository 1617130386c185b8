/// Uppercases the first character and lowercases the rest.
///
/// `"nublado"` becomes `"Nublado"`, `"SÃO PAULO"` becomes `"São paulo"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Formats a temperature as received, keeping one decimal for whole numbers.
///
/// `21.5` stays `21.5`, `20.0` stays `20.0` instead of collapsing to `20`.
pub fn format_celsius(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1} °C", value)
    } else {
        format!("{} °C", value)
    }
}

/// Number of cells a bar for `value` gets when `max` spans `width` cells.
///
/// Any positive value gets at least one cell so it stays visible.
pub fn bar_width(value: u64, max: u64, width: usize) -> usize {
    if value == 0 || max == 0 || width == 0 {
        return 0;
    }

    let scaled = (value as f64 / max as f64 * width as f64).round() as usize;
    scaled.clamp(1, width)
}

/// Renders a Markdown-style link, or the bare label without a URL.
pub fn markdown_link(label: &str, url: &str) -> String {
    if url.is_empty() {
        label.to_string()
    } else {
        format!("[{label}]({url})")
    }
}
