/// Shorten a long URL for secondary display, keeping the scheme-less start
/// Returns "example.com/some/very/long/pa..." for long inputs
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    let url = url.trim_start_matches("https://").trim_start_matches("http://");
    if url.chars().count() <= max_chars {
        return url.to_string();
    }
    let kept: String = url.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Format a click counter with thousands separator (e.g., 1,234,567)
pub fn format_clicks(clicks: u64) -> String {
    let s = clicks.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let digits: String = result.chars().rev().collect();
    if clicks == 1 {
        format!("{} click", digits)
    } else {
        format!("{} clicks", digits)
    }
}
