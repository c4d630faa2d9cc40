//! Boxed build error reports
//!
//! Cargo prints build script panics verbatim, so errors are framed to stand
//! out from the surrounding compiler output.

/// Text columns inside the frame
pub const WIDTH: usize = 64;

/// Fit one line into the frame, cutting on a character boundary
pub fn fit_line(line: &str) -> String {
    if line.chars().count() > WIDTH {
        let mut cut: String = line.chars().take(WIDTH - 3).collect();
        cut.push_str("...");
        cut
    } else {
        line.to_string()
    }
}

/// Frame a title and a multi-line detail message
pub fn boxed(title: &str, detail: &str) -> String {
    let rule = "═".repeat(WIDTH + 3);
    let mut out = format!("\n╔{}╗\n", rule);
    out.push_str(&row(&format!("ERROR: {}", title)));
    out.push_str(&format!("╠{}╣\n", rule));
    for line in detail.lines() {
        out.push_str(&row(line));
    }
    out.push_str(&format!("╚{}╝\n", rule));
    out
}

fn row(line: &str) -> String {
    let fitted = fit_line(line);
    let pad = WIDTH - fitted.chars().count();
    format!("║  {}{} ║\n", fitted, " ".repeat(pad))
}
