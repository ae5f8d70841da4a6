use inksac::prelude::*;

/// Styles the shell's own messages, falling back to plain text when the
/// terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct OutputHighlighter {
    color_support: ColorSupport,
}

impl Default for OutputHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// An error report, carrying the uniform `msh:` tag.
    pub fn error_line(&self, message: &str) -> String {
        let line = format!("msh: {}", message);
        if matches!(self.color_support, ColorSupport::NoColor) {
            return line;
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        line.style(error_style).to_string()
    }

    /// An informational aside, like the Ctrl-C reminder.
    pub fn notice(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let notice_style = Style::builder().foreground(Color::Yellow).build();
        message.style(notice_style).to_string()
    }
}
