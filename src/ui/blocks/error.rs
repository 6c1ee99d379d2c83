use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    location: Option<String>,
    message: String,
    fixes: Vec<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            location: None,
            message: message.into(),
            fixes: Vec::new(),
        }
    }

    /// File or record the error is about
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fixes.push(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::error("ERROR").bold().render(supports_color);
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        if let Some(location) = &self.location {
            b.add_line(ColoredText::dim(location.as_str()).render(supports_color));
        }
        b.add_empty();
        b.add_line(self.message.clone());

        if !self.fixes.is_empty() {
            b.add_empty();
            for fix in &self.fixes {
                b.add_line(format!("FIX: {}", fix));
            }
        }

        b.render(supports_color, supports_unicode)
    }
}
