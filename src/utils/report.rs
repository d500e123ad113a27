use std::fmt::Display;

const RULE_WIDTH: usize = 60;

/// Builder for the console reports every script prints.
///
/// Formatting only: section headers, indented key/value lines, and status
/// markers. Nothing here interprets results or talks to the outside world;
/// callers decide what goes in and print the rendered text themselves.
#[derive(Debug, Default)]
pub struct Report {
    out: String,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// `=`-ruled section header.
    pub fn section(&mut self, title: &str) -> &mut Self {
        let rule = "=".repeat(RULE_WIDTH);
        self.out.push('\n');
        self.out.push_str(&rule);
        self.out.push('\n');
        self.out.push_str(&format!("  {}\n", title));
        self.out.push_str(&rule);
        self.out.push('\n');
        self
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Indented key/value pair.
    pub fn kv(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.out.push_str(&format!("  {}: {}\n", key, value));
        self
    }

    pub fn ok(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&format!("✅ {}\n", text));
        self
    }

    pub fn warn(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&format!("⚠️  {}\n", text));
        self
    }

    pub fn fail(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&format!("❌ {}\n", text));
        self
    }

    pub fn render(self) -> String {
        self.out
    }
}
