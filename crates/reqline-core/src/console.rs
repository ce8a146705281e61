//! Console output shared by sanitization hooks and commands.
//!
//! The console pairs a [`Style`] with a sink. The stdout sink is what the
//! binary uses; the captured sink records lines so that tests can assert on
//! warnings such as the one printed when a path segment is left unescaped.

use crate::style::{PlainStyle, Style};

enum Sink {
    Stdout,
    Captured(Vec<String>),
}

/// Output channel of the console.
pub struct Console {
    style: Box<dyn Style>,
    sink: Sink,
}

impl Console {
    /// A console printing to standard output.
    pub fn stdout(style: Box<dyn Style>) -> Self {
        Self {
            style,
            sink: Sink::Stdout,
        }
    }

    /// A console recording every line it is given.
    pub fn captured(style: Box<dyn Style>) -> Self {
        Self {
            style,
            sink: Sink::Captured(Vec::new()),
        }
    }

    /// A recording console with [`PlainStyle`].
    pub fn plain() -> Self {
        Self::captured(Box::new(PlainStyle))
    }

    /// The style used to format help and notices.
    pub fn style(&self) -> &dyn Style {
        self.style.as_ref()
    }

    /// Write one line.
    pub fn say(&mut self, line: impl AsRef<str>) {
        match &mut self.sink {
            Sink::Stdout => println!("{}", line.as_ref()),
            Sink::Captured(lines) => lines.push(line.as_ref().to_string()),
        }
    }

    /// Write `text` formatted as a notice.
    pub fn notice(&mut self, text: &str) {
        let line = self.style.notice(text);
        self.say(line);
    }

    /// Lines recorded so far (always empty for stdout consoles).
    pub fn lines(&self) -> &[String] {
        match &self.sink {
            Sink::Stdout => &[],
            Sink::Captured(lines) => lines.as_slice(),
        }
    }

    /// Recorded output joined with trailing newlines, as it would have been
    /// printed. Clears the record.
    pub fn take_output(&mut self) -> String {
        match &mut self.sink {
            Sink::Stdout => String::new(),
            Sink::Captured(lines) => lines.drain(..).map(|l| l + "\n").collect(),
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sink = match self.sink {
            Sink::Stdout => "stdout",
            Sink::Captured(_) => "captured",
        };
        f.debug_struct("Console").field("sink", &sink).finish_non_exhaustive()
    }
}
