//! UI context used by commands to talk to the user.
//!
//! Commands never print prompts or error dialogs themselves; they go through
//! a [`UiContext`], which also hands out the resource texts and the
//! unit-aware formatter. [`TerminalContext`] is the terminal implementation.

use std::io::{self, BufRead, Write};

use st_core::format::FormatUtils;

use crate::resources::ResourceReader;
use crate::styles;

/// Severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// Interaction with the user.
pub trait UiContext {
    /// Shows a message. `args` fill the `{n}` placeholders of the message.
    fn show_message(
        &mut self,
        kind: MessageKind,
        title_key: &str,
        message_key: &str,
        args: &[&str],
    ) -> io::Result<()>;

    /// Asks a yes/no question. Anything but an explicit yes is a no.
    fn show_confirm(&mut self, title_key: &str, message_key: &str, args: &[&str])
    -> io::Result<bool>;

    /// Asks for a line of text.
    ///
    /// Returns `None` when the input ends without an answer. A blank answer
    /// keeps `initial` if one was given.
    fn show_text_input(
        &mut self,
        title_key: &str,
        message_key: &str,
        initial: Option<&str>,
    ) -> io::Result<Option<String>>;

    fn resources(&self) -> &ResourceReader;

    fn format_utils(&self) -> &FormatUtils;
}

/// [`UiContext`] that writes to a terminal stream and reads answers line by
/// line.
pub struct TerminalContext<R, W> {
    input: R,
    output: W,
    resources: ResourceReader,
    format_utils: FormatUtils,
}

impl TerminalContext<io::StdinLock<'static>, io::Stderr> {
    /// Context on stdin and stderr, leaving stdout for command output.
    pub fn stdio(resources: ResourceReader, format_utils: FormatUtils) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), resources, format_utils)
    }
}

impl<R: BufRead, W: Write> TerminalContext<R, W> {
    pub fn new(input: R, output: W, resources: ResourceReader, format_utils: FormatUtils) -> Self {
        Self {
            input,
            output,
            resources,
            format_utils,
        }
    }

    /// Consumes the context and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_title(&mut self, title_key: &str) -> io::Result<()> {
        let title = styles::render_bold(self.resources.get(title_key));
        writeln!(self.output, "{title}")
    }
}

impl<R: BufRead, W: Write> UiContext for TerminalContext<R, W> {
    fn show_message(
        &mut self,
        kind: MessageKind,
        title_key: &str,
        message_key: &str,
        args: &[&str],
    ) -> io::Result<()> {
        let title = self.resources.get(title_key);
        let prefix = match kind {
            MessageKind::Info => format!("{} {}", styles::render_info_icon(), title),
            MessageKind::Warning => format!(
                "{} {}",
                styles::render_warn_icon(),
                styles::render_warn(title)
            ),
            MessageKind::Error => format!(
                "{} {}",
                styles::render_fail_icon(),
                styles::render_fail(title)
            ),
        };
        let message = self.resources.get_string(message_key, args);
        writeln!(self.output, "{prefix}: {message}")?;
        self.output.flush()
    }

    fn show_confirm(
        &mut self,
        title_key: &str,
        message_key: &str,
        args: &[&str],
    ) -> io::Result<bool> {
        self.write_title(title_key)?;
        let message = self.resources.get_string(message_key, args);
        let hint = styles::render_muted(self.resources.get("common.yes_no"));
        write!(self.output, "{message} {hint} ")?;
        self.output.flush()?;

        let answer = self.read_answer()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn show_text_input(
        &mut self,
        title_key: &str,
        message_key: &str,
        initial: Option<&str>,
    ) -> io::Result<Option<String>> {
        self.write_title(title_key)?;
        let label = self.resources.get(message_key).to_string();
        match initial {
            Some(initial) => write!(
                self.output,
                "{label} {} ",
                styles::render_muted(&format!("[{initial}]"))
            )?,
            None => write!(self.output, "{label} ")?,
        }
        self.output.flush()?;

        let Some(answer) = self.read_answer()? else {
            return Ok(None);
        };
        if answer.trim().is_empty() {
            return Ok(initial.map(str::to_string).or(Some(answer)));
        }
        Ok(Some(answer))
    }

    fn resources(&self) -> &ResourceReader {
        &self.resources
    }

    fn format_utils(&self) -> &FormatUtils {
        &self.format_utils
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use st_core::{SpeedMode, UnitSystem};

    fn context(input: &str) -> TerminalContext<&[u8], Vec<u8>> {
        TerminalContext::new(
            input.as_bytes(),
            Vec::new(),
            ResourceReader::english(),
            FormatUtils::new(UnitSystem::Metric, SpeedMode::Speed),
        )
    }

    fn output(ctx: TerminalContext<&[u8], Vec<u8>>) -> String {
        String::from_utf8(ctx.into_output()).unwrap()
    }

    #[test]
    fn error_message_resolves_keys() {
        let mut ctx = context("");
        ctx.show_message(
            MessageKind::Error,
            "common.error",
            "st.dlg.note.error.no_text",
            &[],
        )
        .unwrap();
        let out = output(ctx);
        assert!(out.contains("Error"));
        assert!(out.contains("Please enter the text of the note."));
    }

    #[test]
    fn message_arguments_are_substituted() {
        let mut ctx = context("");
        ctx.show_message(MessageKind::Info, "common.info", "st.dlg.note.saved", &["4"])
            .unwrap();
        assert!(output(ctx).contains("Note 4 has been saved."));
    }

    #[test]
    fn confirm_accepts_only_yes() {
        assert!(
            context("y\n")
                .show_confirm("common.confirm", "st.view.note.delete.confirm", &["1"])
                .unwrap()
        );
        assert!(
            context("YES\n")
                .show_confirm("common.confirm", "st.view.note.delete.confirm", &["1"])
                .unwrap()
        );
        assert!(
            !context("n\n")
                .show_confirm("common.confirm", "st.view.note.delete.confirm", &["1"])
                .unwrap()
        );
        assert!(
            !context("")
                .show_confirm("common.confirm", "st.view.note.delete.confirm", &["1"])
                .unwrap()
        );
    }

    #[test]
    fn text_input_answers() {
        let answer = context("Long run\n")
            .show_text_input("st.dlg.note.title.add", "st.dlg.note.text", None)
            .unwrap();
        assert_eq!(answer.as_deref(), Some("Long run"));

        let kept = context("\n")
            .show_text_input("st.dlg.note.title", "st.dlg.note.text", Some("old"))
            .unwrap();
        assert_eq!(kept.as_deref(), Some("old"));

        let eof = context("")
            .show_text_input("st.dlg.note.title", "st.dlg.note.text", Some("old"))
            .unwrap();
        assert_eq!(eof, None);
    }

    #[test]
    fn exposes_resources_and_format_utils() {
        let ctx = context("");
        assert_eq!(ctx.resources().get("common.info"), "Information");
        assert_eq!(ctx.format_utils().speed_mode(), SpeedMode::Speed);
    }
}
