use crate::areas::session::Session;
use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::diff::script::EditScript;
use crate::artifacts::myers::options::DiffOptions;
use colored::Colorize;
use std::path::Path;

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

impl Session {
    /// Prints the unified diff of two files
    ///
    /// Returns whether the files differ. Identical files print nothing.
    pub fn diff(
        &self,
        old: &Path,
        new: &Path,
        options: DiffOptions,
        context: usize,
    ) -> anyhow::Result<bool> {
        let a = self.workspace().read_lines(old)?;
        let b = self.workspace().read_lines(new)?;

        let script = EditScript::diff(&a, &b, options)?;
        if !script.has_changes() {
            return Ok(false);
        }

        writeln!(self.writer(), "{}", format!("--- {}", old.display()).bold())?;
        writeln!(self.writer(), "{}", format!("+++ {}", new.display()).bold())?;

        for hunk in script.hunks(context) {
            self.print_diff_hunk(&hunk)?;
        }

        Ok(true)
    }

    fn print_diff_hunk(&self, hunk: &Hunk<String>) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        for edit in hunk.edits() {
            let (text, missing_newline) = match edit.value().strip_suffix('\n') {
                Some(text) => (text, false),
                None => (edit.value().as_str(), true),
            };
            let line = format!("{}{}", edit.marker(), text);
            let line = match edit {
                Edit::Delete { .. } => line.red(),
                Edit::Insert { .. } => line.green(),
                Edit::Equal { .. } => line.normal(),
            };
            writeln!(self.writer(), "{}", line)?;

            if missing_newline {
                writeln!(self.writer(), "{}", NO_NEWLINE_MARKER)?;
            }
        }

        Ok(())
    }
}
