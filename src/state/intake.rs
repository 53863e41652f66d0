#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

/// Extensions accepted by the file intake slot.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["txt", "pdf"];

/// Notification raised when a candidate file has an unsupported extension.
pub const UNSUPPORTED_FILE_MSG: &str =
    "Formato de arquivo não suportado. Use .txt ou .pdf.";

/// The two observable submission inputs: pasted text and the staged file.
///
/// Holds only what the interaction logic needs — the display name of the
/// staged file, never the raw browser handle (that lives in a csr-only
/// context, see `components::drop_zone`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakeState {
    pub text: String,
    pub staged: Option<StagedFile>,
    pub drag_active: bool,
}

/// The single file currently held in the intake slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
}

/// Result of offering a list of candidate files to the intake slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InjectOutcome {
    /// First candidate accepted and staged, replacing any previous file.
    Staged,
    /// First candidate had an unsupported extension; the slot was cleared.
    Rejected,
    /// Empty candidate list; nothing changed.
    Ignored,
}

impl IntakeState {
    /// Offer candidate file names to the slot. Only the first candidate is
    /// inspected; the rest are silently dropped (single-item intake).
    pub fn inject_first<S: AsRef<str>>(&mut self, candidates: &[S]) -> InjectOutcome {
        let Some(first) = candidates.first() else {
            return InjectOutcome::Ignored;
        };
        let name = first.as_ref();
        match file_extension(name) {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {
                self.staged = Some(StagedFile {
                    name: name.to_owned(),
                });
                InjectOutcome::Staged
            }
            _ => {
                self.staged = None;
                InjectOutcome::Rejected
            }
        }
    }

    /// Empty the staged slot. Safe to call when nothing is staged.
    pub fn clear_file(&mut self) {
        self.staged = None;
    }

    pub fn has_file(&self) -> bool {
        self.staged.is_some()
    }

    /// Conflict indicator: text and file populated at the same time.
    pub fn conflict(&self) -> bool {
        input_conflict(&self.text, usize::from(self.staged.is_some()))
    }
}

/// Conflict flag over the two observable inputs: true iff the trimmed text
/// is non-empty and at least one file is staged.
pub fn input_conflict(text: &str, file_count: usize) -> bool {
    !text.trim().is_empty() && file_count > 0
}

/// Lowercased extension after the final `.`, or `None` when the name has no
/// usable extension (no dot, or nothing after it).
pub fn file_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
