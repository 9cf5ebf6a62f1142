use std::fmt;

/// The purpose a generated notebook serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentRole {
    SectionNotes,
    Dashboard,
    Journal,
    Flashcards,
    ExerciseBank,
    NotesTemplate,
    FlashcardsTemplate,
    /// Per-chapter scratch notebook for worked examples and numerical checks.
    ChapterExamples,
    SpacedRepetition,
}

impl DocumentRole {
    /// The fixed per-chapter support documents, in creation order.
    pub const AUXILIARY: [DocumentRole; 4] = [
        DocumentRole::Dashboard,
        DocumentRole::Journal,
        DocumentRole::Flashcards,
        DocumentRole::ExerciseBank,
    ];

    pub const VOLUME_TEMPLATES: [DocumentRole; 2] = [
        DocumentRole::NotesTemplate,
        DocumentRole::FlashcardsTemplate,
    ];

    /// File name for roles whose name does not depend on a section title.
    pub fn fixed_file_name(self) -> Option<&'static str> {
        match self {
            DocumentRole::SectionNotes => None,
            DocumentRole::Dashboard => Some("Overview_Master_Dashboard.ipynb"),
            DocumentRole::Journal => Some("Log_AI_QA_Journal.ipynb"),
            DocumentRole::Flashcards => Some("Activity_Flashcards.ipynb"),
            DocumentRole::ExerciseBank => Some("Activity_Exercise_Bank.ipynb"),
            DocumentRole::NotesTemplate => Some("chapter-notes-template.ipynb"),
            DocumentRole::FlashcardsTemplate => Some("flashcards-template.ipynb"),
            DocumentRole::ChapterExamples => Some("Activity_Examples_and_Code.ipynb"),
            DocumentRole::SpacedRepetition => Some("spaced-repetition-helper.ipynb"),
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocumentRole::SectionNotes => "section notes",
            DocumentRole::Dashboard => "dashboard",
            DocumentRole::Journal => "QA journal",
            DocumentRole::Flashcards => "flashcards",
            DocumentRole::ExerciseBank => "exercise bank",
            DocumentRole::NotesTemplate => "notes template",
            DocumentRole::FlashcardsTemplate => "flashcards template",
            DocumentRole::ChapterExamples => "examples notebook",
            DocumentRole::SpacedRepetition => "spaced-repetition helper",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn auxiliary_file_names_are_distinct() {
        let names: HashSet<_> = DocumentRole::AUXILIARY
            .iter()
            .filter_map(|r| r.fixed_file_name())
            .collect();
        assert_eq!(names.len(), DocumentRole::AUXILIARY.len());
    }

    #[test]
    fn section_notes_have_no_fixed_name() {
        assert_eq!(DocumentRole::SectionNotes.fixed_file_name(), None);
    }

    #[test]
    fn chapter_examples_do_not_clash_with_auxiliary_documents() {
        let name = DocumentRole::ChapterExamples.fixed_file_name().unwrap();
        assert!(
            DocumentRole::AUXILIARY
                .iter()
                .all(|r| r.fixed_file_name() != Some(name))
        );
    }
}
