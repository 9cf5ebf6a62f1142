use crate::core::io::fs::Outcome;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Directory,
    Document,
    Marker,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            EntityKind::Directory => "directory",
            EntityKind::Document => "document",
            EntityKind::Marker => "marker",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub kind: EntityKind,
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// What a scaffold run did to each entity, in the order it was visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    records: Vec<EntityRecord>,
}

impl ScaffoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: EntityRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    pub fn count(&self, kind: EntityKind, outcome: Outcome) -> usize {
        self.records
            .iter()
            .filter(|r| r.kind == kind && r.outcome == outcome)
            .count()
    }

    pub fn created(&self) -> impl Iterator<Item = &Path> {
        self.with_outcome(Outcome::Created)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.with_outcome(Outcome::Skipped)
    }

    fn with_outcome(&self, outcome: Outcome) -> impl Iterator<Item = &Path> {
        self.records
            .iter()
            .filter(move |r| r.outcome == outcome)
            .map(|r| r.path.as_path())
    }

    pub fn is_noop(&self) -> bool {
        self.records.iter().all(|r| r.outcome == Outcome::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: EntityKind, path: &str, outcome: Outcome) -> EntityRecord {
        EntityRecord {
            kind,
            path: PathBuf::from(path),
            outcome,
        }
    }

    #[test]
    fn counts_split_by_kind_and_outcome() {
        let mut report = ScaffoldReport::new();
        report.push(record(EntityKind::Directory, "ch01", Outcome::Created));
        report.push(record(EntityKind::Document, "a.ipynb", Outcome::Created));
        report.push(record(EntityKind::Document, "b.ipynb", Outcome::Skipped));

        assert_eq!(report.count(EntityKind::Document, Outcome::Created), 1);
        assert_eq!(report.count(EntityKind::Document, Outcome::Skipped), 1);
        assert_eq!(report.count(EntityKind::Marker, Outcome::Created), 0);
        assert_eq!(report.created().count(), 2);
        assert_eq!(report.skipped().collect::<Vec<_>>(), vec![Path::new("b.ipynb")]);
        assert!(!report.is_noop());
    }

    #[test]
    fn empty_report_is_noop() {
        assert!(ScaffoldReport::new().is_noop());
    }
}
