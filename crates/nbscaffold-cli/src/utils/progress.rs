use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use nbscaffold::core::io::fs::Outcome;
use nbscaffold::engine::progress::{Progress, ProgressCallback};
use nbscaffold::engine::report::EntityRecord;
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;
const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const BAR_TEMPLATE: &str = "{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// The line printed for each visited entity.
pub fn entity_line(record: &EntityRecord) -> String {
    let status = match record.outcome {
        Outcome::Created => "✓ Created",
        Outcome::Skipped => "· Exists ",
    };
    format!("  {} {:<9} {}", status, record.kind, record.path.display())
}

/// Drives a spinner per volume and a bar over its chapters, printing one line per
/// entity above them.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::spinner_style());
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.finish_and_clear();
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                pb.reset();
                pb.set_length(0);
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                pb.set_message(name);
            }
            Progress::TaskStart { total_steps } => {
                pb.disable_steady_tick();
                pb.set_length(total_steps);
                pb.set_position(0);
                pb.set_style(Self::bar_style());
            }
            Progress::TaskIncrement => pb.inc(1),
            Progress::TaskFinish => {
                if let Some(len) = pb.length() {
                    pb.set_position(len);
                }
            }
            Progress::PhaseFinish => {
                pb.disable_steady_tick();
                pb.finish_with_message("✓ Done");
            }
            Progress::Entity(record) => {
                let line = entity_line(&record);
                pb.suspend(|| println!("{}", line));
            }
            Progress::Message(msg) => pb.suspend(|| println!("  {}", msg)),
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbscaffold::engine::report::EntityKind;
    use std::path::PathBuf;
    use std::thread;

    fn record(kind: EntityKind, outcome: Outcome) -> EntityRecord {
        EntityRecord {
            kind,
            path: PathBuf::from("/tree/volume-3-quantum-mechanics/chapters"),
            outcome,
        }
    }

    #[test]
    fn templates_are_valid() {
        assert!(ProgressStyle::with_template(SPINNER_TEMPLATE).is_ok());
        assert!(ProgressStyle::with_template(BAR_TEMPLATE).is_ok());
    }

    #[test]
    fn entity_lines_distinguish_created_from_existing() {
        let created = entity_line(&record(EntityKind::Document, Outcome::Created));
        assert!(created.contains("Created document"));
        assert!(created.ends_with("/tree/volume-3-quantum-mechanics/chapters"));

        let exists = entity_line(&record(EntityKind::Marker, Outcome::Skipped));
        assert!(exists.contains("Exists  marker"));
    }

    #[test]
    fn existing_directories_get_a_line_too() {
        let line = entity_line(&record(EntityKind::Directory, Outcome::Skipped));
        assert_eq!(
            line,
            "  · Exists  directory /tree/volume-3-quantum-mechanics/chapters"
        );
    }

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        assert_eq!(handler.pb.length(), Some(0));
        assert!(handler.pb.is_finished());
    }

    #[test]
    fn callback_tracks_a_volume_from_start_to_finish() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();
        let pb = &handler.pb;

        callback(Progress::PhaseStart {
            name: "Volume 3: Quantum Mechanics".to_string(),
        });
        assert_eq!(pb.message(), "Volume 3: Quantum Mechanics");
        assert!(!pb.is_finished());

        callback(Progress::Message("Created root directory /tree".to_string()));
        callback(Progress::TaskStart { total_steps: 21 });
        assert_eq!(pb.length(), Some(21));
        assert_eq!(pb.position(), 0);

        callback(Progress::Entity(record(EntityKind::Document, Outcome::Created)));
        callback(Progress::TaskIncrement);
        assert_eq!(pb.position(), 1);

        callback(Progress::TaskFinish);
        assert_eq!(pb.position(), 21);

        callback(Progress::PhaseFinish);
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✓ Done");
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart {
                name: "Thread Test".to_string(),
            });
            callback(Progress::TaskIncrement);
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        assert!(handler.pb.is_finished());
        assert_eq!(handler.pb.message(), "✓ Done");
    }
}
