use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, warn};

/// Durable home of the best score. Persistence is best-effort: failures
/// are absorbed by the store and never reach gameplay.
pub trait ScoreStore {
    /// The stored best score, or 0 when there is none.
    fn load(&mut self) -> u32;
    fn save(&mut self, best: u32);
}

/// Best score kept as decimal ASCII in a single text file.
#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No best score at {}, starting from 0", self.path.display());
                return 0;
            }
            Err(e) => {
                warn!("Failed to read best score from {}: {e}", self.path.display());
                return 0;
            }
        };
        match text.trim().parse() {
            Ok(best) => best,
            Err(e) => {
                warn!("Ignoring corrupt best score file {}: {e}", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        if let Err(e) = fs::write(&self.path, best.to_string()) {
            warn!("Failed to save best score to {}: {e}", self.path.display());
        }
    }
}

/// Current-run score and the persisted best.
pub struct Scoreboard {
    score: u32,
    best: u32,
    store: Box<dyn ScoreStore>,
}

impl Scoreboard {
    pub fn new(mut store: Box<dyn ScoreStore>) -> Self {
        let best = store.load();
        Self {
            score: 0,
            best,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn reset_run(&mut self) {
        self.score = 0;
    }

    pub fn add_point(&mut self) {
        self.score += 1;
    }

    /// Raise and persist the best score if this run beat it. Returns true
    /// when a new best was recorded.
    pub fn sync_best(&mut self) -> bool {
        if self.score <= self.best {
            return false;
        }
        self.best = self.score;
        self.store.save(self.best);
        true
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ScoreStore;

    /// In-memory store that records every save.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingStore {
        pub best: u32,
        pub saves: Rc<RefCell<Vec<u32>>>,
    }

    impl RecordingStore {
        pub(crate) fn with_best(best: u32) -> Self {
            Self {
                best,
                ..Self::default()
            }
        }
    }

    impl ScoreStore for RecordingStore {
        fn load(&mut self) -> u32 {
            self.best
        }

        fn save(&mut self, best: u32) {
            self.best = best;
            self.saves.borrow_mut().push(best);
        }
    }
}
