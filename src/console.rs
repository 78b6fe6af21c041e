//! Line-oriented driver standing in for the gallery's pagination controls.
//!
//! Each input line is parsed into a `Command` and applied to the stores.
//! The driver only writes state; rendering is left to subscribers.

use std::{path::PathBuf, str::FromStr};

use tracing::{debug, info};

use crate::{
    catalog::load_collection,
    error::{CatalogError, CommandError},
    state::{ArtCollectionState, PageState, next_page, previous_page, reset_page},
};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  next | n          go to the next page
  prev | p          go to the previous page
  page <n>          jump to page <n>
  reset             go back to page 0
  load <file>       replace the collection with a saved collection response
  list              print the current collection
  clear             empty the collection
  help              show this text
  quit | q          exit";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Page(i64),
    Reset,
    Load(PathBuf),
    List,
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        match word.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Previous),
            "page" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "page",
                        expected: "an integer",
                    });
                }
                rest.parse()
                    .map(Self::Page)
                    .map_err(|_| CommandError::InvalidPage(rest))
            }
            "reset" => Ok(Self::Reset),
            "load" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "load",
                        expected: "a file path",
                    });
                }
                Ok(Self::Load(PathBuf::from(rest)))
            }
            "list" | "ls" => Ok(Self::List),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; print these lines.
    Continue(Vec<String>),
    /// Stop the driver.
    Quit,
}

/// Applies commands to a pair of stores.
pub struct Console<'a> {
    collection: &'a ArtCollectionState,
    page: &'a PageState,
    /// Most pieces printed by `list`; `None` prints all.
    page_size: Option<usize>,
}

impl<'a> Console<'a> {
    /// Creates a console writing to the given stores.
    pub fn new(collection: &'a ArtCollectionState, page: &'a PageState) -> Self {
        Self {
            collection,
            page,
            page_size: None,
        }
    }

    /// Limits `list` output to `page_size` pieces.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Applies `command`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a `load` payload cannot be read or decoded;
    /// the collection is left unchanged in that case.
    pub fn execute(&self, command: Command) -> Result<Outcome, CatalogError> {
        debug!(?command, "Executing console command");

        let lines = match command {
            Command::Next => {
                next_page(self.page);
                vec![format!("page {}", self.page.get())]
            }
            Command::Previous => {
                previous_page(self.page);
                vec![format!("page {}", self.page.get())]
            }
            Command::Page(n) => {
                self.page.set(n);
                vec![format!("page {n}")]
            }
            Command::Reset => {
                reset_page(self.page);
                vec!["page 0".to_string()]
            }
            Command::Load(path) => {
                let response = load_collection(&path)?;
                let loaded = response.art_objects.len();
                self.collection.set(response.art_objects);
                info!(
                    path = %path.display(),
                    loaded,
                    total = response.count,
                    "Collection loaded"
                );
                vec![format!("loaded {loaded} of {} art pieces", response.count)]
            }
            Command::List => self.list(),
            Command::Clear => {
                self.collection.set(Vec::new());
                vec!["collection cleared".to_string()]
            }
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Continue(lines))
    }

    fn list(&self) -> Vec<String> {
        let pieces = self.collection.get();
        if pieces.is_empty() {
            return vec![format!("page {}: no art pieces", self.page.get())];
        }

        let shown = self.page_size.map_or(pieces.len(), |size| size.min(pieces.len()));
        let mut lines = vec![format!(
            "page {}: {} art pieces",
            self.page.get(),
            pieces.len()
        )];
        lines.extend(pieces.iter().take(shown).enumerate().map(|(i, piece)| {
            format!("{:>3}. {} [{}]", i + 1, piece.title, piece.object_number)
        }));
        if shown < pieces.len() {
            lines.push(format!("... {} more", pieces.len() - shown));
        }
        lines
    }
}
