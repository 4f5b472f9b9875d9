use std::collections::{HashMap, HashSet};

use super::entry::{Entry, Role};

/// Lookup tables built once per operation so the ancestor and descendant
/// walks are plain map hops instead of repeated scans of the list.
struct TreeIndex<'a> {
    by_key: HashMap<&'a str, &'a Entry>,
    children: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> TreeIndex<'a> {
    fn build(entries: &'a [Entry]) -> Self {
        let mut by_key = HashMap::new();
        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        for entry in entries {
            by_key.insert(entry.key.as_str(), entry);
            if let Some(parent) = &entry.parent {
                children
                    .entry(parent.as_str())
                    .or_default()
                    .push(entry.key.as_str());
            }
        }
        TreeIndex { by_key, children }
    }

    /// Keys from `key` up to its root, inclusive, in child -> root order.
    /// A parent that no longer resolves (deletes do not cascade, so orphans
    /// are possible) ends the walk as if the entry were a root, and a seen
    /// set keeps a malformed parent cycle from looping forever.
    fn ancestor_chain(&self, key: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.by_key.get(key).copied();
        while let Some(entry) = current {
            if !seen.insert(entry.key.as_str()) {
                break;
            }
            chain.push(entry.key.clone());
            current = entry
                .parent
                .as_deref()
                .and_then(|parent| self.by_key.get(parent).copied());
        }
        chain
    }

    /// All transitive descendants of `key`, in pre-order.
    fn descendants(&self, key: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_descendants(key, &mut out);
        out
    }

    fn collect_descendants(&self, key: &str, out: &mut Vec<String>) {
        if let Some(kids) = self.children.get(key) {
            for kid in kids {
                out.push((*kid).to_string());
                self.collect_descendants(kid, out);
            }
        }
    }
}

/// The tree state engine. Owns the canonical seed list plus the current
/// derived list, and exposes the transitions the shell forwards user events
/// to. Every transition computes a fresh list from the old one, so the
/// engine is testable without any rendering layer.
pub struct TreeState {
    seed: Vec<Entry>,
    entries: Vec<Entry>,
    role: Role,
    searching: bool,
}

impl TreeState {
    pub fn new(seed: Vec<Entry>) -> Self {
        TreeState {
            entries: seed.clone(),
            seed,
            role: Role::User,
            searching: false,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// True while a text filter is applied; carets are hidden in that view.
    pub fn searching(&self) -> bool {
        self.searching
    }

    /// Expand or collapse a folder. The target is marked shown and active and
    /// its whole ancestor chain is highlighted; every entry outside the
    /// affected set has its highlight cleared. Opening toggles `show` on the
    /// direct children only -- a grandchild stays hidden until its own parent
    /// is opened. Closing force-hides the entire nested subtree.
    ///
    /// The engine does not check kind or role here; the shell only offers the
    /// caret on folder rows the active role may interact with. An unknown key
    /// leaves the list untouched.
    pub fn toggle_open(&mut self, key: &str) {
        let index = TreeIndex::build(&self.entries);
        let Some(target) = index.by_key.get(key).copied() else {
            return;
        };
        let chain: HashSet<String> = index.ancestor_chain(key).into_iter().collect();
        let closing: HashSet<String> = if target.open {
            index.descendants(key).into_iter().collect()
        } else {
            HashSet::new()
        };

        self.entries = self
            .entries
            .iter()
            .map(|el| {
                let mut el = el.clone();
                if el.key == key {
                    el.show = true;
                    el.open = !el.open;
                    el.active = true;
                } else if closing.contains(&el.key) {
                    el.open = false;
                    el.show = false;
                    el.active = false;
                } else if el.parent.as_deref() == Some(key) {
                    el.show = !el.show;
                    el.open = false;
                    el.active = true;
                } else if chain.contains(&el.key) {
                    el.active = true;
                } else {
                    el.active = false;
                }
                el
            })
            .collect();
    }

    /// Remove the entry with the given key. Removes the exact match only:
    /// descendants are left in place with a dangling parent reference, and
    /// the ancestor walk treats them as roots from then on. An unknown key
    /// is a no-op.
    pub fn delete(&mut self, key: &str) {
        self.entries.retain(|el| el.key != key);
    }

    /// Move the dragged entry together with its whole nested subtree from
    /// `from` to `to`. Both indices address the flattened list as rendered
    /// when the gesture completed; `to` addresses the list after the block
    /// has been taken out. A stale or out-of-range index, or a key that no
    /// longer exists, leaves the list untouched rather than corrupting it.
    pub fn reorder(&mut self, from: usize, to: usize, key: &str) {
        let index = TreeIndex::build(&self.entries);
        if !index.by_key.contains_key(key) {
            return;
        }
        let block_len = 1 + index.descendants(key).len();
        if from + block_len > self.entries.len() || self.entries[from].key != key {
            return;
        }

        let mut result = self.entries.clone();
        let block: Vec<Entry> = result.drain(from..from + block_len).collect();
        let to = to.min(result.len());
        result.splice(to..to, block);
        self.entries = result;
    }

    /// Filter the tree by a case-insensitive substring of the entry name.
    /// Filtering always runs against the canonical seed list, never the
    /// currently mutated one, and never writes back to it: matches come out
    /// carrying the `search` marker, non-matches are dropped from the view
    /// entirely. An empty term restores the full seed list.
    pub fn search(&mut self, term: &str) {
        if term.is_empty() {
            self.entries = self.seed.clone();
            self.searching = false;
            return;
        }
        let needle = term.to_lowercase();
        self.entries = self
            .seed
            .iter()
            .filter(|el| el.name.to_lowercase().contains(&needle))
            .map(|el| {
                let mut el = el.clone();
                el.search = true;
                el
            })
            .collect();
        self.searching = true;
    }

    /// Switch the active permission context. Entries are never removed or
    /// reordered by a role change; the role only gates the per-row controls.
    /// Switching does drop any active search and returns to the unfiltered
    /// view -- the same coupling the header wires into its own text box.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        if self.searching {
            self.search("");
        }
    }

    /// Restore the canonical dataset and clear the search state. The role
    /// selection is left alone.
    pub fn reset(&mut self) {
        self.search("");
    }

    pub fn has_children(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|el| el.parent.as_deref() == Some(key))
    }

    /// Keys that currently have at least one child, for deciding which rows
    /// get a caret.
    pub fn parent_keys(&self) -> HashSet<String> {
        self.entries
            .iter()
            .filter_map(|el| el.parent.clone())
            .collect()
    }

    /// Structural depth per key, measured along the ancestor chain. The seed
    /// data also encodes depth in the key length, but that is a convention of
    /// the dataset, not something the engine relies on.
    pub fn depths(&self) -> HashMap<String, usize> {
        let index = TreeIndex::build(&self.entries);
        self.entries
            .iter()
            .map(|el| {
                let depth = index.ancestor_chain(&el.key).len().saturating_sub(1);
                (el.key.clone(), depth)
            })
            .collect()
    }
}
