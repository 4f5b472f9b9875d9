use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

/// Permission context selected in the header. Entries list the roles that
/// may open, delete or drag them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

/// One node of the flattened tree. The list the engine owns is a pre-order
/// flattening: every entry's descendants follow it directly, which is what
/// makes whole-subtree drag reordering a contiguous splice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    /// Key of the parent entry. `None` marks a root.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    pub roles: Vec<Role>,
    /// Whether a folder's children are expanded. Meaningless for files.
    #[serde(default)]
    pub open: bool,
    /// Whether the entry is currently rendered.
    #[serde(default)]
    pub show: bool,
    /// Highlight: on the path to, or is, the last interacted-with node.
    #[serde(default)]
    pub active: bool,
    /// Search-match marker. Only set on the derived list of an active text
    /// filter; a marked entry bypasses the normal visibility and indent rules.
    #[serde(default)]
    pub search: bool,
}

impl Entry {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Row visibility: shown by its parent, a search match, or a root.
    pub fn is_visible(&self) -> bool {
        self.show || self.search || self.is_root()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_entry_from_json() {
        let entry: Entry = serde_json::from_str(
            r#"{ "key": "11", "parent": "1", "type": "file", "name": "Notes.txt", "roles": ["user"] }"#,
        )
        .unwrap();
        assert_eq!(entry.key, "11");
        assert_eq!(entry.parent.as_deref(), Some("1"));
        assert_eq!(entry.kind, EntryKind::File);
        assert!(entry.allows(Role::User));
        assert!(!entry.allows(Role::Admin));
        assert!(!entry.open);
        assert!(!entry.show);
        assert!(!entry.active);
        assert!(!entry.search);
    }

    #[test]
    fn test_visibility_rule() {
        let mut entry: Entry = serde_json::from_str(
            r#"{ "key": "21", "parent": "2", "type": "folder", "name": "Vacation", "roles": ["user"] }"#,
        )
        .unwrap();
        assert!(!entry.is_visible());
        entry.show = true;
        assert!(entry.is_visible());
        entry.show = false;
        entry.search = true;
        assert!(entry.is_visible());
        entry.search = false;
        entry.parent = None;
        assert!(entry.is_visible());
    }
}
