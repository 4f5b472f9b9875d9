use super::entry::Role;

/// Events the views hand back to the app, one per discrete user action.
/// The app applies them to the tree state after the frame's widgets have
/// all been laid out.
#[derive(Debug, Clone)]
pub enum UIEvent {
    ToggleOpen(String),
    Delete(String),
    Reorder { from: usize, to: usize, key: String },
    Search(String),
    SetRole(Role),
    Reset,
}
