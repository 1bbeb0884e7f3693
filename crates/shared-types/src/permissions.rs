use crate::models::UserRole;

/// Operations a user can attempt on content records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Edit,
    Delete,
    View,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Edit, Action::Delete, Action::View];
}

/// Whether `role` may see the control for `action`.
///
/// This only decides what the interface offers; the backend's row-level
/// policies remain the enforcement point.
pub fn can_perform(action: Action, role: UserRole) -> bool {
    match action {
        Action::View => true,
        Action::Create | Action::Edit => matches!(role, UserRole::Admin | UserRole::Editor),
        Action::Delete => role == UserRole::Admin,
    }
}

/// All actions allowed for `role`, in `Action::ALL` order.
pub fn allowed_actions(role: UserRole) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|a| can_perform(*a, role))
        .collect()
}
