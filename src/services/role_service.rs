/// Role service - who counts as staff
#[derive(Debug, Clone)]
pub struct RoleService {
    staff_prefix: String,
}

impl RoleService {
    pub fn new(staff_prefix: impl Into<String>) -> Self {
        Self {
            staff_prefix: staff_prefix.into(),
        }
    }

    /// Bots and the staff account are staff
    pub fn is_staff(&self, is_bot: bool, username: &str) -> bool {
        is_bot || (!self.staff_prefix.is_empty() && username.starts_with(&self.staff_prefix))
    }
}
