//! Profile panel state.

use maquette_types::Profile;

/// Editable identity fields and security toggles. Local UI state only;
/// nothing here reaches a backend.
#[derive(Debug, Default)]
pub struct ProfilePanel {
    profile: Profile,
}

impl ProfilePanel {
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_name(&mut self, name: String) {
        self.profile.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.profile.email = email;
    }

    pub fn toggle_two_factor(&mut self) -> bool {
        self.profile.two_factor = !self.profile.two_factor;
        self.profile.two_factor
    }

    pub fn toggle_encryption(&mut self) -> bool {
        self.profile.encryption = !self.profile.encryption;
        self.profile.encryption
    }

    pub fn toggle_access_control(&mut self) -> bool {
        self.profile.access_control = !self.profile.access_control;
        self.profile.access_control
    }
}

#[cfg(test)]
mod tests {
    use maquette_types::Profile;

    use super::ProfilePanel;

    #[test]
    fn toggles_flip_and_report_new_state() {
        let mut panel = ProfilePanel::new(Profile::default());
        assert!(panel.toggle_two_factor());
        assert!(!panel.toggle_two_factor());
        assert!(!panel.toggle_encryption());
    }
}
