use crate::client::identity::IdentityClient;

/// Whether the mobile overlay menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState(bool);

impl MenuState {
    pub fn is_open(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn close(&mut self) {
        self.0 = false;
    }
}

/// Which rendition of the header a control lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

/// Login pressed: start the provider's sign-in flow. The mobile overlay closes behind it.
pub fn login(identity: &dyn IdentityClient, menu: &mut MenuState, layout: Layout) {
    identity.open_sign_in();

    if layout == Layout::Mobile {
        menu.close();
    }
}
