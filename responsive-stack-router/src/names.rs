//! Branch and screen name constants
//!
//! External named constants consumed by the rewriters. The full route table
//! is owned by the hosting application; only the names the rehydration
//! algorithm keys its decisions on live here.

/// Navigator branch names.
pub mod navigators {
    /// Side stack hosting modal overlay flows.
    pub const MODAL_OVERLAY: &str = "ModalOverlayNavigator";
    /// Primary content pane required on wide layouts.
    pub const CONTENT_PANE: &str = "ContentPaneNavigator";
    /// Full-screen stack hosting the settings split view.
    pub const FULL_SCREEN: &str = "FullScreenNavigator";
}

/// Screen names.
pub mod screens {
    /// Content screen hosted by the content pane.
    pub const CONTENT: &str = "ContentScreen";
    /// Settings entry screen, opened inside the modal overlay.
    pub const SETTINGS: &str = "Settings";
    /// Settings sidebar shown in the full-screen navigator.
    pub const SETTINGS_HOME: &str = "SettingsHome";
    /// Settings content pane shown next to the sidebar.
    pub const SETTINGS_CONTENT: &str = "SettingsContentPane";

    /// Settings sub-screens and their owning sections.
    pub mod settings {
        pub const DISPLAY_NAME: &str = "Settings_DisplayName";
        pub const CONTACT_METHODS: &str = "Settings_ContactMethods";
        pub const CONTACT_METHOD_DETAILS: &str = "Settings_ContactMethodDetails";
        pub const SECURITY: &str = "Settings_Security";
        pub const LANGUAGE: &str = "Settings_Language";
        pub const THEME: &str = "Settings_Theme";
        pub const PRIORITY_MODE: &str = "Settings_PriorityMode";

        /// Profile section; also the fallback for unmapped sub-screens.
        pub const PROFILE: &str = "Settings_Profile";
        /// Preferences section.
        pub const PREFERENCES: &str = "Settings_Preferences";
    }
}

/// Route parameter keys.
pub mod params {
    /// Contextual identifier resolved by the deep-context search.
    pub const CONTEXT_ID: &str = "contextID";
}
