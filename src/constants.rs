//! Constants for the frontend application
//!
//! This module centralizes commonly used string literals to prevent typos
//! and enable safe refactoring across the codebase.

// Storage
pub const STORAGE_TOKEN_KEY: &str = "token";

// Reports
pub const DEFAULT_REPORT_FILENAME: &str = "relatorio_metricas.csv";

// CSS Class Names
pub const CSS_NAV_BUTTON: &str = "nav-button";
pub const CSS_NAV_BUTTON_ACTIVE: &str = "nav-button active";
pub const CSS_HIDDEN: &str = "hidden";
pub const CSS_VISIBLE: &str = "visible";
pub const CSS_CARD: &str = "card";
pub const CSS_CARD_SELECTED: &str = "card selected";
pub const CSS_EMPTY_STATE: &str = "empty-state";
pub const CSS_LOADING: &str = "loading-text";
pub const CSS_BANNER_SUCCESS: &str = "banner banner-success";
pub const CSS_BANNER_ERROR: &str = "banner banner-error";
pub const CSS_BTN_PRIMARY: &str = "btn-primary";
pub const CSS_BTN_SECONDARY: &str = "btn-secondary";
pub const CSS_BTN_DANGER: &str = "btn-danger";
pub const CSS_BTN_LINK: &str = "btn-link";
pub const CSS_FORM_ROW: &str = "form-row";
pub const CSS_DATA_TABLE: &str = "data-table";

// Avatar palette used by the comment viewer
pub const AVATAR_COLORS: [&str; 5] = [
    "avatar-blue",
    "avatar-green",
    "avatar-purple",
    "avatar-pink",
    "avatar-indigo",
];
pub const AVATAR_COLOR_FALLBACK: &str = "avatar-gray";

// Element IDs (commonly referenced)
pub const ID_APP_CONTAINER: &str = "app-container";
pub const ID_NAV_BAR: &str = "nav-bar";
pub const ID_PAGE_ROOT: &str = "page-root";
pub const ID_LOGIN_USERNAME: &str = "login-username";
pub const ID_LOGIN_PASSWORD: &str = "login-password";
pub const ID_REPORT_DATE: &str = "report-date";
pub const ID_FB_ACCESS_TOKEN: &str = "fb-access-token";
pub const ID_FB_VIDEO_URL: &str = "fb-video-url";
pub const ID_COMMENT_SEARCH: &str = "comment-search";
pub const ID_VIDEO_SELECT: &str = "video-select";

// Button Types
pub const BUTTON_TYPE_BUTTON: &str = "button";
pub const BUTTON_TYPE_SUBMIT: &str = "submit";

// HTML Attributes
pub const ATTR_TYPE: &str = "type";
pub const ATTR_DATA_TESTID: &str = "data-testid";
