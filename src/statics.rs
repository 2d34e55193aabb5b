// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// External links
pub const GITHUB_URL: &str = "https://github.com/staehle/cme";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "CME: Catalog Management Editor";

pub const EN_BTN_OPEN: &str = "Open...";
pub const EN_BTN_SAVE: &str = "Save Changes";
pub const EN_BTN_SAVE_AS: &str = "Save As...";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";
pub const EN_BTN_CLEAR: &str = "Clear";

pub const EN_BTN_ADD_ROW: &str = "Add Row";
pub const EN_BTN_DELETE: &str = "Delete";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_ABOUT_HEADING: &str = "CME: Catalog Management Editor";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_PROJECT_REPO: &str = "GitHub Repo";

pub const EN_HOME_HEADING: &str = "CME: Catalog Management Editor";
pub const EN_HOME_INSTRUCTIONS: &str = "Open a catalog CSV to begin.";

pub const EN_LABEL_FILTER_COLUMN: &str = "Filter column:";
pub const EN_LABEL_FILTER_VALUE: &str = "Value:";
pub const EN_FILTER_ALL: &str = "(all)";

pub const EN_LABEL_ROWS: &str = "rows:";
pub const EN_LABEL_SHOWING: &str = "showing:";
pub const EN_LABEL_PAGE: &str = "page:";
pub const EN_PAGE_PREV: &str = "<";
pub const EN_PAGE_NEXT: &str = ">";

pub const EN_BADGE_DIRTY: &str = "unsaved changes";
pub const EN_PLACEHOLDER_UNSAVED: &str = "<new catalog>";

pub const EN_STATUS_SAVED: &str = "Changes saved successfully!";
pub const EN_ERR_SAVE_PREFIX: &str = "Error saving changes:";
pub const EN_ERR_LOAD_PREFIX: &str = "Failed to load:";

// Catalog schema header spellings (CAT_ prefix). The on-disk header row must
// match these exactly, in this order.
pub const CAT_COL_DIVISION: &str = "Division";
pub const CAT_COL_BRAND: &str = "Brand";
pub const CAT_COL_CATEGORY: &str = "Category";
pub const CAT_COL_FRANCHISE: &str = "Franchise";
pub const CAT_COL_SUBFRANCHISE: &str = "SubFranchise";
pub const CAT_COL_PARENTTAG: &str = "ParentTag";
pub const CAT_COL_ACTIVITY: &str = "Activity";

// Activity cell values as they appear on disk and in the UI.
pub const CAT_ACTIVITY_ACTIVE: &str = "Active";
pub const CAT_ACTIVITY_NON_ACTIVE: &str = "Non-Active";

// Default backing file, looked up in the working directory at startup.
pub const CAT_DEFAULT_FILE: &str = "Catalog_File.csv";

// Activity cell colors: light green for Active, light pink for Non-Active,
// black text on both.
pub const COLOR_ACTIVE: (u8, u8, u8) = (0x90, 0xEE, 0x90);
pub const COLOR_NON_ACTIVE: (u8, u8, u8) = (0xFF, 0xB6, 0xC1);

// Cosmetic pagination only; the session always holds the full view.
pub const GRID_PAGE_SIZE: usize = 10;
