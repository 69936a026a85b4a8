//! The closed set of icon keys the UI can render.
//!
//! Icon keys are plain strings in the data model; rendering surfaces map them
//! to assets through this registry. Unknown keys resolve to [DEFAULT_ICON]
//! rather than being guessed at from the key text.

/// The icon used when a key is unknown or missing.
pub const DEFAULT_ICON: &str = "tag";

/// Every icon key that has a renderable asset.
pub const ICON_KEYS: &[&str] = &[
    "banknote",
    "briefcase",
    "building-2",
    "car",
    "coffee",
    "credit-card",
    "film",
    "fuel",
    "gamepad-2",
    "heart-pulse",
    "home",
    "more-horizontal",
    "phone",
    "receipt",
    "shirt",
    "shopping-bag",
    "shopping-cart",
    "smartphone",
    "tag",
    "train",
    "trending-up",
    "trophy",
    "tv",
    "users",
    "utensils",
    "zap",
];

/// Resolve an icon key to a renderable key, falling back to [DEFAULT_ICON]
/// for anything outside the registry.
pub fn resolve_icon(key: &str) -> &str {
    if ICON_KEYS.contains(&key) {
        key
    } else {
        DEFAULT_ICON
    }
}
