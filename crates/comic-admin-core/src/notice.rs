//! User-facing notifications
//!
//! The catalog reports outcomes as short toasts. Wording depends on whether
//! the backend looked unreachable.

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: NoticeTone,
}

const UNAVAILABLE_TITLE: &str = "🔌 Backend Unavailable";
const UNAVAILABLE_DESCRIPTION: &str =
    "Cannot connect to backend server. Please ensure the backend server is running.";

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), tone: NoticeTone::Success }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), tone: NoticeTone::Error }
    }

    pub fn loaded(count: usize) -> Self {
        Self::success("✅ Data Loaded", format!("{} comic books loaded successfully", count))
    }

    pub fn saved(title: &str, created: bool) -> Self {
        let verb = if created { "created" } else { "updated" };
        Self::success("✅ Saved", format!("\"{}\" {} successfully", title, verb))
    }

    pub fn deleted(title: &str) -> Self {
        Self::success("✅ Deleted", format!("\"{}\" deleted successfully", title))
    }

    pub fn load_failed(err: &ApiError) -> Self {
        if err.is_backend_unavailable() {
            Self::error("🔌 Backend Not Connected", err.user_message())
        } else {
            Self::error("❌ Load Failed", err.user_message())
        }
    }

    pub fn save_failed(err: &ApiError, created: bool) -> Self {
        if err.is_backend_unavailable() {
            return Self::unavailable();
        }
        let description =
            if created { "Failed to create comic book" } else { "Failed to update comic book" };
        Self::error("❌ Save Failed", description)
    }

    pub fn delete_failed(err: &ApiError) -> Self {
        if err.is_backend_unavailable() {
            return Self::unavailable();
        }
        Self::error("❌ Delete Failed", "Failed to delete comic book")
    }

    fn unavailable() -> Self {
        Self::error(UNAVAILABLE_TITLE, UNAVAILABLE_DESCRIPTION)
    }

    pub fn is_error(&self) -> bool {
        self.tone == NoticeTone::Error
    }
}
