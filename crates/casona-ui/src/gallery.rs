//! Gallery modal state machine.
//!
//! The modal is either closed or open on a bounded image index. Navigation
//! wraps modulo the image count and is a no-op with a single image. Focus
//! restoration and the actual keyboard listener live in the wasm component;
//! this module only decides what a key press means.

/// Modal state for the photo gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GalleryState {
    /// Modal hidden.
    #[default]
    Closed,
    /// Modal visible, showing the image at `index`.
    Open {
        /// Current image index, always `< len` for the gallery it was
        /// opened against.
        index: usize,
    },
}

impl GalleryState {
    /// Open the modal at `index`, clamped into range. Opening an empty
    /// gallery stays closed.
    #[must_use]
    pub fn open(index: usize, len: usize) -> Self {
        if len == 0 {
            Self::Closed
        } else {
            Self::Open {
                index: index.min(len - 1),
            }
        }
    }

    /// Step forward (`+1`) or back (`-1`), wrapping modulo `len`. No-op when
    /// closed or when the gallery holds at most one image.
    #[must_use]
    pub fn navigate(self, delta: isize, len: usize) -> Self {
        let Self::Open { index } = self else {
            return self;
        };
        if len <= 1 {
            return self;
        }
        let step = delta.rem_euclid(isize::try_from(len).unwrap_or(isize::MAX));
        let step = usize::try_from(step).unwrap_or(0);
        Self::Open {
            index: (index + step) % len,
        }
    }

    /// Close the modal.
    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    /// Whether the modal is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Semantic action for a page-level key press while the modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryKey {
    /// Close the modal.
    Close,
    /// Show the next image.
    Next,
    /// Show the previous image.
    Prev,
}

/// Map a `KeyboardEvent::key` value to a gallery action. Only meaningful
/// while the modal is open; the caller checks state first.
#[must_use]
pub fn interpret_key(key: &str) -> Option<GalleryKey> {
    match key {
        "Escape" => Some(GalleryKey::Close),
        "ArrowRight" => Some(GalleryKey::Next),
        "ArrowLeft" => Some(GalleryKey::Prev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_clamps_and_rejects_empty() {
        assert_eq!(GalleryState::open(2, 5), GalleryState::Open { index: 2 });
        assert_eq!(GalleryState::open(9, 5), GalleryState::Open { index: 4 });
        assert_eq!(GalleryState::open(0, 0), GalleryState::Closed);
    }

    #[test]
    fn navigation_is_cyclic() {
        for len in 1..=6_usize {
            for start in 0..len {
                let mut state = GalleryState::open(start, len);
                for _ in 0..len {
                    state = state.navigate(1, len);
                }
                assert_eq!(state, GalleryState::Open { index: start });
            }
        }
    }

    #[test]
    fn backwards_wraps_to_last() {
        let state = GalleryState::open(0, 4).navigate(-1, 4);
        assert_eq!(state, GalleryState::Open { index: 3 });
    }

    #[test]
    fn single_image_navigation_is_noop() {
        let state = GalleryState::open(0, 1);
        assert_eq!(state.navigate(1, 1), state);
        assert_eq!(state.navigate(-1, 1), state);
    }

    #[test]
    fn closed_ignores_navigation() {
        assert_eq!(GalleryState::Closed.navigate(1, 5), GalleryState::Closed);
    }

    #[test]
    fn key_mapping() {
        assert_eq!(interpret_key("Escape"), Some(GalleryKey::Close));
        assert_eq!(interpret_key("ArrowRight"), Some(GalleryKey::Next));
        assert_eq!(interpret_key("ArrowLeft"), Some(GalleryKey::Prev));
        assert_eq!(interpret_key("Enter"), None);
    }
}
