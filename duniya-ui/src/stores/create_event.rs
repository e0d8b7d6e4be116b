//! Event creation form state store

use super::form::SubmitState;

/// The three image slots on the event form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSlot {
    Primary,
    Second,
    Third,
}

/// State for the create-event view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateEventState {
    /// Public URLs of uploaded images, by slot
    pub image: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    /// Submission state, shared by uploads and the final create
    pub submit: SubmitState,
}

impl CreateEventState {
    pub fn set_image(&mut self, slot: ImageSlot, url: String) {
        match slot {
            ImageSlot::Primary => self.image = Some(url),
            ImageSlot::Second => self.image1 = Some(url),
            ImageSlot::Third => self.image2 = Some(url),
        }
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&str> {
        match slot {
            ImageSlot::Primary => self.image.as_deref(),
            ImageSlot::Second => self.image1.as_deref(),
            ImageSlot::Third => self.image2.as_deref(),
        }
    }

    pub fn clear_images(&mut self) {
        self.image = None;
        self.image1 = None;
        self.image2 = None;
    }
}
