//! Event creation page service

use duniya_core::api::NewEvent;
use duniya_core::{ApiClient, ApiError, SessionHandle, ViewScope};
use tracing::warn;

use crate::stores::{CreateEventState, ImageSlot};

use super::Redirect;

/// Fields the host collects from the event form; images come from the
/// upload flow and live in the store.
#[derive(Clone, Debug, Default)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub city: String,
    pub description: String,
    pub kind: String,
    pub genre: String,
    pub capacity: u32,
    pub fees: String,
}

/// Service behind the create-event view.
pub struct CreateEventPage {
    pub state: CreateEventState,
    client: ApiClient,
    session: SessionHandle,
    scope: ViewScope,
}

impl CreateEventPage {
    pub fn new(client: ApiClient, session: SessionHandle) -> Self {
        Self {
            state: CreateEventState::default(),
            client,
            session,
            scope: ViewScope::new(),
        }
    }

    pub fn unmount(&self) {
        self.scope.cancel();
    }

    /// Presign, upload, and record the public URL in the slot. Failures
    /// surface inline on the form.
    pub async fn upload_image(
        &mut self,
        slot: ImageSlot,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) {
        let upload = async {
            let ticket = self
                .client
                .request_image_upload(file_name, content_type)
                .await?;
            self.client.upload_image(&ticket, content_type, bytes).await?;
            Ok::<_, ApiError>(ticket.image_url)
        };
        match self.scope.run(upload).await {
            Some(Ok(url)) => self.state.set_image(slot, url),
            Some(Err(error)) => {
                warn!("uploading image failed: {error}");
                self.state.submit.fail(error.to_string());
            }
            None => {}
        }
    }

    /// Create the event. Unauthenticated submission is refused to the
    /// signup flow; success clears the slots and routes back to events.
    pub async fn submit(&mut self, form: EventForm) -> Option<Redirect> {
        if !self.session.is_authenticated() {
            return Some(Redirect::Signup);
        }
        self.state.submit.start();

        let event = NewEvent {
            title: form.title,
            date: form.date,
            time: form.time,
            location: form.location,
            city: form.city,
            description: form.description,
            kind: form.kind,
            genre: form.genre,
            capacity: form.capacity,
            fees: form.fees,
            image: self.state.image.clone().unwrap_or_default(),
            image1: self.state.image1.clone().unwrap_or_default(),
            image2: self.state.image2.clone().unwrap_or_default(),
        };
        match self.client.create_event(&event).await {
            Ok(()) => {
                self.state.submit.succeed("Event created successfully!");
                self.state.clear_images();
                Some(Redirect::Events)
            }
            Err(error) => {
                self.state.submit.fail(error.to_string());
                None
            }
        }
    }
}
