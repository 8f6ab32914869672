use std::time::Duration;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::contact_me::{ContactForm, ContactMeResponse},
    errors::AppError,
};

pub struct ContactHandler {
    pub delay: Duration,
}

impl ContactHandler {
    pub fn new(delay: Duration) -> Self {
        ContactHandler { delay }
    }

    /// Accepts an inquiry. Nothing is delivered or stored; the receipt id
    /// only ties the response to the log line.
    pub async fn submit(&self, form: ContactForm) -> Result<ContactMeResponse, AppError> {
        form.validate()?;

        let form = form.sanitized();
        tokio::time::sleep(self.delay).await;

        let id = Uuid::new_v4();
        tracing::info!(
            receipt = %id,
            event_type = %form.event_type,
            message_len = form.message.len(),
            "Inquiry received"
        );

        Ok(ContactMeResponse {
            id,
            message: format!(
                "Thank you, {}. Your inquiry has been sent. We'll be in touch shortly.",
                form.first_name
            ),
        })
    }
}
