use actix_web::{post, web, Error, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact_me::ContactForm, AppState};

#[post("/contact")]
#[instrument(skip_all)]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, Error> {
    let response = state.contact_handler
        .submit(form.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
