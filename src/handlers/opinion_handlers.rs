use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::config::SiteInfo;
use crate::csrf;
use crate::errors::{AppError, render, render_with_status};
use crate::models::opinion::{self, validate, ListingCache, OpinionForm};
use crate::templates_structs::{FormState, OpinionPageTemplate, PageContext};

/// GET /
/// Count link (when there is at least one opinion) and an empty form.
pub async fn page(
    pool: web::Data<PgPool>,
    cache: web::Data<ListingCache>,
    site: web::Data<SiteInfo>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let results_count = cache.count(&pool).await?;
    let ctx = PageContext::build(&session, &site);

    let tmpl = OpinionPageTemplate::new(
        ctx,
        FormState::Editing,
        Some(results_count),
        &OpinionForm::default(),
        &[],
    );
    render(tmpl)
}

/// POST /opinions
/// Validates and stores an opinion, then replaces the form with a thank-you.
/// Only the form body changes between states; the header and count link stay.
pub async fn submit(
    pool: web::Data<PgPool>,
    cache: web::Data<ListingCache>,
    site: web::Data<SiteInfo>,
    session: Session,
    form: web::Form<OpinionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let new = match validate::to_new_opinion(&form) {
        Ok(new) => new,
        Err(errors) => {
            let results_count = cache.count_or_last_known(&pool).await;
            let ctx = PageContext::build(&session, &site);
            let state = FormState::Invalid;
            let tmpl = OpinionPageTemplate::new(ctx, state, results_count, &form, &errors);
            return render_with_status(tmpl, state.status_code());
        }
    };

    match opinion::record(&pool, &cache, &new).await {
        Ok(_) => {
            let results_count = cache.count_or_last_known(&pool).await;
            let ctx = PageContext::build(&session, &site);
            let tmpl = OpinionPageTemplate::new(
                ctx,
                FormState::Submitted,
                results_count,
                &OpinionForm::default(),
                &[],
            );
            render(tmpl)
        }
        Err(e) => {
            log::error!("Failed to record opinion: {e}");
            let results_count = cache.count_or_last_known(&pool).await;
            let ctx = PageContext::build(&session, &site);
            let state = FormState::Failed;
            let tmpl = OpinionPageTemplate::new(ctx, state, results_count, &form, &[]);
            render_with_status(tmpl, state.status_code())
        }
    }
}

/// POST /opinions/validate
/// Field-level feedback for blur events. Same rules as `submit`, no side effects.
pub async fn validate_fields(
    session: Session,
    form: web::Form<OpinionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let errors = validate::validate_opinion(&form);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "errors": errors })))
}
