use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::{error, info};

use db::Devotionable;

use crate::auth::require_bearer;
use crate::controllers::{BackfillOutcome, BackfillPayload};
use crate::error::Error;
use crate::images;
use crate::ServerData;

/// Most scriptures a single backfill run will touch.
const BACKFILL_BATCH_SIZE: usize = 5;

/// Handles HTTP requests from the scheduler to backfill background images.
///
/// Scans for scriptures with no background, assigns each a stock-photo
/// URL, and reports per-scripture outcomes. One scripture failing does
/// not stop the rest of the batch.
pub async fn generate_backgrounds<D>(
    data: web::Data<ServerData>,
    req: HttpRequest,
) -> Result<HttpResponse, Error>
where
    D: Devotionable,
{
    require_bearer(&req, data.config.cron_secret.as_deref())?;

    let db = data.db.to_owned();
    let missing =
        web::block(move || D::scriptures_missing_image(&mut db.get().unwrap())).await??;

    if missing.is_empty() {
        return Ok(HttpResponse::Ok().json(BackfillPayload {
            success: true,
            message: "All scriptures have background images".to_string(),
            results: None,
        }));
    }

    if data.config.replicate_api_token.is_some() {
        // TODO: generate real backgrounds through Replicate once an image
        // model is settled on; until then the stock-photo fallback covers
        // this path too.
        info!("Image generation token is configured but unused; using stock photos");
    }

    let today = Utc::now().date_naive();
    let mut results = Vec::new();

    for (i, scripture) in missing.into_iter().take(BACKFILL_BATCH_SIZE).enumerate() {
        // Courtesy pause between items for the image host.
        if i > 0 {
            actix_web::rt::time::sleep(data.config.backfill_delay).await;
        }

        let scripture_id = scripture.id;
        let reference = scripture.reference();
        let image_url = images::fallback_image_url(Some(&scripture.book), today);

        let db = data.db.to_owned();
        let stored_url = image_url.to_owned();
        let stored = web::block(move || {
            D::set_background_image(scripture_id, &stored_url, &mut db.get().unwrap())
        })
        .await?;

        match stored {
            Ok(()) => results.push(BackfillOutcome {
                scripture_id,
                reference,
                success: true,
                image_url: Some(image_url),
                error: None,
            }),
            Err(e) => {
                error!("Background backfill failed for {}: {}", reference, e);
                results.push(BackfillOutcome {
                    scripture_id,
                    reference,
                    success: false,
                    image_url: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(HttpResponse::Ok().json(BackfillPayload {
        success: true,
        message: format!("Processed {} scriptures", results.len()),
        results: Some(results),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use crate::test::{api_request, backfilled_request, cron_request, TEST_ADMIN_SECRET};

    #[actix_web::test]
    async fn backfill_requires_the_cron_secret() {
        let uri = "/api/cron/generate-backgrounds";

        let (status, body) = api_request(TestRequest::get().uri(uri)).await;
        assert_eq!(status, 401);
        assert_eq!(body["error"], "Unauthorized");

        // The admin secret does not open the scheduled surface.
        let req = TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", format!("Bearer {}", TEST_ADMIN_SECRET)));
        let (status, _) = api_request(req).await;
        assert_eq!(status, 401);
    }

    #[actix_web::test]
    async fn backfill_caps_the_batch_and_records_failures() {
        let req = TestRequest::get().uri("/api/cron/generate-backgrounds");
        let (status, body) = cron_request(req).await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Processed 5 scriptures");

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 5);

        assert_eq!(results[0]["scriptureId"], 1);
        assert_eq!(results[0]["success"], true);
        assert_eq!(results[0]["reference"], "Philippians 4:4-7");
        let image_url = results[0]["imageUrl"].as_str().unwrap();
        assert!(image_url.starts_with("https://images.unsplash.com/random?query=Philippians"));
        assert!(results[0].get("error").is_none());

        // Scripture 2 fails in the store, but the batch keeps going.
        assert_eq!(results[1]["scriptureId"], 2);
        assert_eq!(results[1]["success"], false);
        assert!(results[1]["error"].as_str().unwrap().contains("not found"));
        assert!(results[1].get("imageUrl").is_none());

        assert_eq!(results[4]["scriptureId"], 5);
    }

    #[actix_web::test]
    async fn covered_catalog_short_circuits() {
        let req = TestRequest::get().uri("/api/cron/generate-backgrounds");
        let (status, body) = backfilled_request(req).await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "All scriptures have background images");
        assert!(body.get("results").is_none());
    }
}
