use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use crate::webhook::enums::webhook_outcome::WebhookOutcome;

impl WebhookOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookOutcome::Tagged { .. }
            | WebhookOutcome::AlreadyTagged { .. }
            | WebhookOutcome::Skipped { .. } => StatusCode::OK,
            WebhookOutcome::MissingInfoHash => StatusCode::BAD_REQUEST,
            WebhookOutcome::NotFound { .. } => StatusCode::NOT_FOUND,
            WebhookOutcome::ClientFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            WebhookOutcome::Tagged { .. } => "tagged",
            WebhookOutcome::AlreadyTagged { .. } => "already tagged",
            WebhookOutcome::Skipped { .. } => "no matching tracker group",
            WebhookOutcome::MissingInfoHash => "missing infoHash",
            WebhookOutcome::NotFound { .. } => "torrent not found",
            WebhookOutcome::ClientFailure { .. } => "client error",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let status = self.status_text();
        match self {
            WebhookOutcome::Tagged { info_hash, tag }
            | WebhookOutcome::AlreadyTagged { info_hash, tag } => json!({"status": status, "info_hash": info_hash, "tag": tag}),
            WebhookOutcome::ClientFailure { info_hash, tag: Some(tag) } => json!({"status": status, "info_hash": info_hash, "tag": tag}),
            WebhookOutcome::Skipped { info_hash }
            | WebhookOutcome::NotFound { info_hash }
            | WebhookOutcome::ClientFailure { info_hash, tag: None } => json!({"status": status, "info_hash": info_hash}),
            WebhookOutcome::MissingInfoHash => json!({"status": status}),
        }
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_json())
    }
}
