use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use azp_rewrite::Rewriter;

use crate::{views, AppState};

/// Articles shorter than this (in words) are rejected with a flash message.
const MIN_WORDS: usize = 50;

#[derive(Debug, Deserialize)]
pub struct RewriteForm {
    #[serde(default)]
    pub url: String,
}

pub async fn index_form() -> Html<String> {
    Html(views::form_page(None))
}

/// The full flow: fetch, extract, classify, rewrite, assemble, render.
/// Every anticipated failure degrades to a form re-render with a flash
/// message; the pipeline itself never errors.
pub async fn index_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RewriteForm>,
) -> Response {
    let url = form.url.trim();
    if url.is_empty() {
        return flash("Vul een URL in.");
    }

    let downloaded = azp_extract::fetch_url(&state.http, url).await;
    let text = downloaded
        .map(|body| azp_extract::extract_text(&body))
        .unwrap_or_default();
    if !has_enough_text(&text) {
        return flash("Te weinig tekst gevonden in dit artikel.");
    }

    let model = match &state.model {
        Some(m) => Arc::clone(m),
        None => {
            return flash(
                "OPENAI_API_KEY ontbreekt. Zet je sleutel in de omgeving en herstart de server.",
            )
        }
    };

    let article = azp_extract::source_article(url, text);
    let result = Rewriter::new(model).rewrite(&article).await;
    tracing::info!(
        "rewrote {} into {} paragraphs (attribution: {})",
        article.url,
        result.body_paragraphs.len(),
        result.attribution_required
    );
    Html(views::result_page(&result)).into_response()
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn debug_env(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "OPENAI_API_KEY_present": state.config.api_key_present() }))
}

fn has_enough_text(text: &str) -> bool {
    azp_extract::word_count(text) >= MIN_WORDS
}

fn flash(message: &str) -> Response {
    Html(views::form_page(Some(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_app, Config};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use azp_core::{ChatModel, Result};
    use tower::ServiceExt;

    struct FixedModel {
        response: String,
    }

    #[async_trait]
    impl ChatModel for FixedModel {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _system: &str, _user: &str, _max_tokens: u32) -> Result<String> {
            Ok(self.response.clone())
        }
    }

    fn app_without_model() -> axum::Router {
        create_app(AppState::new(Config::default()))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_word_gate_boundary() {
        let words_49 = vec!["woord"; 49].join(" ");
        let words_50 = vec!["woord"; 50].join(" ");
        assert!(!has_enough_text(&words_49));
        assert!(has_enough_text(&words_50));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_without_model()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert_eq!(body, "{\"status\":\"ok\"}");
    }

    #[tokio::test]
    async fn test_debug_env_reports_missing_key() {
        let response = app_without_model()
            .oneshot(
                Request::builder()
                    .uri("/debug-env")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("\"OPENAI_API_KEY_present\":false"));
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let response = app_without_model()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<form"));
    }

    #[tokio::test]
    async fn test_empty_url_flashes() {
        let response = app_without_model()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("url="))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Vul een URL in."));
    }

    #[tokio::test]
    async fn test_unreachable_url_flashes_too_little_text() {
        // Connection refused on the loopback yields no content, which the
        // handler reports the same way as an empty article.
        let response = app_without_model()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("url=http%3A%2F%2F127.0.0.1%3A1%2Fartikel"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Te weinig tekst gevonden"));
    }

    /// Serves one article page on an ephemeral loopback port.
    async fn spawn_fixture(html: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = axum::Router::new().route(
            "/artikel",
            axum::routing::get(move || async move { Html(html.to_string()) }),
        );
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/artikel")
    }

    #[tokio::test]
    async fn test_full_flow_with_mocked_model() {
        // Enough words to pass the gate, plus a quote signal so attribution
        // becomes mandatory.
        static ARTICLE: &str = "<html><body><article>\
            <p>PSV verliest van AZ, zegt de trainer na afloop van het duel in Eindhoven. \
            De ploeg uit Alkmaar was over negentig minuten duidelijk de betere ploeg en \
            kwam via een vroege goal op voorsprong, waarna de thuisploeg nauwelijks nog \
            iets terugdeed in het restant van de eerste helft.</p>\
            <p>Na rust hield de defensie moeiteloos stand en besliste de tweede treffer \
            het duel definitief, tot grote vreugde van de meegereisde supporters die hun \
            ploeg luidkeels bleven aanmoedigen tot het laatste fluitsignaal van de arbiter \
            klonk in een vrijwel leeggelopen stadion.</p>\
            </article></body></html>";

        let url = spawn_fixture(ARTICLE).await;
        let model = FixedModel {
            response: r#"{"title": "AZ wint van PSV", "body_paragraphs": ["AZ heeft overtuigend gewonnen van PSV.", "De trainer sprak na afloop van een verdiende zege."], "attribution_required": false, "attribution_line": ""}"#.to_string(),
        };
        let app = create_app(AppState::with_model(
            Config::default(),
            std::sync::Arc::new(model),
        ));

        let form = format!("url={}", url.replace(':', "%3A").replace('/', "%2F"));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("AZ wint van PSV"));
        // Quote vocabulary in the source forces the attribution clause into
        // the first paragraph.
        assert!(body.contains("in gesprek met"));
    }
}
