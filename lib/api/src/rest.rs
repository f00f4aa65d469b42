use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use actix_cors::Cors;
use kindred_core::{Course, Engine, Recommendation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shown when the query is empty or whitespace-only.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a topic or learning goal.";

/// Shown when neither matching phase resolves the query.
pub const NO_MATCH_MESSAGE: &str = "No matching courses found. Try different keywords.";

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct MatchedCourse {
    pub name: String,
    pub url: String,
}

impl From<&Course> for MatchedCourse {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            url: course.url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub matched: Option<MatchedCourse>,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub name: String,
    pub url: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<Engine>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .route("/health", web::get().to(health))
                .route("/courses", web::get().to(list_courses))
                .route("/recommend", web::post().to(recommend))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

pub async fn health(engine: web::Data<Arc<Engine>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "courses": engine.catalog().len()
    })))
}

pub async fn list_courses(engine: web::Data<Arc<Engine>>) -> ActixResult<HttpResponse> {
    let courses: Vec<CourseSummary> = engine
        .catalog()
        .iter()
        .map(|course| CourseSummary {
            name: course.name.clone(),
            url: course.url.clone(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(courses))
}

/// The recommendation route. Handled outcomes are always HTTP 200 with an
/// `error` field carrying the user-facing message; the engine itself only
/// ever signals failure through an empty result.
pub async fn recommend(
    engine: web::Data<Arc<Engine>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let query = req.query.trim().to_string();

    if query.is_empty() {
        return Ok(HttpResponse::Ok().json(RecommendResponse {
            query,
            matched: None,
            recommendations: Vec::new(),
            error: Some(EMPTY_QUERY_MESSAGE.to_string()),
        }));
    }

    let response = match engine.resolve(&query) {
        Some(course) => {
            let recommendations = engine.recommend(course);
            RecommendResponse {
                matched: Some(MatchedCourse::from(course)),
                recommendations,
                error: None,
                query,
            }
        }
        None => RecommendResponse {
            query,
            matched: None,
            recommendations: Vec::new(),
            error: Some(NO_MATCH_MESSAGE.to_string()),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}
