use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio CMS content API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "public": ["/api/v1/experiences", "/api/v1/projects", "/api/v1/skills"],
        "admin": "/api/v1/admin"
    }))
}
