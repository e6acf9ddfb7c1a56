use std::collections::BTreeMap;

use actix_web::{delete, get, post, web, HttpRequest, HttpResponse, Responder, Scope};

use crate::auth;
use crate::catalog::CourseDataFetcher;
use crate::data_structs::requests::login_request::LoginRequest;
use crate::data_structs::requests::register_request::RegisterRequest;
use crate::data_structs::responses::token_response::TokenResponse;
use crate::error::ProxyError;
use crate::portal::PortalClient;
use crate::registration::RegistrationGateway;
use crate::SharedResources;

/// All proxy routes under /api, mounted by main and by the integration tests.
pub fn scope() -> Scope {
    web::scope("/api")
        .service(debug_ping)
        .service(login)
        .service(get_dots)
        .service(get_all_data)
        .service(register_classes)
        .service(get_registered)
        .service(cancel_registration)
}

#[get("/ping")]
async fn debug_ping() -> impl Responder {
    // just to test that the server is running
    "pong!"
}

/// Pulls the token out of an `Authorization: Bearer <token>` header. Anything
/// else is rejected here, before a single upstream call is made.
fn bearer_token(req: &HttpRequest) -> Result<String, ProxyError> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    match header.and_then(|value| value.strip_prefix("Bearer ")) {
        Some(token) => Ok(token.to_string()),
        None => Err(ProxyError::Unauthorized),
    }
}

#[post("/login")]
async fn login(
    data: web::Data<SharedResources>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ProxyError> {
    let credentials = payload.into_inner();
    let token =
        auth::fetch_token(data.get_ref(), &credentials.username, &credentials.password).await?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

#[get("/dots")]
async fn get_dots(
    data: web::Data<SharedResources>,
    req: HttpRequest,
) -> Result<HttpResponse, ProxyError> {
    let token = bearer_token(&req)?;
    let fetcher = CourseDataFetcher::new(PortalClient::new(data.get_ref(), token));
    let dots = fetcher.fetch_dots().await?;
    Ok(HttpResponse::Ok().json(dots))
}

#[get("/all_data/{dot_id}")]
async fn get_all_data(
    data: web::Data<SharedResources>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ProxyError> {
    let token = bearer_token(&req)?;
    let fetcher = CourseDataFetcher::new(PortalClient::new(data.get_ref(), token));
    let records = fetcher.fetch_all_data(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

#[post("/register")]
async fn register_classes(
    data: web::Data<SharedResources>,
    req: HttpRequest,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ProxyError> {
    let token = bearer_token(&req)?;
    let gateway = RegistrationGateway::new(PortalClient::new(data.get_ref(), token));

    // one upstream call per id, in request order; each outcome stands alone
    let mut results: BTreeMap<i64, bool> = BTreeMap::new();
    for class_id in payload.into_inner().class_ids {
        let registered = gateway.register_class(class_id).await;
        results.insert(class_id, registered);
    }
    Ok(HttpResponse::Ok().json(results))
}

#[get("/registered/{dot_id}")]
async fn get_registered(
    data: web::Data<SharedResources>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ProxyError> {
    let token = bearer_token(&req)?;
    let gateway = RegistrationGateway::new(PortalClient::new(data.get_ref(), token));
    let registered = gateway.fetch_registered_classes(path.into_inner()).await;
    Ok(HttpResponse::Ok().json(registered))
}

#[delete("/cancel/{reg_id}")]
async fn cancel_registration(
    data: web::Data<SharedResources>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ProxyError> {
    let token = bearer_token(&req)?;
    let gateway = RegistrationGateway::new(PortalClient::new(data.get_ref(), token));
    if !gateway.cancel_registered_class(path.into_inner()).await {
        return Err(ProxyError::CancelRejected);
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
