use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use yaml_rust::YamlLoader;

use ut_registration_proxy::{api, SharedResources};

fn load_bind_address() -> (String, u16) {
    // config.yml is optional; the defaults suit the current deployment
    let raw = match std::fs::read_to_string("config.yml") {
        Ok(raw) => raw,
        Err(_) => return ("0.0.0.0".to_string(), 8080),
    };
    let config = match YamlLoader::load_from_str(&raw) {
        Ok(config) => config,
        Err(_) => panic!("Error loading yml file"),
    };
    let http = &config[0]["http"];
    let host = http["host"].as_str().unwrap_or("0.0.0.0").to_string();
    let port = http["port"].as_i64().unwrap_or(8080) as u16;
    (host, port)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let (host, port) = load_bind_address();
    let shared_resources = SharedResources::new();

    println!("Starting HTTP server on {}:{}...", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(shared_resources.clone()))
            .wrap(Logger::new("%a \"%r\" %s %b \"%{User-Agent}i\" %T"))
            // the web client is served elsewhere; any origin may call this proxy
            .wrap(Cors::permissive())
            .service(api::scope())
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
