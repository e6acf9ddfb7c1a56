pub mod api;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod portal;
pub mod registration;

pub mod data_structs {
    pub mod envelope;
    pub mod requests {
        pub mod login_request;
        pub mod register_request;
    }
    pub mod responses {
        pub mod course_record;
        pub mod token_response;
    }
}

pub const PORTAL_BASE_URL: &str = "https://portal.ut.edu.vn/api/v1/dkhp";
pub const TOKEN_SERVICE_URL: &str = "https://api.ngnsusinn.io.vn/get_token_uth.php";

/// Handed to every handler through actix app data. The reqwest client is the only
/// thing actually shared between requests; the base URLs are fixed addressing.
pub struct SharedResources {
    pub http: reqwest::Client,
    pub portal_base_url: String,
    pub token_service_url: String,
}

impl SharedResources {
    pub fn new() -> SharedResources {
        SharedResources {
            http: reqwest::Client::new(),
            portal_base_url: PORTAL_BASE_URL.to_string(),
            token_service_url: TOKEN_SERVICE_URL.to_string(),
        }
    }

    /// Lets the integration tests point the proxy at a stub portal.
    pub fn with_base_urls(portal_base_url: &str, token_service_url: &str) -> SharedResources {
        SharedResources {
            http: reqwest::Client::new(),
            portal_base_url: portal_base_url.to_string(),
            token_service_url: token_service_url.to_string(),
        }
    }
}

impl Clone for SharedResources {
    fn clone(&self) -> Self {
        return SharedResources {
            http: self.http.clone(),
            portal_base_url: self.portal_base_url.clone(),
            token_service_url: self.token_service_url.clone(),
        };
    }
}
