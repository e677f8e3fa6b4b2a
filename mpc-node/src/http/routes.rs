use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::{get, State};

use crate::app::service::LookupService;
use crate::http::model::api::Index;
use crate::http::response::SsrPage;
use crate::http::views;

/// The application root: a machine-readable metadata document.
#[get("/")]
pub async fn index(service: &State<LookupService>) -> Json<Index> {
    log::info!("Request for application metadata");
    Json(Index::new(service.app_name()))
}

/// Redirect to the record for a given designation.
///
/// Example request: `/search?designation=2011+1001+T-2`
#[get("/search?<designation>")]
pub async fn search(designation: &str, service: &State<LookupService>) -> Redirect {
    log::info!("Request for designation URL: {designation}");
    let decision = service.resolve(designation);
    log::info!("Redirecting to {} URL: {}", decision.kind(), decision.url());
    Redirect::temporary(decision.into_url())
}

/// Informational page shown for designations classified as synthetic.
#[get("/synthetic_object?<designation>")]
pub async fn synthetic_object(designation: &str) -> SsrPage {
    log::info!("Request for synthetic object page: {designation}");
    SsrPage(views::synthetic::SyntheticObjectPage(designation.to_string()))
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;

    use crate::cli::CliArgs;

    fn client() -> Client {
        let cli = CliArgs::parse_from(["mpc-node"]);
        Client::tracked(crate::build_rocket_with(cli)).expect("valid rocket instance")
    }

    #[test]
    fn index_returns_the_metadata_document() {
        let client = client();
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JSON));

        let body: serde_json::Value = response.into_json().expect("metadata document");
        assert_eq!(body["metadata"]["name"], "mpc-lookup");
        assert_eq!(body["metadata"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn search_redirects_spaced_designation_to_mpcorb() {
        let client = client();
        let response = client.get("/search?designation=2011%201001%20T-2").dispatch();
        assert_eq!(response.status(), Status::TemporaryRedirect);
        assert_eq!(
            response.headers().get_one("Location"),
            Some("https://www.minorplanetcenter.net/db_search/show_object?object_id=1001+T-2")
        );
    }

    #[test]
    fn search_redirects_spaceless_designation_to_synthetic_page() {
        let client = client();
        let response = client.get("/search?designation=2011%2012345").dispatch();
        assert_eq!(response.status(), Status::TemporaryRedirect);
        assert_eq!(
            response.headers().get_one("Location"),
            Some("/synthetic_object?designation=2011+12345")
        );
    }

    #[test]
    fn search_with_empty_designation_falls_through_to_synthetic() {
        let client = client();
        let response = client.get("/search?designation=").dispatch();
        assert_eq!(response.status(), Status::TemporaryRedirect);
        assert_eq!(
            response.headers().get_one("Location"),
            Some("/synthetic_object?designation=")
        );
    }

    #[test]
    fn search_without_designation_is_unprocessable() {
        let client = client();
        let response = client.get("/search").dispatch();
        assert_eq!(response.status(), Status::UnprocessableEntity);
    }

    #[test]
    fn synthetic_object_page_names_the_designation() {
        let client = client();
        let response = client.get("/synthetic_object?designation=12345").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));

        let body = response.into_string().expect("html body");
        assert!(body.contains("12345"));
        assert!(body.contains("synthetic object"));
    }

    #[test]
    fn mount_prefix_applies_to_routes_and_redirects() {
        let cli = CliArgs::parse_from(["mpc-node", "--path-prefix", "/mpc-lookup"]);
        let client = Client::tracked(crate::build_rocket_with(cli)).expect("valid rocket instance");

        let response = client.get("/mpc-lookup/search?designation=2011%2012345").dispatch();
        assert_eq!(response.status(), Status::TemporaryRedirect);
        assert_eq!(
            response.headers().get_one("Location"),
            Some("/mpc-lookup/synthetic_object?designation=2011+12345")
        );
    }
}
