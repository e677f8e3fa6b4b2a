use dioxus::prelude::Element;
use rocket::Request;
use rocket::response::content::RawHtml;
use rocket::response::{self, Responder};

pub struct SsrPage(pub Element);

impl<'r> Responder<'r, 'static> for SsrPage {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let html = dioxus_ssr::render_element(self.0);
        let body = RawHtml(super::views::html_page(html));
        body.respond_to(req)
    }
}
