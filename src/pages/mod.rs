//! Page rendering: the layout shell around each route's content.
//!
//! Pages that show backend data fetch it here; a failed fetch degrades to a
//! localized note and never fails the page.

mod content;
mod feed;
mod layout;

pub use feed::{Feed, FeedItem};
pub use layout::layout;

use crate::api::ApiClient;
use crate::forms::{BookingForm, ContactForm, Notice};
use crate::metrics::SiteMetrics;
use crate::routing::{PageKind, RouteEntry, RouteTree};
use maud::Markup;

/// State of the form embedded in a page, after a submit.
#[derive(Debug, Clone)]
pub enum FormState {
    Contact(ContactForm, Notice),
    Booking(BookingForm, Notice),
}

/// What a page needs besides its route.
pub struct PageContext<'a> {
    pub api: &'a ApiClient,
    pub tree: &'a RouteTree,
    /// Items requested for the news page
    pub news_limit: u32,
}

impl PageContext<'_> {
    /// Render a matched route. `form` carries the submitted values and the
    /// resulting notice when this render answers a POST.
    pub async fn render(&self, entry: RouteEntry, form: Option<FormState>) -> Markup {
        let language = self.tree.language;
        let strings = language.strings();

        let body = match entry.page {
            PageKind::Home => {
                let (news, reviews) = futures::join!(
                    self.api.news(language, None),
                    self.api.reviews(language, None)
                );
                content::home(
                    self.tree,
                    &Feed::from_result(news, "news"),
                    &Feed::from_result(reviews, "reviews"),
                )
            }
            PageKind::About => {
                let horses = Feed::from_result(self.api.horses().await, "horses");
                content::about(strings, &horses)
            }
            PageKind::Lessons => content::lessons(strings),
            PageKind::Camping => content::camping(strings),
            PageKind::Tours => {
                let booking = match &form {
                    Some(FormState::Booking(values, notice)) => values.render(language, Some(notice)),
                    _ => BookingForm::default().render(language, None),
                };
                content::tours(strings, booking)
            }
            PageKind::News => {
                let news = self.api.news(language, Some(self.news_limit)).await;
                content::news(strings, &Feed::from_result(news, "news"))
            }
            PageKind::Contact => match &form {
                Some(FormState::Contact(values, notice)) => values.render(language, Some(notice)),
                _ => ContactForm::default().render(language, None),
            },
        };

        SiteMetrics::global().record_page_view();
        layout(
            self.tree,
            Some(entry.page),
            entry.page.label(strings),
            body,
        )
    }

    /// Localized 404 page inside the layout.
    pub fn render_not_found(&self) -> Markup {
        SiteMetrics::global().record_page_view();
        layout(
            self.tree,
            None,
            self.tree.language.strings().not_found_heading,
            content::not_found(self.tree),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn api(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.uri(), Duration::from_secs(5)).expect("client")
    }

    fn entry(tree: &RouteTree, page: PageKind) -> RouteEntry {
        tree.entry_for(page).expect("page routed")
    }

    #[tokio::test]
    async fn test_home_fetches_news_and_reviews_with_default_limits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/news"))
            .and(query_param("lang", "en"))
            .and(query_param("limit", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "New foal"}])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/reviews"))
            .and(query_param("lang", "en"))
            .and(query_param("limit", "6"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server);
        let tree = RouteTree::for_language(Language::ENGLISH);
        let ctx = PageContext { api: &api, tree: &tree, news_limit: 10 };

        let html = ctx.render(entry(&tree, PageKind::Home), None).await.into_string();
        assert!(html.contains("New foal"));
        assert!(html.contains("What our guests say"));
        assert!(html.contains("This content is currently unavailable."));
    }

    #[tokio::test]
    async fn test_news_page_uses_configured_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/news"))
            .and(query_param("lang", "hu"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server);
        let tree = RouteTree::for_language(Language::HUNGARIAN);
        let ctx = PageContext { api: &api, tree: &tree, news_limit: 10 };

        let html = ctx.render(entry(&tree, PageKind::News), None).await.into_string();
        assert!(html.contains("Hírek (hamarosan)"));
    }

    #[tokio::test]
    async fn test_about_lists_horses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/horses"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"name": "Csillag", "description": "Gentle mare"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server);
        let tree = RouteTree::for_language(Language::HUNGARIAN);
        let ctx = PageContext { api: &api, tree: &tree, news_limit: 10 };

        let html = ctx.render(entry(&tree, PageKind::About), None).await.into_string();
        assert!(html.contains("Lovaink"));
        assert!(html.contains("Csillag"));
    }

    #[tokio::test]
    async fn test_tours_embeds_booking_form_with_notice() {
        let server = MockServer::start().await;
        let api = api(&server);
        let tree = RouteTree::for_language(Language::ROMANIAN);
        let ctx = PageContext { api: &api, tree: &tree, news_limit: 10 };

        let state = FormState::Booking(
            BookingForm::default(),
            Notice::Confirmation("Rezervare primită".to_string()),
        );
        let html = ctx
            .render(entry(&tree, PageKind::Tours), Some(state))
            .await
            .into_string();

        assert!(html.contains("Prezentarea turelor"));
        assert!(html.contains("Rezervare"));
        assert!(html.contains("Rezervare primită"));
    }

    #[tokio::test]
    async fn test_not_found_page() {
        let server = MockServer::start().await;
        let api = api(&server);
        let tree = RouteTree::for_language(Language::GERMAN);
        let ctx = PageContext { api: &api, tree: &tree, news_limit: 10 };

        let html = ctx.render_not_found().into_string();
        assert!(html.contains("Seite nicht gefunden"));
        assert!(html.contains("<html lang=\"de\">"));
    }
}
