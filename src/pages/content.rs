//! Page bodies. Each function returns the content placed inside the layout.

use crate::i18n::LanguageStrings;
use crate::pages::feed::Feed;
use crate::routing::{PageKind, RouteTree};
use maud::{html, Markup};

fn hero(strings: &LanguageStrings, cta_href: &str) -> Markup {
    html! {
        section class="hero rounded-2xl bg-cover bg-center text-white p-8 md:p-16 shadow-lg" {
            div class="rounded-xl p-6 md:p-10" {
                h1 class="text-3xl md:text-5xl font-bold mb-3" { (strings.hero_title) }
                p class="text-lg md:text-2xl mb-6 max-w-2xl" { (strings.hero_subtitle) }
                a href=(cta_href) class="cta inline-block bg-emerald-600 hover:bg-emerald-700 text-white px-5 py-3 rounded-md" {
                    (strings.hero_cta)
                }
            }
        }
    }
}

pub fn home(tree: &RouteTree, news: &Feed, reviews: &Feed) -> Markup {
    let strings = tree.language.strings();
    // Camps live on the about page where there is no camping page
    let camps_href = match tree.entry_for(PageKind::Camping) {
        Some(entry) => entry.path(tree.language),
        None => tree.href(PageKind::About),
    };
    let programs = [
        (strings.program_school, tree.href(PageKind::Lessons)),
        (strings.program_tours, tree.href(PageKind::Tours)),
        (strings.program_camps, camps_href),
    ];

    html! {
        div class="space-y-10" {
            (hero(strings, &tree.href(PageKind::Contact)))
            section class="programs" {
                h2 class="text-xl font-semibold mb-3" { (strings.programs_heading) }
                div class="grid md:grid-cols-3 gap-4" {
                    @for (title, href) in &programs {
                        a href=(href) class="p-5 rounded-xl bg-white shadow hover:shadow-md transition" {
                            div class="font-medium mb-1" { (title) }
                            div class="text-sm text-slate-600" { (strings.program_teaser) }
                        }
                    }
                }
            }
            @if !news.is_empty() {
                section class="latest-news" {
                    h2 class="text-xl font-semibold mb-3" {
                        a href=(tree.href(PageKind::News)) { (strings.latest_news_heading) }
                    }
                    (news.render(strings.content_unavailable, None))
                }
            }
            @if !reviews.is_empty() {
                section class="reviews" {
                    h2 class="text-xl font-semibold mb-3" { (strings.reviews_heading) }
                    (reviews.render(strings.content_unavailable, None))
                }
            }
        }
    }
}

/// A page with a heading and a single paragraph.
fn text_page(heading: &str, body: &str) -> Markup {
    html! {
        div class="space-y-6" {
            h1 class="text-2xl font-semibold" { (heading) }
            p { (body) }
        }
    }
}

pub fn about(strings: &LanguageStrings, horses: &Feed) -> Markup {
    html! {
        (text_page(strings.nav_about, strings.about_body))
        @if !horses.is_empty() {
            section class="horses mt-8" {
                h2 class="text-xl font-semibold mb-3" { (strings.horses_heading) }
                (horses.render(strings.content_unavailable, None))
            }
        }
    }
}

pub fn lessons(strings: &LanguageStrings) -> Markup {
    text_page(strings.nav_lessons, strings.lessons_body)
}

pub fn camping(strings: &LanguageStrings) -> Markup {
    text_page(strings.nav_camping, strings.camping_body)
}

/// Tours overview followed by the booking form.
pub fn tours(strings: &LanguageStrings, booking_form: Markup) -> Markup {
    html! {
        div class="space-y-6" {
            (text_page(strings.nav_tours, strings.tours_body))
            (booking_form)
        }
    }
}

pub fn news(strings: &LanguageStrings, feed: &Feed) -> Markup {
    html! {
        div class="space-y-6" {
            h1 class="text-2xl font-semibold" { (strings.nav_news) }
            (feed.render(strings.content_unavailable, Some(strings.news_empty)))
        }
    }
}

pub fn not_found(tree: &RouteTree) -> Markup {
    let strings = tree.language.strings();
    html! {
        div class="not-found space-y-4" {
            h1 class="text-2xl font-semibold" { (strings.not_found_heading) }
            p { (strings.not_found_body) }
            a href=(tree.language.root_path()) class="text-emerald-700" { (strings.back_home) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::pages::feed::FeedItem;

    fn no_items() -> Feed {
        Feed::Items(vec![])
    }

    #[test]
    fn test_home_hungarian_links() {
        let tree = RouteTree::for_language(Language::HUNGARIAN);
        let html = home(&tree, &no_items(), &no_items()).into_string();

        assert!(html.contains("Nálunk sosem unalmas az élet"));
        assert!(html.contains("href=\"/hu/kapcsolat\""));
        assert!(html.contains("href=\"/hu/oktatas\""));
        assert!(html.contains("href=\"/hu/turak\""));
        // Camps card points at the about page in Hungarian
        assert!(html.contains("href=\"/hu/rolunk\""));
        assert!(!html.contains("latest-news"));
    }

    #[test]
    fn test_home_international_camping_card() {
        let tree = RouteTree::for_language(Language::ENGLISH);
        let html = home(&tree, &no_items(), &no_items()).into_string();

        assert!(html.contains("Horse Riding &amp; Authentic Experience in Transylvania"));
        assert!(html.contains("href=\"/en/camping\""));
        assert!(html.contains("href=\"/en/contact\""));
    }

    #[test]
    fn test_home_with_news_and_reviews() {
        let tree = RouteTree::for_language(Language::GERMAN);
        let news = Feed::Items(vec![FeedItem {
            heading: Some("Frühlingscamp".to_string()),
            body: None,
        }]);
        let html = home(&tree, &news, &Feed::Unavailable).into_string();

        assert!(html.contains("Aktuelle Neuigkeiten"));
        assert!(html.contains("Frühlingscamp"));
        assert!(html.contains("Dieser Inhalt ist derzeit nicht verfügbar."));
    }

    #[test]
    fn test_news_page_empty_text() {
        let strings = Language::HUNGARIAN.strings();
        let html = news(strings, &no_items()).into_string();
        assert!(html.contains("Hírek (hamarosan)"));
    }

    #[test]
    fn test_not_found_links_home() {
        let tree = RouteTree::for_language(Language::ROMANIAN);
        let html = not_found(&tree).into_string();
        assert!(html.contains("Pagina nu a fost găsită"));
        assert!(html.contains("href=\"/ro\""));
    }
}
