use crate::i18n::{Language, SITE_NAME};
use crate::routing::{switcher_links, PageKind, RouteTree};
use maud::{html, Markup, DOCTYPE};

/// Language switcher: one link per language, each to that language's root.
fn language_switcher(current: Language) -> Markup {
    html! {
        nav class="lang-switcher flex gap-2" aria-label=(current.strings().language_switcher) {
            @for (language, href) in switcher_links() {
                @if language == current {
                    a href=(href) hreflang=(language.code()) lang=(language.code()) aria-current="true"
                        title=(language.native_name())
                        class="px-2 py-1 rounded text-sm bg-emerald-600 text-white" {
                        (language.code().to_uppercase())
                    }
                } @else {
                    a href=(href) hreflang=(language.code()) lang=(language.code())
                        title=(language.native_name())
                        class="px-2 py-1 rounded text-sm bg-emerald-100 hover:bg-emerald-200" {
                        (language.code().to_uppercase())
                    }
                }
            }
        }
    }
}

fn navigation(tree: &RouteTree, active: Option<PageKind>) -> Markup {
    html! {
        nav class="main-nav flex items-center gap-4" {
            @for item in tree.nav_items() {
                @if Some(item.page) == active {
                    a href=(item.href) aria-current="page" class="text-emerald-700 text-sm" { (item.label) }
                } @else {
                    a href=(item.href) class="text-slate-700 hover:text-emerald-700 text-sm" { (item.label) }
                }
            }
        }
    }
}

/// Full HTML document: switcher, header with navigation, the page content
/// and footer.
pub fn layout(tree: &RouteTree, active: Option<PageKind>, title: &str, content: Markup) -> Markup {
    let language = tree.language;
    let strings = language.strings();

    html! {
        (DOCTYPE)
        html lang=(language.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                @for (alternate, href) in switcher_links() {
                    link rel="alternate" hreflang=(alternate.code()) href=(href);
                }
            }
            body class="min-h-screen bg-emerald-50 text-slate-800" {
                div class="max-w-6xl mx-auto px-4 pt-4 flex justify-end" {
                    (language_switcher(language))
                }
                header class="sticky top-0 z-50 backdrop-blur bg-white/70 border-b border-slate-200" {
                    div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between" {
                        a href=(language.root_path()) class="brand font-semibold text-slate-800" { (SITE_NAME) }
                        (navigation(tree, active))
                    }
                }
                main class="max-w-6xl mx-auto px-4 py-8" {
                    (content)
                }
                footer class="border-t border-slate-200 py-6 text-center text-sm text-slate-600" {
                    (strings.footer)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(language: Language, active: Option<PageKind>) -> String {
        let tree = RouteTree::for_language(language);
        layout(&tree, active, "Title", html! { p { "body" } }).into_string()
    }

    #[test]
    fn test_document_language_and_title() {
        let html = render(Language::GERMAN, None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"de\">"));
        assert!(html.contains("<title>Title | Táltos Lovasudvar</title>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_switcher_links_to_language_roots() {
        let html = render(Language::ENGLISH, Some(PageKind::Contact));
        for root in ["/hu", "/en", "/de", "/ro"] {
            assert!(html.contains(&format!("href=\"{}\"", root)), "missing {}", root);
        }
        // Switching language never keeps the current sub-page
        assert!(!html.contains("href=\"/hu/contact\""));
        assert!(!html.contains("href=\"/de/contact\""));
    }

    #[test]
    fn test_active_page_marked() {
        let html = render(Language::HUNGARIAN, Some(PageKind::News));
        assert!(html.contains("href=\"/hu/hirek\" aria-current=\"page\""));
    }

    #[test]
    fn test_footer() {
        assert!(render(Language::ROMANIAN, None).contains("© Táltos Lovasudvar"));
    }
}
