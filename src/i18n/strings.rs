/// All localized user-facing strings for a language
///
/// Strings are stored raw; maud escapes them when rendering.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_lessons: &'static str,
    pub nav_tours: &'static str,
    /// Only shown in the international route tree
    pub nav_camping: &'static str,
    pub nav_news: &'static str,
    pub nav_contact: &'static str,

    /// Accessible label of the language switcher
    pub language_switcher: &'static str,

    // ==================== Home Page ====================
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub programs_heading: &'static str,
    pub program_school: &'static str,
    pub program_tours: &'static str,
    pub program_camps: &'static str,
    /// Teaser line under each program card
    pub program_teaser: &'static str,
    pub latest_news_heading: &'static str,
    pub reviews_heading: &'static str,

    // ==================== Content Pages ====================
    pub about_body: &'static str,
    pub horses_heading: &'static str,
    pub lessons_body: &'static str,
    pub tours_body: &'static str,
    pub camping_body: &'static str,
    /// Shown on the news page when the backend returns no items
    pub news_empty: &'static str,
    /// Shown in place of a section whose backend fetch failed
    pub content_unavailable: &'static str,

    // ==================== Forms ====================
    pub contact_heading: &'static str,
    pub booking_heading: &'static str,
    pub label_name: &'static str,
    pub label_email: &'static str,
    pub label_subject: &'static str,
    pub label_message: &'static str,
    pub label_date: &'static str,
    pub label_group_size: &'static str,
    pub label_program: &'static str,
    pub label_notes: &'static str,
    pub send_button: &'static str,

    /// Confirmation when the backend response carries no message
    pub contact_confirmation: &'static str,

    /// Confirmation when the backend response carries no message
    pub booking_confirmation: &'static str,

    /// Shown when the backend rejects or fails a submission
    pub submission_failed: &'static str,

    /// Placeholders: {field}
    pub validation_required: &'static str,
    pub validation_email: &'static str,
    pub validation_date: &'static str,
    pub validation_group_size: &'static str,

    // ==================== Other ====================
    pub not_found_heading: &'static str,
    pub not_found_body: &'static str,
    pub back_home: &'static str,
    pub footer: &'static str,
}

/// Name of the business; identical in every language
pub const SITE_NAME: &str = "Táltos Lovasudvar";

// ==================== Hungarian Strings ====================

/// Hungarian language strings (default language)
pub const HUNGARIAN_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Főoldal",
    nav_about: "Rólunk",
    nav_lessons: "Lovas oktatás",
    nav_tours: "Túrák",
    nav_camping: "Kemping",
    nav_news: "Hírek",
    nav_contact: "Kapcsolat",
    language_switcher: "Nyelvválasztó",

    hero_title: "Nálunk sosem unalmas az élet",
    hero_subtitle: "Lovaglás, természet, közösség. Kezdőket is örömmel várunk.",
    hero_cta: "Jöhet a kaland?",
    programs_heading: "Programok",
    program_school: "Lovasiskola",
    program_tours: "Túrák",
    program_camps: "Táborok",
    program_teaser: "Fedezd fel!",
    latest_news_heading: "Legfrissebb hírek",
    reviews_heading: "Vendégeink mondták",

    about_body: "Rólunk oldal (tartalom készül)",
    horses_heading: "Lovaink",
    lessons_body: "Lovas oktatás (tartalom készül)",
    tours_body: "Túrák (1 órától 5-7 napig)",
    camping_body: "Kemping információk",
    news_empty: "Hírek (hamarosan)",
    content_unavailable: "A tartalom jelenleg nem érhető el.",

    contact_heading: "Kapcsolat",
    booking_heading: "Foglalás",
    label_name: "Név",
    label_email: "Email",
    label_subject: "Tárgy",
    label_message: "Üzenet",
    label_date: "Dátum",
    label_group_size: "Létszám",
    label_program: "Program leírás",
    label_notes: "Megjegyzés",
    send_button: "Küldés",

    contact_confirmation: "Köszönjük! 48 órán belül válaszolunk.",
    booking_confirmation: "Köszönjük a foglalást! Hamarosan jelentkezünk.",
    submission_failed: "Az üzenet elküldése nem sikerült. Kérjük, próbáld újra később.",

    validation_required: "Kérjük, töltsd ki ezt a mezőt: {field}",
    validation_email: "Kérjük, érvényes email címet adj meg.",
    validation_date: "Kérjük, érvényes dátumot adj meg (ÉÉÉÉ-HH-NN).",
    validation_group_size: "A létszámnak legalább 1-nek kell lennie.",

    not_found_heading: "Az oldal nem található",
    not_found_body: "A keresett oldal nem létezik.",
    back_home: "Vissza a főoldalra",
    footer: "© Táltos Lovasudvar",
};

// ==================== English Strings ====================

/// English language strings (international site)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Home",
    nav_about: "About",
    nav_lessons: "Riding Lessons",
    nav_tours: "Tours",
    nav_camping: "Camping",
    nav_news: "News",
    nav_contact: "Contact",
    language_switcher: "Language",

    hero_title: "Horse Riding & Authentic Experience in Transylvania",
    hero_subtitle: "Ride through wild landscapes, meet our kind horses, feel at home with our hospitality.",
    hero_cta: "Start your ride",
    programs_heading: "Programs",
    program_school: "Riding school",
    program_tours: "Tours",
    program_camps: "Camps",
    program_teaser: "Discover!",
    latest_news_heading: "Latest news",
    reviews_heading: "What our guests say",

    about_body: "About page (coming soon)",
    horses_heading: "Our horses",
    lessons_body: "Riding lessons (coming soon)",
    tours_body: "Tours overview",
    camping_body: "Camping info (only international)",
    news_empty: "News (coming soon)",
    content_unavailable: "This content is currently unavailable.",

    contact_heading: "Contact",
    booking_heading: "Booking",
    label_name: "Name",
    label_email: "Email",
    label_subject: "Subject",
    label_message: "Message",
    label_date: "Date",
    label_group_size: "Group size",
    label_program: "Program description",
    label_notes: "Notes",
    send_button: "Send",

    contact_confirmation: "Thank you! We will reply within 48 hours.",
    booking_confirmation: "Thank you for your booking! We will be in touch soon.",
    submission_failed: "We could not send your request. Please try again later.",

    validation_required: "Please fill in this field: {field}",
    validation_email: "Please enter a valid email address.",
    validation_date: "Please enter a valid date (YYYY-MM-DD).",
    validation_group_size: "Group size must be at least 1.",

    not_found_heading: "Page not found",
    not_found_body: "The page you are looking for does not exist.",
    back_home: "Back to the home page",
    footer: "© Táltos Lovasudvar",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Startseite",
    nav_about: "Über uns",
    nav_lessons: "Reitunterricht",
    nav_tours: "Touren",
    nav_camping: "Camping",
    nav_news: "Neuigkeiten",
    nav_contact: "Kontakt",
    language_switcher: "Sprache",

    hero_title: "Reiten & authentische Erlebnisse in Siebenbürgen",
    hero_subtitle: "Reite durch wilde Landschaften, lerne unsere sanften Pferde kennen und fühle dich bei uns wie zu Hause.",
    hero_cta: "Dein Ritt beginnt hier",
    programs_heading: "Programme",
    program_school: "Reitschule",
    program_tours: "Touren",
    program_camps: "Camps",
    program_teaser: "Entdecken!",
    latest_news_heading: "Aktuelle Neuigkeiten",
    reviews_heading: "Das sagen unsere Gäste",

    about_body: "Über uns (Inhalt folgt)",
    horses_heading: "Unsere Pferde",
    lessons_body: "Reitunterricht (Inhalt folgt)",
    tours_body: "Tourenübersicht",
    camping_body: "Camping-Informationen (nur international)",
    news_empty: "Neuigkeiten (demnächst)",
    content_unavailable: "Dieser Inhalt ist derzeit nicht verfügbar.",

    contact_heading: "Kontakt",
    booking_heading: "Buchung",
    label_name: "Name",
    label_email: "E-Mail",
    label_subject: "Betreff",
    label_message: "Nachricht",
    label_date: "Datum",
    label_group_size: "Gruppengröße",
    label_program: "Programmbeschreibung",
    label_notes: "Anmerkungen",
    send_button: "Senden",

    contact_confirmation: "Vielen Dank! Wir antworten innerhalb von 48 Stunden.",
    booking_confirmation: "Vielen Dank für Ihre Buchung! Wir melden uns in Kürze.",
    submission_failed: "Ihre Anfrage konnte nicht gesendet werden. Bitte versuchen Sie es später erneut.",

    validation_required: "Bitte füllen Sie dieses Feld aus: {field}",
    validation_email: "Bitte geben Sie eine gültige E-Mail-Adresse ein.",
    validation_date: "Bitte geben Sie ein gültiges Datum ein (JJJJ-MM-TT).",
    validation_group_size: "Die Gruppengröße muss mindestens 1 betragen.",

    not_found_heading: "Seite nicht gefunden",
    not_found_body: "Die gesuchte Seite existiert nicht.",
    back_home: "Zurück zur Startseite",
    footer: "© Táltos Lovasudvar",
};

// ==================== Romanian Strings ====================

pub const ROMANIAN_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Acasă",
    nav_about: "Despre noi",
    nav_lessons: "Lecții de călărie",
    nav_tours: "Ture",
    nav_camping: "Camping",
    nav_news: "Noutăți",
    nav_contact: "Contact",
    language_switcher: "Limbă",

    hero_title: "Călărie și experiențe autentice în Transilvania",
    hero_subtitle: "Călărește prin peisaje sălbatice, cunoaște-ne caii blânzi și simte-te ca acasă datorită ospitalității noastre.",
    hero_cta: "Începe aventura",
    programs_heading: "Programe",
    program_school: "Școală de călărie",
    program_tours: "Ture",
    program_camps: "Tabere",
    program_teaser: "Descoperă!",
    latest_news_heading: "Ultimele noutăți",
    reviews_heading: "Ce spun oaspeții noștri",

    about_body: "Despre noi (conținut în curând)",
    horses_heading: "Caii noștri",
    lessons_body: "Lecții de călărie (conținut în curând)",
    tours_body: "Prezentarea turelor",
    camping_body: "Informații camping (doar internațional)",
    news_empty: "Noutăți (în curând)",
    content_unavailable: "Acest conținut nu este disponibil momentan.",

    contact_heading: "Contact",
    booking_heading: "Rezervare",
    label_name: "Nume",
    label_email: "Email",
    label_subject: "Subiect",
    label_message: "Mesaj",
    label_date: "Data",
    label_group_size: "Număr de persoane",
    label_program: "Descrierea programului",
    label_notes: "Observații",
    send_button: "Trimite",

    contact_confirmation: "Mulțumim! Vă răspundem în 48 de ore.",
    booking_confirmation: "Mulțumim pentru rezervare! Vă contactăm în curând.",
    submission_failed: "Cererea nu a putut fi trimisă. Vă rugăm să încercați mai târziu.",

    validation_required: "Vă rugăm să completați acest câmp: {field}",
    validation_email: "Vă rugăm să introduceți o adresă de email validă.",
    validation_date: "Vă rugăm să introduceți o dată validă (AAAA-LL-ZZ).",
    validation_group_size: "Numărul de persoane trebuie să fie cel puțin 1.",

    not_found_heading: "Pagina nu a fost găsită",
    not_found_body: "Pagina căutată nu există.",
    back_home: "Înapoi la pagina principală",
    footer: "© Táltos Lovasudvar",
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&LanguageStrings; 4] = [
        &HUNGARIAN_STRINGS,
        &ENGLISH_STRINGS,
        &GERMAN_STRINGS,
        &ROMANIAN_STRINGS,
    ];

    // ==================== Hungarian Strings Tests ====================

    #[test]
    fn test_hungarian_nav_labels() {
        assert_eq!(HUNGARIAN_STRINGS.nav_home, "Főoldal");
        assert_eq!(HUNGARIAN_STRINGS.nav_about, "Rólunk");
        assert_eq!(HUNGARIAN_STRINGS.nav_lessons, "Lovas oktatás");
        assert_eq!(HUNGARIAN_STRINGS.nav_tours, "Túrák");
        assert_eq!(HUNGARIAN_STRINGS.nav_news, "Hírek");
        assert_eq!(HUNGARIAN_STRINGS.nav_contact, "Kapcsolat");
    }

    #[test]
    fn test_hungarian_default_contact_confirmation() {
        assert_eq!(
            HUNGARIAN_STRINGS.contact_confirmation,
            "Köszönjük! 48 órán belül válaszolunk."
        );
    }

    // ==================== English Strings Tests ====================

    #[test]
    fn test_english_nav_labels() {
        assert_eq!(ENGLISH_STRINGS.nav_lessons, "Riding Lessons");
        assert_eq!(ENGLISH_STRINGS.nav_camping, "Camping");
    }

    // ==================== Completeness Tests ====================

    #[test]
    fn test_no_empty_strings() {
        for strings in ALL {
            let values = [
                strings.nav_home,
                strings.nav_about,
                strings.nav_lessons,
                strings.nav_tours,
                strings.nav_camping,
                strings.nav_news,
                strings.nav_contact,
                strings.hero_title,
                strings.hero_cta,
                strings.contact_heading,
                strings.booking_heading,
                strings.send_button,
                strings.contact_confirmation,
                strings.booking_confirmation,
                strings.submission_failed,
                strings.not_found_heading,
                strings.footer,
            ];
            for value in values {
                assert!(!value.is_empty(), "empty string in {:?}", strings.nav_home);
            }
        }
    }

    #[test]
    fn test_required_placeholder_present() {
        for strings in ALL {
            assert!(strings.validation_required.contains("{field}"));
        }
    }

    #[test]
    fn test_footer_names_business() {
        for strings in ALL {
            assert!(strings.footer.contains(SITE_NAME));
        }
    }
}
