//! Translations
//!
//! Key -> string lookup for UI labels. Unknown keys render as the key.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.split(['-', '_']).next().unwrap_or_default() {
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("categories.all", "All"),
    ("nav.home", "Home"),
    ("nav.gallery", "Gallery"),
    ("nav.documents", "Documents"),
    ("nav.testimonials", "Success Stories"),
    ("nav.team", "Our Team"),
    ("nav.admin", "Admin"),
    ("status.loading", "Loading..."),
    ("status.empty", "Nothing here yet."),
    ("errors.fetch", "We couldn't load this content. Please try again later."),
    ("errors.validation", "Please check the form and try again."),
    ("errors.not_found", "Page not found"),
    ("featured.title", "Featured"),
    ("lightbox.close", "Close"),
    ("lightbox.previous", "Previous"),
    ("lightbox.next", "Next"),
    ("documents.download", "Download"),
    ("documents.pages", "pages"),
    ("documents.downloads", "downloads"),
    ("testimonials.impact", "Impact"),
    ("admin.gallery.title", "Manage Gallery"),
    ("admin.gallery.add", "Add photo"),
    ("admin.gallery.saved", "Photo saved"),
    ("admin.gallery.deleted", "Photo deleted"),
    ("admin.gallery.delete", "Delete"),
    ("form.title", "Title"),
    ("form.description", "Description"),
    ("form.category", "Category"),
    ("form.date", "Date"),
    ("form.url", "Image URL"),
    ("form.featured", "Featured"),
];

const ES: &[(&str, &str)] = &[
    ("categories.all", "Todos"),
    ("nav.home", "Inicio"),
    ("nav.gallery", "Galería"),
    ("nav.documents", "Documentos"),
    ("nav.testimonials", "Historias de éxito"),
    ("nav.team", "Nuestro equipo"),
    ("nav.admin", "Administración"),
    ("status.loading", "Cargando..."),
    ("status.empty", "Todavía no hay nada aquí."),
    ("errors.fetch", "No pudimos cargar este contenido. Inténtalo más tarde."),
    ("errors.validation", "Revisa el formulario e inténtalo de nuevo."),
    ("errors.not_found", "Página no encontrada"),
    ("featured.title", "Destacados"),
    ("lightbox.close", "Cerrar"),
    ("lightbox.previous", "Anterior"),
    ("lightbox.next", "Siguiente"),
    ("documents.download", "Descargar"),
    ("documents.pages", "páginas"),
    ("documents.downloads", "descargas"),
    ("testimonials.impact", "Impacto"),
];

/// Look up `key` for `locale`, falling back to English, then to the key
pub fn translate(locale: Locale, key: &str) -> String {
    let table = match locale {
        Locale::En => EN,
        Locale::Es => ES,
    };
    table
        .iter()
        .chain(EN.iter())
        .find(|(k, _)| *k == key)
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Translate with the locale from context
pub fn tr(key: &str) -> String {
    let locale = use_context::<Locale>().unwrap_or_default();
    translate(locale, key)
}

/// Locale of the browser, English when unknown
pub fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|code| Locale::from_code(&code))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(translate(Locale::En, "categories.all"), "All");
        assert_eq!(translate(Locale::Es, "categories.all"), "Todos");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(translate(Locale::Es, "admin.gallery.title"), "Manage Gallery");
        assert_eq!(translate(Locale::En, "nope.missing"), "nope.missing");
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("es-MX"), Locale::Es);
        assert_eq!(Locale::from_code("en_GB"), Locale::En);
        assert_eq!(Locale::from_code("de"), Locale::En);
        assert_eq!(Locale::Es.code(), "es");
    }
}
