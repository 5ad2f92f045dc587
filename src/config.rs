/// Recipient used by the contact form unless `AARYAVIEW_CONTACT` is set at build time.
pub const DEFAULT_CONTACT_ADDRESS: &str = "hello@example.com";

pub const GALLERY_IMAGES: [&str; 5] = [
    "/images/1.jpg",
    "/images/2.jpg",
    "/images/3.jpg",
    "/images/4.jpg",
    "/images/5.jpg",
];

/// Static facts about the site, provided once to the component tree as context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub owner: &'static str,
    pub copyright_holder: &'static str,
    pub contact_address: &'static str,
    /// `localStorage` key holding the persisted theme.
    pub theme_key: &'static str,
    pub gallery: &'static [&'static str],
    pub gallery_columns: usize,
    pub gallery_stagger_secs: u32,
}

impl SiteConfig {
    /// CSS `animation-delay` for the given gallery column.
    pub fn column_delay(&self, col: usize) -> String {
        format!("{}s", col as u32 * self.gallery_stagger_secs)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Aaryaview",
            owner: "Dheeraj Chand",
            copyright_holder: "Revanth Reddy",
            contact_address: match option_env!("AARYAVIEW_CONTACT") {
                Some(addr) => addr,
                None => DEFAULT_CONTACT_ADDRESS,
            },
            theme_key: crate::theme::THEME_STORAGE_KEY,
            gallery: &GALLERY_IMAGES,
            gallery_columns: 3,
            gallery_stagger_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gallery_lists_five_images_in_order() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery.len(), 5);
        assert_eq!(config.gallery[0], "/images/1.jpg");
        assert_eq!(config.gallery[4], "/images/5.jpg");
    }

    #[test]
    fn theme_key_is_plain_theme() {
        assert_eq!(SiteConfig::default().theme_key, "theme");
    }

    #[test]
    fn column_delay_staggers_by_five_seconds() {
        let config = SiteConfig::default();
        let delays = (0..config.gallery_columns)
            .map(|c| config.column_delay(c))
            .collect::<Vec<_>>();
        assert_eq!(delays, vec!["0s", "5s", "10s"]);
    }
}
