//! Fixed site content: the six services, navigation links and the business
//! contact details. Everything here is `'static`; nothing is added, removed
//! or edited at runtime.

pub struct ServiceEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        icon: "🔥",
        title: "Boiler Installations",
        description: "Installing a new central heating system with high efficiency condensing boiler system controls will save you money on your annual heating bills.",
        image: "https://images.unsplash.com/photo-1610312973684-e47446aa260b",
        features: &["High Efficiency", "Money Saving", "Professional Installation"],
    },
    ServiceEntry {
        icon: "⚙️",
        title: "Power Flushing",
        description: "Professional power flushing services to improve your heating system efficiency and extend the life of your boiler.",
        image: "https://images.unsplash.com/photo-1706206140285-fd36d93aaa83",
        features: &["System Cleaning", "Efficiency Boost", "Extends Boiler Life"],
    },
    ServiceEntry {
        icon: "🔧",
        title: "Boiler Servicing",
        description: "Regular boiler servicing to ensure your heating system runs safely and efficiently all year round.",
        image: "https://images.unsplash.com/photo-1555020367-cfc90503032f",
        features: &["Safety Check", "Efficiency Test", "Annual Service"],
    },
    ServiceEntry {
        icon: "🛡️",
        title: "Boiler Repairs",
        description: "Quick and reliable boiler repair services to get your heating system back up and running.",
        image: "https://images.unsplash.com/photo-1615625745497-0edd438803ef",
        features: &["24/7 Emergency", "Quick Response", "Reliable Service"],
    },
    ServiceEntry {
        icon: "⚙️",
        title: "Radiator Installations",
        description: "Professional radiator installation and replacement services for optimal heating performance.",
        image: "https://images.unsplash.com/photo-1558211583-ecfebb03748b",
        features: &["New Installations", "Replacements", "Optimal Performance"],
    },
    ServiceEntry {
        icon: "🏅",
        title: "Preferred Installer",
        description: "Worcester, Vaillant and Ideal Preferred Installer with extended warranties and professional service.",
        image: "https://images.unsplash.com/photo-1555020367-cfc90503032f",
        features: &["Extended Warranties", "Certified Installation", "Brand Approved"],
    },
];

/// In-page navigation labels, in header order. Each one targets the section
/// anchor matching its lowercase form.
pub const NAV_LABELS: &[&str] = &["Home", "About", "Services", "Contact"];

pub fn nav_href(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

pub const COMPANY_NAME: &str = "Facey Plumbing";
pub const COMPANY_TAGLINE: &str = "& Heating Specialists";

pub const PHONE: &str = "07940765792";
pub const EMAIL: &str = "info@faceyplumbing.net";
pub const SERVICE_AREA: &str = "Greenfield, MA and surrounding areas";

pub const HOURS: &[&str] = &[
    "Monday - Friday: 8:00 AM - 4:00 PM",
    "Saturday - Sunday: Closed",
];
pub const EMERGENCY_NOTE: &str = "Emergency service available 24/7";

/// Footer quick-link labels. These use the singular forms.
pub const FOOTER_SERVICES: &[&str] = &[
    "Boiler Installation",
    "Power Flushing",
    "Boiler Servicing",
    "Boiler Repairs",
    "Radiator Installation",
];

/// Inline SVG shown when an external photograph fails to load, so a broken
/// image never breaks the card layout.
pub const IMAGE_FALLBACK: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 400 300'%3E%3Crect width='400' height='300' fill='%23e2e8f0'/%3E%3Ctext x='200' y='150' text-anchor='middle' fill='%2394a3b8' font-family='sans-serif' font-size='20'%3EFacey Plumbing%3C/text%3E%3C/svg%3E";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_services_in_catalog_order() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Boiler Installations",
                "Power Flushing",
                "Boiler Servicing",
                "Boiler Repairs",
                "Radiator Installations",
                "Preferred Installer",
            ]
        );
    }

    #[test]
    fn every_service_is_fully_described() {
        for service in SERVICES {
            assert!(!service.description.is_empty(), "{} has no description", service.title);
            assert!(service.image.starts_with("https://"), "{} has no photo", service.title);
            assert!(
                !service.features.is_empty() && service.features.len() <= 3,
                "{} should list 1-3 features",
                service.title
            );
        }
    }

    #[test]
    fn nav_labels_map_to_lowercase_anchors() {
        assert_eq!(NAV_LABELS.len(), 4);
        for label in NAV_LABELS {
            assert_eq!(nav_href(label), format!("#{}", label.to_lowercase()));
        }
        assert_eq!(nav_href("Home"), "#home");
        assert_eq!(nav_href("About"), "#about");
        assert_eq!(nav_href("Services"), "#services");
        assert_eq!(nav_href("Contact"), "#contact");
    }
}
