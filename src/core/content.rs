//! Marketing copy for the SafeOil landing page
//!
//! Everything rendered on the page lives here as typed records so the view
//! components stay purely presentational.

use serde::Serialize;

/// Anchor of a page section, usable with in-page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub struct SectionId(&'static str);

impl SectionId {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// `#id` form for anchor hrefs
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

pub mod sections {
    use super::SectionId;

    pub const CRISIS: SectionId = SectionId("crisis");
    pub const SOLUTION: SectionId = SectionId("solution");
    pub const HOW_IT_WORKS: SectionId = SectionId("how-it-works");
    pub const DEMO: SectionId = SectionId("demo");
    pub const SIGNUP: SectionId = SectionId("signup");
}

pub const BRAND: &str = "SafeOil";

pub const TAGLINE: &str = "Revolutionary blockchain-powered oil authentication system protecting consumers from adulterated cooking oil";

pub const HERO_CTA: &str = "Join the Safety Revolution";

/// Headline number with caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatContent {
    pub number: &'static str,
    pub label: &'static str,
    /// Stagger before the card fades in once seen
    pub delay_ms: u32,
}

pub const STATS: [StatContent; 4] = [
    StatContent {
        number: "10.000+",
        label: "Tons of Adulterated Oil",
        delay_ms: 0,
    },
    StatContent {
        number: "8.200.000.000đ",
        label: "in Illegal Revenue",
        delay_ms: 200,
    },
    StatContent {
        number: "Millions",
        label: "Health Risks Created",
        delay_ms: 400,
    },
    StatContent {
        number: "Zero",
        label: "Consumer Protection",
        delay_ms: 600,
    },
];

pub const CRISIS_SUMMARY: &str = "Tens of thousands of tons of unrefined animal feed oil have been disguised as safe cooking oil, \
     reaching collective kitchens, restaurants, and food processing facilities across Vietnam. \
     The health consequences include liver damage, cardiovascular issues, and cancer risks.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureContent {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureContent; 4] = [
    FeatureContent {
        icon: "🔗",
        title: "Blockchain Traceability",
        description: "Every drop of oil tracked from source to shelf with immutable blockchain records",
    },
    FeatureContent {
        icon: "📱",
        title: "Instant Verification",
        description: "Scan QR codes with our mobile app for immediate authenticity verification",
    },
    FeatureContent {
        icon: "🤖",
        title: "AI Detection",
        description: "Advanced AI algorithms detect adulteration patterns and quality issues",
    },
    FeatureContent {
        icon: "👥",
        title: "Community Reports",
        description: "Crowdsourced safety reports from consumers and industry professionals",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContent {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [StepContent; 4] = [
    StepContent {
        number: 1,
        title: "Producer Registration",
        description: "Oil manufacturers register their products on our blockchain platform with complete supply chain data",
    },
    StepContent {
        number: 2,
        title: "QR Code Generation",
        description: "Each oil container receives a unique QR code linked to its blockchain record",
    },
    StepContent {
        number: 3,
        title: "Consumer Verification",
        description: "Customers scan the QR code to instantly verify authenticity and safety",
    },
    StepContent {
        number: 4,
        title: "AI Monitoring",
        description: "Continuous AI analysis detects anomalies and potential adulteration cases",
    },
];

/// Mock result shown on the scanner demo screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub status: &'static str,
    pub brand: &'static str,
    pub origin: &'static str,
    pub production_date: &'static str,
    pub certifications: &'static str,
}

impl ScanReport {
    /// Label/value rows in display order
    pub fn details(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Brand:", self.brand),
            ("Origin:", self.origin),
            ("Production:", self.production_date),
            ("Certifications:", self.certifications),
        ]
    }
}

pub const DEMO_SCAN: ScanReport = ScanReport {
    status: "✅ Verified Safe",
    brand: "Premium Oil Co.",
    origin: "An Giang Province",
    production_date: "15/08/2025",
    certifications: "ISO 22000, HACCP",
};

pub const PILOT_NOTE: &str = "Our pilot program starts in urban markets across major cities. \
     Download the app and be among the first to ensure your family's safety.";

pub const SIGNUP_NOTE: &str = "Be notified when the SafeOil app launches in your area. \
     Together, we can eliminate food fraud and protect public health.";

pub const CONTACT_EMAIL: &str = "info@safeoil.vn";
pub const CONTACT_PHONE: &str = "+84 123 456 789";

pub const COPYRIGHT: &str = "© 2025 SafeOil - Smart Certification System. Protecting consumers through blockchain technology.";

pub const DEFAULT_SITE_URL: &str = "https://safeoil.vn/";

pub const PAGE_TITLE: &str = "SafeOil - Smart Cooking Oil Certification";

#[derive(Debug, Serialize)]
struct ContactPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    email: &'static str,
    telephone: &'static str,
    #[serde(rename = "contactType")]
    contact_type: &'static str,
}

#[derive(Debug, Serialize)]
struct Organization<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    url: &'a str,
    #[serde(rename = "contactPoint")]
    contact_point: ContactPoint,
}

/// JSON-LD `Organization` record for search engines, pointing at `site_url`
pub fn structured_data(site_url: &str) -> String {
    let org = Organization {
        context: "https://schema.org",
        kind: "Organization",
        name: BRAND,
        description: TAGLINE,
        url: site_url,
        contact_point: ContactPoint {
            kind: "ContactPoint",
            email: CONTACT_EMAIL,
            telephone: CONTACT_PHONE,
            contact_type: "customer support",
        },
    };
    serde_json::to_string(&org).unwrap_or_default()
}
