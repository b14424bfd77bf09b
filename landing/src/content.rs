//! Static content tables: strengths, services, process steps and navigation.
//!
//! Every lookup is keyed by a closed enum, so the views can never ask for
//! content that does not exist.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

// ============================================================================
// Anchors
// ============================================================================

/// Scroll targets on the page. Each section renders with `id=anchor.id()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    QuoteEstimator,
    StrengthsDashboard,
    ServicesView,
    ProcessFlow,
    ContactUs,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::QuoteEstimator,
        Anchor::StrengthsDashboard,
        Anchor::ServicesView,
        Anchor::ProcessFlow,
        Anchor::ContactUs,
    ];

    /// DOM id of the section.
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::QuoteEstimator => "quote-estimator",
            Anchor::StrengthsDashboard => "strengths-dashboard",
            Anchor::ServicesView => "services-view",
            Anchor::ProcessFlow => "process-flow",
            Anchor::ContactUs => "contact-us",
        }
    }

    /// `href` value for plain-link fallback (`#quote-estimator`).
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Strengths
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthKey {
    Regional,
    Quality,
    Tech,
}

impl StrengthKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            StrengthKey::Regional => "regional",
            StrengthKey::Quality => "quality",
            StrengthKey::Tech => "tech",
        }
    }
}

/// One card in the strengths dashboard.
#[derive(Debug, PartialEq, Eq)]
pub struct StrengthEntry {
    pub key: StrengthKey,
    pub title: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

pub const STRENGTHS: &[StrengthEntry] = &[
    StrengthEntry {
        key: StrengthKey::Regional,
        title: "GCC Regional Mastery",
        icon: "🌍",
        summary: "Deep, localized knowledge of customs regulations, infrastructure, and delivery networks across the Kingdom of Saudi Arabia, UAE, and the entire GCC.",
        detail: "Our in-house compliance teams and established relationships with regional authorities ensure rapid customs clearance and minimize delays, giving you a competitive edge in one of the world's fastest-growing markets. We turn complexity into opportunity.",
    },
    StrengthEntry {
        key: StrengthKey::Quality,
        title: "Unwavering Quality",
        icon: "🛡️",
        summary: "Adherence to stringent international and regional compliance standards, ensuring every shipment and storage unit meets the highest safety and reliability criteria.",
        detail: "We are committed to full ISO 9001 quality management principles. This focus on process excellence means less shrinkage, higher security, and demonstrable reliability in our warehousing and transport operations, protecting your valuable assets.",
    },
    StrengthEntry {
        key: StrengthKey::Tech,
        title: "Integrated Technology",
        icon: "⚙️",
        summary: "Leveraging advanced Warehouse Management Systems (WMS) and real-time GPS tracking for complete visibility and inventory control from origin to final destination.",
        detail: "Our clients get secure, 24/7 access to their inventory and shipment tracking via a custom portal. Automated reporting and predictive analytics allow for proactive decision-making, transforming logistics data into operational intelligence.",
    },
];

// ============================================================================
// Services
// ============================================================================

/// Service tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServiceKey {
    #[default]
    Warehousing,
    Freight,
    Vas,
}

impl ServiceKey {
    pub const ALL: [ServiceKey; 3] = [ServiceKey::Warehousing, ServiceKey::Freight, ServiceKey::Vas];

    /// Stable string form, also used as the `<option value>` in the quote form.
    pub const fn as_str(self) -> &'static str {
        match self {
            ServiceKey::Warehousing => "warehousing",
            ServiceKey::Freight => "freight",
            ServiceKey::Vas => "vas",
        }
    }

    pub fn entry(self) -> &'static ServiceEntry {
        match self {
            ServiceKey::Warehousing => &WAREHOUSING,
            ServiceKey::Freight => &FREIGHT,
            ServiceKey::Vas => &VAS,
        }
    }

    /// Tab caption: first word of the headline plus a per-service noun.
    pub fn tab_label(self) -> String {
        let lead = self.entry().headline.split(' ').next().unwrap_or_default();
        let noun = match self {
            ServiceKey::Warehousing => "Storage",
            ServiceKey::Freight => "Forwarding",
            ServiceKey::Vas => "Services",
        };
        format!("{lead} & {noun}")
    }

    /// Ending of the "Service Focus" sentence shown beside the tab content.
    pub const fn focus(self) -> &'static str {
        match self {
            ServiceKey::Warehousing => "inventory security and supply chain flexibility",
            ServiceKey::Freight => "global movement and customs compliance",
            ServiceKey::Vas => "post-delivery and product preparation needs",
        }
    }

    /// Label in the quote form's service-type dropdown.
    pub const fn quote_option(self) -> &'static str {
        match self {
            ServiceKey::Warehousing => "Warehousing & Storage",
            ServiceKey::Freight => "Freight Forwarding (Air/Sea)",
            ServiceKey::Vas => "Value-Added Services",
        }
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKey {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SiteError::UnknownService(s.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub headline: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
    pub cta: &'static str,
    pub image: &'static str,
}

const WAREHOUSING: ServiceEntry = ServiceEntry {
    headline: "State-of-the-Art Secure Storage",
    description: "From ambient to temperature-controlled environments, our modern facilities offer flexible, scalable, and secure storage solutions supported by precise inventory management and cross-docking capabilities.",
    bullets: &[
        "High-Security Inventory Management",
        "Flexible Short & Long-Term Leases",
        "Efficient Cross-Docking",
    ],
    cta: "Learn About Warehousing",
    image: "https://placehold.co/800x450/4f46e5/ffffff/png?text=Secure+Warehouse+Storage",
};

const FREIGHT: ServiceEntry = ServiceEntry {
    headline: "Global Connectivity, Local Precision",
    description: "Reliable and efficient freight management covering Air, Sea, and Land transport. We manage the entire process, including complex customs documentation, to ensure timely delivery throughout the world and the GCC.",
    bullets: &[
        "FCL/LCL Ocean Freight",
        "Air Cargo Consolidation & Charter",
        "GCC Land Transport (FTL/LTL)",
        "End-to-End Customs Clearance",
    ],
    cta: "View Logistics Solutions",
    image: "https://placehold.co/800x450/3b82f6/ffffff/png?text=Intermodal+Freight+Containers",
};

const VAS: ServiceEntry = ServiceEntry {
    headline: "Customized Supply Chain Support",
    description: "Go beyond basic logistics with tailored services like co-packing, labeling, kitting, reverse logistics, and specialized handling for sensitive or high-value goods.",
    bullets: &[
        "Co-Packing and Kitting",
        "Product Labeling & Inspection",
        "Reverse Logistics Management",
        "Specialized Handling & Project Cargo",
    ],
    cta: "Discover VAS",
    image: "https://placehold.co/800x450/16a34a/ffffff/png?text=Value+Added+Services+and+Packaging",
};

// ============================================================================
// Process flow
// ============================================================================

pub struct ProcessStep {
    pub num: u8,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        num: 1,
        title: "Initial Request & Analysis",
        detail: "Submission of requirements and scope assessment by our regional experts.",
    },
    ProcessStep {
        num: 2,
        title: "Optimized Strategy & Planning",
        detail: "Route optimization, customs preparation, and resource allocation using WMS/TMS.",
    },
    ProcessStep {
        num: 3,
        title: "Execution & Monitoring",
        detail: "Real-time tracking, secure handling, and continuous compliance checks in transit.",
    },
    ProcessStep {
        num: 4,
        title: "Final Delivery & Feedback",
        detail: "On-time, complete delivery with post-service review for optimization.",
    },
];

// ============================================================================
// Navigation
// ============================================================================

/// A nav bar link. `primary` links get the accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: Anchor,
    pub primary: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Get Quote",
        anchor: Anchor::QuoteEstimator,
        primary: true,
    },
    NavItem {
        label: "Services",
        anchor: Anchor::ServicesView,
        primary: false,
    },
    NavItem {
        label: "Why Us",
        anchor: Anchor::StrengthsDashboard,
        primary: false,
    },
    NavItem {
        label: "Contact",
        anchor: Anchor::ContactUs,
        primary: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn anchor_ids_are_unique() {
        let ids: HashSet<_> = Anchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), Anchor::ALL.len());
        assert_eq!(Anchor::ContactUs.href(), "#contact-us");
    }

    #[test]
    fn strength_keys_are_unique() {
        let keys: HashSet<_> = STRENGTHS.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), STRENGTHS.len());
        let ids: HashSet<_> = STRENGTHS.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(ids.len(), STRENGTHS.len());
    }

    #[test]
    fn service_tab_labels() {
        let labels: Vec<String> = ServiceKey::ALL.iter().map(|k| k.tab_label()).collect();
        assert_eq!(
            labels,
            vec![
                "State-of-the-Art & Storage".to_string(),
                "Global & Forwarding".to_string(),
                "Customized & Services".to_string(),
            ]
        );
    }

    #[test]
    fn service_entries_are_distinct() {
        for a in ServiceKey::ALL {
            for b in ServiceKey::ALL {
                if a != b {
                    assert_ne!(a.entry().headline, b.entry().headline);
                    assert_ne!(a.entry().image, b.entry().image);
                    assert_ne!(a.entry().cta, b.entry().cta);
                }
            }
        }
    }

    #[test]
    fn service_select_values_round_trip() {
        assert_eq!(ServiceKey::default(), ServiceKey::Warehousing);
        assert_eq!("vas".parse::<ServiceKey>(), Ok(ServiceKey::Vas));
        assert_eq!(
            "rail".parse::<ServiceKey>(),
            Err(SiteError::UnknownService("rail".into()))
        );
    }

    #[test]
    fn nav_targets_existing_sections() {
        let anchors: Vec<Anchor> = NAV_ITEMS.iter().map(|i| i.anchor).collect();
        assert_eq!(
            anchors,
            vec![
                Anchor::QuoteEstimator,
                Anchor::ServicesView,
                Anchor::StrengthsDashboard,
                Anchor::ContactUs,
            ]
        );
        assert_eq!(NAV_ITEMS.iter().filter(|i| i.primary).count(), 1);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let nums: Vec<u8> = PROCESS_STEPS.iter().map(|s| s.num).collect();
        assert_eq!(nums, vec![1, 2, 3, 4]);
    }
}
