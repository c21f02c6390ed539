//! Static site content.
//!
//! Every record here is defined once, in display order, and never mutated.
//! Filters produce borrowed views over the fixed tables.

/// Owner profile shown in the hero and about sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
    pub resume_url: &'static str,
    pub tagline: &'static str,
    pub bio: [&'static str; 3],
}

pub static PROFILE: Profile = Profile {
    name: "Aarav Sharma",
    title: "Full-Stack & IoT Engineer",
    location: "Bengaluru, India",
    email: "aarav.sharma.dev@example.com",
    avatar: "https://avatars.githubusercontent.com/u/9919?v=4",
    resume_url: "https://example.com/aarav-sharma-resume.pdf",
    tagline: "I build connected products, from the sensor on the wall to the dashboard in your browser.",
    bio: [
        "I'm an engineer who enjoys the whole stack: firmware on microcontrollers, message brokers in the middle, and responsive interfaces at the edge.",
        "Over the past five years I've shipped energy-monitoring platforms, agricultural sensor networks, and developer tooling used by teams every day.",
        "When I'm not soldering or writing code, I'm mentoring at local hackathons or chasing sunrise hikes in the Western Ghats.",
    ],
};

/// Rotating roles for the hero typewriter.
pub static ROLES: [&str; 4] = [
    "Full-Stack Developer",
    "IoT Engineer",
    "Cloud Architect",
    "Open Source Contributor",
];

/// A page section with a stable anchor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections in page order.
pub static SECTIONS: [Section; 7] = [
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "skills", label: "Skills" },
    Section { id: "projects", label: "Projects" },
    Section { id: "certifications", label: "Certifications" },
    Section { id: "education", label: "Education" },
    Section { id: "contact", label: "Contact" },
];

/// Anchor ids in page order.
pub fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|s| s.id).collect()
}

/// Headline numbers shown under the about text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: "5+", label: "Years Experience" },
    Stat { value: "40+", label: "Projects Shipped" },
    Stat { value: "9", label: "Certifications" },
    Stat { value: "3", label: "Hackathon Wins" },
];

/// One skill with a 0-100 proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A titled group of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend",
        icon: "🎨",
        skills: &[
            Skill { name: "React", level: 92 },
            Skill { name: "TypeScript", level: 88 },
            Skill { name: "Tailwind CSS", level: 90 },
            Skill { name: "Three.js", level: 70 },
            Skill { name: "Dioxus", level: 68 },
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: "⚙️",
        skills: &[
            Skill { name: "Node.js", level: 90 },
            Skill { name: "Rust", level: 78 },
            Skill { name: "Python", level: 85 },
            Skill { name: "PostgreSQL", level: 82 },
            Skill { name: "Redis", level: 75 },
        ],
    },
    SkillCategory {
        title: "IoT & Embedded",
        icon: "📡",
        skills: &[
            Skill { name: "ESP32 / Arduino", level: 92 },
            Skill { name: "MQTT", level: 90 },
            Skill { name: "Raspberry Pi", level: 85 },
            Skill { name: "LoRaWAN", level: 72 },
            Skill { name: "C / C++", level: 80 },
        ],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        icon: "☁️",
        skills: &[
            Skill { name: "AWS IoT Core", level: 84 },
            Skill { name: "Docker", level: 86 },
            Skill { name: "Kubernetes", level: 70 },
            Skill { name: "GitHub Actions", level: 88 },
            Skill { name: "Azure IoT Hub", level: 74 },
        ],
    },
];

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Longer text for the detail modal.
    pub details: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub featured: bool,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "SmartGrid Monitor",
        description: "Real-time household energy telemetry with anomaly alerts.",
        details: "ESP32 current sensors publish readings over MQTT to a Node.js ingestion service. A React dashboard streams live load curves, flags anomalies with rolling z-scores, and sends push alerts when a circuit misbehaves.",
        tags: &["IoT", "React", "Node.js", "MQTT"],
        image: "https://images.unsplash.com/photo-1509391366360-2e959784a276?w=800",
        github: Some("https://github.com/aarav-sharma/smartgrid-monitor"),
        demo: Some("https://smartgrid.example.com"),
        featured: true,
    },
    Project {
        title: "AgriSense",
        description: "Solar-powered soil and weather sensor mesh for small farms.",
        details: "LoRaWAN nodes report soil moisture, temperature, and humidity every fifteen minutes. Readings land in AWS IoT Core and drive irrigation recommendations delivered over SMS in the farmer's language.",
        tags: &["IoT", "AWS", "Python", "LoRaWAN"],
        image: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=800",
        github: Some("https://github.com/aarav-sharma/agrisense"),
        demo: None,
        featured: true,
    },
    Project {
        title: "DevPulse",
        description: "Engineering analytics for pull requests, reviews, and deploys.",
        details: "A GitHub App that aggregates review latency, deploy frequency, and change failure rate into weekly team reports. Built with a Rust ingestion worker and a TypeScript frontend.",
        tags: &["Web", "Rust", "TypeScript", "PostgreSQL"],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800",
        github: Some("https://github.com/aarav-sharma/devpulse"),
        demo: Some("https://devpulse.example.com"),
        featured: true,
    },
    Project {
        title: "ParkIt",
        description: "Live parking availability from magnetometer sensors.",
        details: "Battery-powered magnetometers detect occupancy and report via LoRa gateways. A mobile-first web app shows free bays on a map and predicts availability for the next hour.",
        tags: &["IoT", "React", "Go"],
        image: "https://images.unsplash.com/photo-1506521781263-d8422e82f27a?w=800",
        github: Some("https://github.com/aarav-sharma/parkit"),
        demo: None,
        featured: false,
    },
    Project {
        title: "CloudCart",
        description: "Serverless storefront with edge caching and Stripe checkout.",
        details: "Next.js storefront backed by AWS Lambda and DynamoDB. Product pages are pre-rendered at the edge and invalidated on inventory changes.",
        tags: &["Web", "AWS", "TypeScript"],
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800",
        github: Some("https://github.com/aarav-sharma/cloudcart"),
        demo: Some("https://cloudcart.example.com"),
        featured: false,
    },
    Project {
        title: "AirWatch",
        description: "Indoor air quality badges for classrooms.",
        details: "CO2 and PM2.5 sensors with e-ink displays nudge teachers to ventilate. Data syncs to a shared dashboard so schools can compare rooms across a building.",
        tags: &["IoT", "C++", "Python"],
        image: "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=800",
        github: None,
        demo: None,
        featured: false,
    },
];

/// Distinct project tags in first-seen order, preceded by "All".
pub fn project_tags() -> Vec<&'static str> {
    let mut tags = vec!["All"];
    for project in PROJECTS.iter() {
        for tag in project.tags {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
    }
    tags
}

/// Projects carrying `tag`, in table order. `"All"` returns every project.
pub fn projects_by_tag(tag: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| tag == "All" || p.tags.contains(&tag))
        .collect()
}

/// Certification category used by the filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertCategory {
    All,
    IoT,
    Cloud,
    Web,
    Data,
    Security,
}

impl CertCategory {
    /// Tabs in display order.
    pub const TABS: [CertCategory; 6] = [
        CertCategory::All,
        CertCategory::IoT,
        CertCategory::Cloud,
        CertCategory::Web,
        CertCategory::Data,
        CertCategory::Security,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CertCategory::All => "All",
            CertCategory::IoT => "IoT",
            CertCategory::Cloud => "Cloud",
            CertCategory::Web => "Web",
            CertCategory::Data => "Data",
            CertCategory::Security => "Security",
        }
    }
}

/// A certification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub category: CertCategory,
    pub credential_url: &'static str,
    pub image: &'static str,
}

pub static CERTIFICATIONS: [Certification; 9] = [
    Certification {
        title: "AWS Certified IoT Specialty (Beta Track)",
        issuer: "Amazon Web Services",
        date: "2024",
        category: CertCategory::IoT,
        credential_url: "https://www.credly.com/badges/example-aws-iot",
        image: "https://images.credly.com/size/340x340/images/aws-iot.png",
    },
    Certification {
        title: "AWS Certified Solutions Architect – Associate",
        issuer: "Amazon Web Services",
        date: "2023",
        category: CertCategory::Cloud,
        credential_url: "https://www.credly.com/badges/example-aws-saa",
        image: "https://images.credly.com/size/340x340/images/aws-saa.png",
    },
    Certification {
        title: "Microsoft Certified: Azure IoT Developer Specialty",
        issuer: "Microsoft",
        date: "2023",
        category: CertCategory::IoT,
        credential_url: "https://learn.microsoft.com/credentials/example-az220",
        image: "https://images.credly.com/size/340x340/images/az-220.png",
    },
    Certification {
        title: "Meta Front-End Developer",
        issuer: "Coursera",
        date: "2022",
        category: CertCategory::Web,
        credential_url: "https://coursera.org/verify/example-meta-fe",
        image: "https://images.credly.com/size/340x340/images/meta-fe.png",
    },
    Certification {
        title: "Introduction to IoT",
        issuer: "Cisco Networking Academy",
        date: "2021",
        category: CertCategory::IoT,
        credential_url: "https://www.credly.com/badges/example-cisco-iot",
        image: "https://images.credly.com/size/340x340/images/cisco-iot.png",
    },
    Certification {
        title: "Google Data Analytics",
        issuer: "Google",
        date: "2022",
        category: CertCategory::Data,
        credential_url: "https://coursera.org/verify/example-google-da",
        image: "https://images.credly.com/size/340x340/images/google-da.png",
    },
    Certification {
        title: "Certified Kubernetes Application Developer",
        issuer: "The Linux Foundation",
        date: "2024",
        category: CertCategory::Cloud,
        credential_url: "https://www.credly.com/badges/example-ckad",
        image: "https://images.credly.com/size/340x340/images/ckad.png",
    },
    Certification {
        title: "CompTIA Security+",
        issuer: "CompTIA",
        date: "2023",
        category: CertCategory::Security,
        credential_url: "https://www.credly.com/badges/example-secplus",
        image: "https://images.credly.com/size/340x340/images/secplus.png",
    },
    Certification {
        title: "Full Stack Web Development with React",
        issuer: "HKUST",
        date: "2021",
        category: CertCategory::Web,
        credential_url: "https://coursera.org/verify/example-hkust",
        image: "https://images.credly.com/size/340x340/images/hkust.png",
    },
];

/// Certifications in `category`, in table order. `All` returns the full list.
pub fn filter_certifications(category: CertCategory) -> Vec<&'static Certification> {
    CERTIFICATIONS
        .iter()
        .filter(|c| category == CertCategory::All || c.category == category)
        .collect()
}

/// Filter tabs with the number of certifications each would show.
pub fn certification_tabs() -> Vec<(CertCategory, usize)> {
    CertCategory::TABS
        .into_iter()
        .map(|c| (c, filter_certifications(c).len()))
        .collect()
}

/// An education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EDUCATION: [Education; 2] = [
    Education {
        degree: "B.Tech in Electronics & Communication Engineering",
        institution: "National Institute of Technology Karnataka",
        period: "2015 – 2019",
        grade: "CGPA 8.7 / 10",
        highlights: &[
            "Capstone: low-power LoRa mesh for cold-chain monitoring",
            "Lead, Robotics & Embedded Systems Club",
            "Smart India Hackathon 2018 winner",
        ],
    },
    Education {
        degree: "Higher Secondary (Science)",
        institution: "Delhi Public School, Bengaluru",
        period: "2013 – 2015",
        grade: "94.2%",
        highlights: &["State-level science exhibition finalist"],
    },
];

/// External profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/aarav-sharma",
        icon: "",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/aarav-sharma",
        icon: "in",
    },
    SocialLink {
        label: "Twitter",
        url: "https://twitter.com/aarav_builds",
        icon: "𝕏",
    },
    SocialLink {
        label: "Email",
        url: "mailto:aarav.sharma.dev@example.com",
        icon: "✉",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iot_filter_preserves_order() {
        let iot = filter_certifications(CertCategory::IoT);
        let expected: Vec<_> = CERTIFICATIONS
            .iter()
            .filter(|c| c.category == CertCategory::IoT)
            .collect();
        assert_eq!(iot, expected);
        assert_eq!(iot.len(), 3);
        assert!(iot.iter().all(|c| c.category == CertCategory::IoT));
        assert_eq!(iot[0].title, "AWS Certified IoT Specialty (Beta Track)");
        assert_eq!(iot[2].title, "Introduction to IoT");
    }

    #[test]
    fn test_all_filter_is_identity() {
        let all = filter_certifications(CertCategory::All);
        assert_eq!(all.len(), CERTIFICATIONS.len());
        for (a, b) in all.iter().zip(CERTIFICATIONS.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_tab_counts_sum_to_total() {
        let tabs = certification_tabs();
        let (all, rest) = tabs.split_first().unwrap();
        assert_eq!(all.0, CertCategory::All);
        assert_eq!(rest.iter().map(|(_, n)| n).sum::<usize>(), all.1);
    }

    #[test]
    fn test_category_labels_distinct() {
        let mut labels: Vec<&str> = CertCategory::TABS.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), CertCategory::TABS.len());
    }

    #[test]
    fn test_project_tags() {
        let tags = project_tags();
        assert_eq!(tags[0], "All");
        assert_eq!(tags[1], "IoT");
        assert_eq!(projects_by_tag("All").len(), PROJECTS.len());
        assert!(projects_by_tag("IoT").iter().all(|p| p.tags.contains(&"IoT")));
        assert!(projects_by_tag("Haskell").is_empty());
    }

    #[test]
    fn test_section_ids_unique() {
        let ids = section_ids();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
        }
        assert_eq!(ids[0], "home");
    }
}
