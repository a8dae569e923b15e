// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The informational sections of the marketing site, served as
//! structured content for the client to render.

use serde::Serialize;

/// The hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    /// The chapter name.
    pub chapter: &'static str,
    /// The headline.
    pub headline: &'static str,
    /// The lead paragraph.
    pub lead: &'static str,
    /// The mission paragraph.
    pub mission: &'static str,
    /// The call-to-action label.
    pub call_to_action: &'static str,
}

/// A titled card of the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentCard {
    /// The card title.
    pub title: &'static str,
    /// The card body.
    pub description: &'static str,
}

/// A headline statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatItem {
    /// The figure (e.g. `2k+`).
    pub number: &'static str,
    /// The caption.
    pub label: &'static str,
}

/// The about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutContent {
    /// The organization name.
    pub organization: &'static str,
    /// What the chapter focuses on.
    pub features: Vec<ContentCard>,
    /// What the chapter offers.
    pub offerings: Vec<ContentCard>,
    /// Headline statistics.
    pub stats: Vec<StatItem>,
}

/// One contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    /// The channel title.
    pub title: &'static str,
    /// The channel content line.
    pub content: &'static str,
    /// Optional link.
    pub link: Option<&'static str>,
}

/// The contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactContent {
    /// The section heading.
    pub heading: &'static str,
    /// The section blurb.
    pub blurb: &'static str,
    /// The contact channels.
    pub channels: Vec<ContactChannel>,
}

/// One footer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    /// The link label.
    pub label: &'static str,
    /// The link target.
    pub href: &'static str,
}

/// The footer section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterContent {
    /// The brand heading.
    pub heading: &'static str,
    /// The tagline paragraph.
    pub tagline: &'static str,
    /// Quick links.
    pub quick_links: Vec<LinkItem>,
    /// Contact lines.
    pub contact_lines: Vec<&'static str>,
    /// The copyright line.
    pub copyright: &'static str,
}

/// The full informational content of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    /// The hero section.
    pub hero: HeroContent,
    /// The about section.
    pub about: AboutContent,
    /// The contact section.
    pub contact: ContactContent,
    /// The footer section.
    pub footer: FooterContent,
}

/// Returns the informational sections of the site.
#[must_use]
pub fn site_content() -> SiteContent {
    SiteContent {
        hero: HeroContent {
            chapter: "DEVCON Iligan chapter",
            headline: "Building a future-ready tech community",
            lead: "We are the local chapter of Developers Connect (DEVCON) serving Iligan City \
                   and Lanao del Norte since 2022.",
            mission: "Our mission is to empower students, professionals, and educators to sync, \
                      support, and succeed through workshops, meetups, and hackathons—powered by \
                      the nationwide DEVCON network since 2009.",
            call_to_action: "Become a volunteer",
        },
        about: AboutContent {
            organization: "Developers Connect (DEVCON)",
            features: vec![
                ContentCard {
                    title: "Cutting-edge tech",
                    description: "Hands-on workshops and training on AI, web, mobile, cloud, and \
                                  open source.",
                },
                ContentCard {
                    title: "Community driven",
                    description: "Monthly meetups and networking that connect students, pros, and \
                                  educators.",
                },
                ContentCard {
                    title: "Innovation focus",
                    description: "Hackathons and challenges that tackle real problems with real \
                                  impact.",
                },
                ContentCard {
                    title: "National network",
                    description: "Powered by DEVCON's nationwide community and DEVCON Summit \
                                  access.",
                },
            ],
            offerings: vec![
                ContentCard {
                    title: "Workshops & Training",
                    description: "Hands-on sessions on emerging technologies to keep you ahead of \
                                  the curve",
                },
                ContentCard {
                    title: "Community Meetups",
                    description: "Regular networking events connecting developers, students, and \
                                  professionals",
                },
                ContentCard {
                    title: "Hackathons & Challenges",
                    description: "Tech competitions that solve real-world problems with \
                                  innovative solutions",
                },
                ContentCard {
                    title: "DEVCON Summit Access",
                    description: "Connect with top speakers covering AI, software, open source, \
                                  Web3, and more",
                },
            ],
            stats: vec![
                StatItem {
                    number: "2k+",
                    label: "Attendees reached",
                },
                StatItem {
                    number: "2022",
                    label: "Founded",
                },
                StatItem {
                    number: "2009",
                    label: "DEVCON network since",
                },
            ],
        },
        contact: ContactContent {
            heading: "Get in touch",
            blurb: "Have questions about DEVCON Iligan? Message us via our Facebook page or \
                    visit us at iDEYA in MSU-IIT. We're here to help with volunteer \
                    opportunities, event inquiries, and collaboration.",
            channels: vec![
                ContactChannel {
                    title: "Message us",
                    content: "DEVCON Iligan FB page",
                    link: Some("https://facebook.com/devconiligan"),
                },
                ContactChannel {
                    title: "Visit us",
                    content: "iDEYA at MSU-IIT",
                    link: None,
                },
                ContactChannel {
                    title: "Location",
                    content: "Iligan City, Lanao del Norte",
                    link: None,
                },
            ],
        },
        footer: FooterContent {
            heading: "DEVCON Iligan",
            tagline: "DEVCON Iligan is the local chapter of the Philippines' largest volunteer \
                      tech community. Building the future of technology in Northern Mindanao, \
                      one connection at a time.",
            quick_links: vec![
                LinkItem {
                    label: "About",
                    href: "#about",
                },
                LinkItem {
                    label: "Contact",
                    href: "#contact",
                },
                LinkItem {
                    label: "Volunteer",
                    href: "/volunteer",
                },
                LinkItem {
                    label: "Facebook",
                    href: "https://facebook.com/devconiligan",
                },
            ],
            contact_lines: vec![
                "DEVCON Iligan FB page",
                "iDEYA at MSU-IIT",
                "Iligan City, Lanao del Norte",
            ],
            copyright: "© 2024 DEVCON Iligan. All rights reserved.",
        },
    }
}
