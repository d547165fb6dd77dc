//! First-run site content.

use crate::entities::*;
use crate::page::{PageDocument, PageMeta};
use crate::section::*;

/// Pages that ship with the site and cannot be deleted
pub const SYSTEM_PAGE_IDS: [&str; 4] = ["home", "about", "projects_hub", "contact"];

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn section(id: &str, body: SectionBody) -> PageSection {
    PageSection {
        id: id.to_string(),
        body,
        style: None,
    }
}

fn hero(id: &str, title: &str, subtitle: &str, bg_image: &str, button_text: &str, button_link: Option<&str>) -> PageSection {
    section(
        id,
        SectionBody::Hero(HeroContent {
            title: s(title),
            subtitle: s(subtitle),
            bg_image: s(bg_image),
            button_text: s(button_text),
            button_link: button_link.map(str::to_string),
        }),
    )
}

fn call_to_action(id: &str, title: &str, subtitle: &str, button_text: &str) -> PageSection {
    section(
        id,
        SectionBody::CallToAction(CallToActionContent {
            title: s(title),
            subtitle: s(subtitle),
            button_text: s(button_text),
            link: s("contact"),
        }),
    )
}

fn titled<T>(title: Option<&str>) -> CollectionContent<T> {
    CollectionContent {
        title: title.map(str::to_string),
        ..CollectionContent::default()
    }
}

pub fn seed_pages() -> Vec<PageDocument> {
    let home = PageDocument {
        id: "home".to_string(),
        title: "Home".to_string(),
        is_system: true,
        meta: Some(PageMeta {
            title: "Home | MyPloti".to_string(),
            description: "Affordable Land & Construction in Kenya".to_string(),
            og_image: None,
        }),
        sections: vec![
            hero(
                "s_hero",
                "Building Dreams Into Homes.",
                "Secure affordable land, access modern home designs, and get tailored construction solutions.",
                "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&w=1920&q=80",
                "Book a Site Visit",
                Some("contact"),
            ),
            section("s_featured", SectionBody::ProjectGrid(titled(Some("Featured Projects")))),
            section(
                "s_why",
                SectionBody::WhyChooseUs(WhyChooseUsContent {
                    title: s("Your Trusted Partner"),
                    ..Default::default()
                }),
            ),
            section(
                "s_construct",
                SectionBody::ConstructionTeaser(ConstructionTeaserContent {
                    title: s("Build With Us"),
                    body: None,
                }),
            ),
            section(
                "s_how",
                SectionBody::HowItWorks(HowItWorksContent {
                    title: s("How It Works"),
                    ..Default::default()
                }),
            ),
            section("s_social", SectionBody::Testimonials(titled(None))),
        ],
    };

    let about = PageDocument {
        id: "about".to_string(),
        title: "About Us".to_string(),
        is_system: true,
        meta: None,
        sections: vec![
            hero(
                "s_about_hero",
                "Who We Are",
                "Delivering trusted land and construction solutions across Kenya.",
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=1920&q=80",
                "Contact Us",
                None,
            ),
            section(
                "s_rich",
                SectionBody::RichText(RichTextContent {
                    heading: s("Our Mission"),
                    body: s("To provide affordable, verified land and modern homes, making property ownership simple, transparent, and accessible for every Kenyan."),
                }),
            ),
            section("s_team", SectionBody::TeamGrid(titled(None))),
            call_to_action(
                "s_cta",
                "Become a Partner",
                "Join us in building the future of Kenya.",
                "Partner With Us",
            ),
        ],
    };

    let projects_hub = PageDocument {
        id: "projects_hub".to_string(),
        title: "Our Projects".to_string(),
        is_system: true,
        meta: None,
        sections: vec![
            hero(
                "s_hub_hero",
                "Our Expertise",
                "Comprehensive construction solutions tailored to your needs.",
                "https://images.unsplash.com/photo-1503387762-592deb58ef4e?auto=format&fit=crop&w=1920&q=80",
                "Explore Services",
                None,
            ),
            section("s_services", SectionBody::ServicesGrid(ServicesGridContent::default())),
            call_to_action(
                "s_cta_hub",
                "Not sure what you need?",
                "Talk to our experts today.",
                "Consultation",
            ),
        ],
    };

    let contact = PageDocument {
        id: "contact".to_string(),
        title: "Contact".to_string(),
        is_system: true,
        meta: None,
        sections: vec![
            section("s_contact_form", SectionBody::ContactForm(ContactFormContent::default())),
            section("s_map", SectionBody::Map(MapContent::default())),
        ],
    };

    vec![home, about, projects_hub, contact]
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Destiny Gardens".to_string(),
            location: "Joska, Kangundo Road".to_string(),
            price: 850_000,
            price_str: "KES 850,000".to_string(),
            image_url: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?auto=format&fit=crop&w=800&q=80".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1500382017468-9049fed747ef?auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1513326738677-b964603b136d?auto=format&fit=crop&w=800&q=80",
            ]),
            description: "Prime 50x100 plots ready for immediate development. Water and electricity on site.".to_string(),
            features: strings(&["Ready Title Deeds", "Water & Electricity", "Gated Community"]),
            kind: ProjectType::Residential,
            size: "50x100".to_string(),
            purpose: Purpose::Settlement,
            amenities: strings(&["Borehole", "Perimeter Fence", "Graded Roads"]),
            ..Default::default()
        },
        Project {
            id: "2".to_string(),
            title: "Sunrise Ridge".to_string(),
            location: "Juja Farm".to_string(),
            price: 550_000,
            price_str: "KES 550,000".to_string(),
            image_url: "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?auto=format&fit=crop&w=800&q=80".to_string(),
            description: "Affordable plots in a fast-growing area. Ideal for speculation or future settlement.".to_string(),
            features: strings(&["Flexible Payment Plan", "Near Tarmac", "Schools Nearby"]),
            kind: ProjectType::Residential,
            size: "50x100".to_string(),
            purpose: Purpose::Investment,
            amenities: strings(&["Electricity Nearby", "Beaconed"]),
            ..Default::default()
        },
        Project {
            id: "3".to_string(),
            title: "Haven Heights".to_string(),
            location: "Kitengela".to_string(),
            price: 1_200_000,
            price_str: "KES 1,200,000".to_string(),
            image_url: "https://images.unsplash.com/photo-1626178793926-22b28d30aa30?auto=format&fit=crop&w=800&q=80".to_string(),
            description: "Premium plots in a developed neighborhood. 10 minutes from Kitengela town.".to_string(),
            features: strings(&["Perimeter Wall", "Borehole Water", "Mature Neighborhood"]),
            kind: ProjectType::Residential,
            size: "50x100".to_string(),
            purpose: Purpose::Settlement,
            amenities: strings(&["Gated Community", "24/7 Security", "Water on site"]),
            ..Default::default()
        },
    ]
}

pub(crate) fn houses() -> Vec<HouseType> {
    let house = |id: &str, title: &str, description: &str, image: &str, price: &str, features: &[&str]| HouseType {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image.to_string(),
        starting_price_str: price.to_string(),
        features: strings(features),
    };
    vec![
        house(
            "1",
            "Modern Maisonette",
            "Spacious double-story designs perfect for families needing extra room and privacy. Includes 4 bedrooms all ensuite.",
            "https://images.unsplash.com/photo-1605276374104-dee2a0ed3cd6?auto=format&fit=crop&w=600&q=80",
            "KES 5.5M",
            &["4 Bedrooms", "DSQ", "Roof Terrace"],
        ),
        house(
            "2",
            "Modern Flat Roof",
            "Contemporary architectural style offering roof utilization for recreation and sleek aesthetics.",
            "https://images.unsplash.com/photo-1600596542815-600021529844?auto=format&fit=crop&w=600&q=80",
            "KES 6.2M",
            &["Flat Roof", "Open Plan", "Glass Facade"],
        ),
        house(
            "3",
            "Hidden Roof Bungalow",
            "Cost-effective yet stylish single-level homes with a modern hidden roof design giving a box-style look.",
            "https://images.unsplash.com/photo-1568605114967-8130f3a36994?auto=format&fit=crop&w=600&q=80",
            "KES 3.8M",
            &["3 Bedrooms", "Hidden Roof", "Compact Design"],
        ),
        house(
            "4",
            "Executive Villa",
            "Luxury redefined. Expansive living areas, high-end finishes, and integrated smart home features.",
            "https://images.unsplash.com/photo-1613490493576-7fde63acd811?auto=format&fit=crop&w=600&q=80",
            "KES 12M",
            &["5 Bedrooms", "Swimming Pool", "Smart Home"],
        ),
    ]
}

pub(crate) fn team() -> Vec<TeamMember> {
    let member = |id: &str, name: &str, role: &str, bio: &str, image: &str| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        image_url: image.to_string(),
    };
    vec![
        member(
            "1",
            "Steve Mbugua",
            "CEO & MD",
            "Steve Mbugua serves as the Chief Executive Officer and Managing Director of MyPloti.",
            "https://images.unsplash.com/photo-1572021335469-31706a17aaef?q=80&w=800&auto=format&fit=crop",
        ),
        member(
            "2",
            "Mercy Mburu",
            "Sales Advisor",
            "Mercy has over 10 years of professional experience in customer service, real estate, and construction.",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=800&auto=format&fit=crop",
        ),
        member(
            "3",
            "Sheila Wanaswa",
            "Sales Executive",
            "Sheila connects clients with the right solutions for their needs.",
            "https://images.unsplash.com/photo-1589156280159-27698a70f29e?q=80&w=800&auto=format&fit=crop",
        ),
    ]
}

pub(crate) fn portfolio() -> Vec<PortfolioItem> {
    vec![PortfolioItem {
        id: "c1".to_string(),
        category: PortfolioCategory::Construction,
        title: "Kileleshwa Apartments".to_string(),
        location: "Kileleshwa, Nairobi".to_string(),
        description: "A 12-unit apartment complex featuring modern 3-bedroom apartments with high-end finishes.".to_string(),
        main_image: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=800&q=80".to_string(),
        gallery: strings(&[
            "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=800&q=80",
        ]),
        specs: vec![
            SpecEntry {
                label: "Project Type".to_string(),
                value: "Multi-dwelling Residential".to_string(),
            },
            SpecEntry {
                label: "Duration".to_string(),
                value: "14 Months".to_string(),
            },
        ],
        completion_date: None,
        client: None,
    }]
}

pub(crate) fn testimonials() -> Vec<Testimonial> {
    let testimonial = |id: &str, name: &str, role: &str, content: &str, image: &str| Testimonial {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        content: content.to_string(),
        image_url: image.to_string(),
    };
    vec![
        testimonial(
            "1",
            "Sarah Kamau",
            "Homeowner",
            "MyPloti made my dream of owning a home a reality. The process was transparent from buying the land to the final construction handover.",
            "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?auto=format&fit=crop&w=100&q=80",
        ),
        testimonial(
            "2",
            "David Omondi",
            "Investor",
            "I have bought three plots with them. Their due diligence is top-notch.",
            "https://images.unsplash.com/photo-1506277886164-e25aa3f4ef7f?auto=format&fit=crop&w=100&q=80",
        ),
        testimonial(
            "3",
            "Grace Wanjiku",
            "Diaspora Client",
            "Building while abroad is hard, but their team gave me weekly updates.",
            "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&w=100&q=80",
        ),
    ]
}

pub(crate) fn partners() -> Vec<Partner> {
    ["KCB Bank", "Co-op Bank", "NCA", "LSK"]
        .iter()
        .enumerate()
        .map(|(i, name)| Partner {
            id: (i + 1).to_string(),
            name: name.to_string(),
            logo_url: format!(
                "https://ui-avatars.com/api/?name={}&background=007636&color=fff&size=200",
                name.replace(' ', "+")
            ),
        })
        .collect()
}

pub(crate) fn stats() -> Vec<Stat> {
    [
        ("Years Experience", "21+", "Clock"),
        ("Happy Clients", "1000+", "Users"),
        ("Projects Done", "45+", "Hammer"),
        ("Awards Won", "12", "Award"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (label, value, icon))| Stat {
        id: (i + 1).to_string(),
        label: label.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

pub(crate) fn faqs() -> Vec<FaqItem> {
    [
        (
            "Are the title deeds ready?",
            "Yes. All our plots have ready individual title deeds.",
        ),
        (
            "Do you offer financing or payment plans?",
            "Absolutely. We have flexible payment plans of up to 12 months for land purchases.",
        ),
        (
            "How do I book a site visit?",
            "We offer free site visits on Wednesdays and Saturdays with transport from Nairobi CBD.",
        ),
    ]
    .iter()
    .map(|(question, answer)| FaqItem {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

pub(crate) fn knowledge_base() -> Vec<KnowledgeBaseItem> {
    [
        ("1", "Location", "We have plots in Joska, Juja, Kitengela, Ngong, and Malindi."),
        ("2", "Pricing", "Our plots range from KES 350,000 to KES 2.5M depending on location."),
        (
            "3",
            "Site Visits",
            "We offer free site visits on Wednesdays and Saturdays with transport from Nairobi CBD.",
        ),
    ]
    .iter()
    .map(|(id, topic, content)| KnowledgeBaseItem {
        id: id.to_string(),
        topic: topic.to_string(),
        content: content.to_string(),
    })
    .collect()
}
