//! Presentation templates, one per section kind.
//!
//! Authored sections read only their own content. Derived sections
//! (ProjectGrid, TeamGrid, FAQ, Testimonials) read live store data through
//! their data source; their content only carries display options.

use crate::vdom::VNode;
use siteframe_schema::{
    CallToActionContent, CollectionContent, ConstructionTeaserContent, ContactFormContent, FaqItem,
    FeaturesContent, HeroContent, HowItWorksContent, MapContent, Project, Reason, RichTextContent,
    ServicesGridContent, SiteSnapshot, Step, TeamMember, Testimonial, TextAlign, WhyChooseUsContent,
};

/// Projects shown by a ProjectGrid
pub const PROJECT_GRID_LIMIT: usize = 6;
/// Feature bullets shown per project card
pub const PROJECT_FEATURE_LIMIT: usize = 3;
/// House designs shown by a ConstructionTeaser
pub const TEASER_HOUSE_LIMIT: usize = 3;

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub view: &'static str,
    pub image: &'static str,
    pub color: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        id: "construction",
        title: "Construction",
        description: "Full-service residential and commercial building construction. From foundation to handover, we deliver quality homes.",
        view: "service_construction",
        image: "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?auto=format&fit=crop&w=800&q=80",
        color: "bg-blue-600",
    },
    Service {
        id: "interiors",
        title: "Interiors",
        description: "Transform your indoor spaces with our premium interior design, gypsum finishes, and custom cabinetry solutions.",
        view: "service_interiors",
        image: "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?auto=format&fit=crop&w=800&q=80",
        color: "bg-purple-600",
    },
    Service {
        id: "landscaping",
        title: "Landscaping",
        description: "Create your own eden. Professional garden design, cabro paving, planting, and outdoor recreational spaces.",
        view: "service_landscaping",
        image: "https://images.unsplash.com/photo-1558905540-2129015929b1?auto=format&fit=crop&w=800&q=80",
        color: "bg-green-600",
    },
    Service {
        id: "walls",
        title: "Perimeter Walls",
        description: "Secure your property with robust stone walls, electric fencing, and automated gate systems.",
        view: "service_walls",
        image: "https://images.unsplash.com/photo-1623190695034-75466c429672?auto=format&fit=crop&w=800&q=80",
        color: "bg-orange-600",
    },
];

const DEFAULT_REASONS: [(&str, &str); 4] = [
    (
        "Fully Registered",
        "We are compliant with NCA and all relevant Kenyan regulators for your peace of mind.",
    ),
    (
        "70% Financing",
        "We partner with banks to offer up to 70% construction financing to help you build.",
    ),
    (
        "Expert Team",
        "Over 20 years of combined experience in civil engineering and project management.",
    ),
    (
        "No Hidden Costs",
        "Clear agreements and milestone-based payments. What you sign is what you pay.",
    ),
];

const DEFAULT_STEPS: [(&str, &str); 4] = [
    ("Choose Plot", "Browse our portfolio of prime locations."),
    ("Visit Site", "Book a free site visit to see for yourself."),
    ("Secure Plot", "Pay deposit and sign sale agreement."),
    ("Build Home", "We help you design and construct."),
];

const WHY_BODY: &str = "We don't just sell land; we help you build a legacy. From identifying the perfect plot to handing over the keys to your new home, we handle the entire value chain so you don't have to worry about the details.";
const WHY_IMAGE: &str = "https://images.unsplash.com/photo-1504307651254-35680f356dfd?auto=format&fit=crop&w=800&q=80";
const TEASER_BODY: &str = "Already have a plot? Let us bring your vision to life. Choose from our standard designs or let us create a custom masterpiece for you.";

/// Link to an in-app view
fn nav_link(view: &str, class: &str, label: &str) -> VNode {
    VNode::el("a", class)
        .with_attr("href", format!("?view={}", view))
        .with_attr("data-navigate", view)
        .with_child(VNode::text(label))
}

fn heading(tag: &str, class: &str, text: &str) -> VNode {
    VNode::el(tag, class).with_child(VNode::text(text))
}

fn image(src: &str, alt: &str, class: &str) -> VNode {
    VNode::el("img", class).with_attr("src", src).with_attr("alt", alt)
}

pub fn hero(content: &HeroContent) -> VNode {
    let mut inner = VNode::el("div", "container mx-auto px-4 relative z-10")
        .with_child(
            VNode::el("h1", "text-4xl md:text-6xl font-extrabold mb-6 leading-tight drop-shadow-xl")
                .with_text(content.title.as_deref()),
        )
        .with_child(
            VNode::el("p", "text-xl text-gray-200 max-w-3xl mx-auto mb-8 drop-shadow-md")
                .with_text(content.subtitle.as_deref()),
        );
    if let Some(label) = content.button_text.as_deref().filter(|s| !s.is_empty()) {
        let target = content.button_link.as_deref().unwrap_or("contact");
        inner = inner.with_child(nav_link(target, "btn btn-primary shadow-xl text-lg px-8", label));
    }

    let mut background = VNode::el("div", "absolute inset-0");
    if let Some(src) = content.bg_image.as_deref() {
        background = background.with_child(image(src, "Background", "w-full h-full object-cover opacity-40"));
    }
    let background = background.with_child(VNode::el(
        "div",
        "absolute inset-0 bg-gradient-to-t from-gray-900 via-gray-900/40 to-transparent",
    ));

    VNode::el(
        "div",
        "relative pt-32 pb-20 bg-gray-900 text-white text-center overflow-hidden min-h-[60vh] flex items-center justify-center",
    )
    .with_child(background)
    .with_child(inner)
}

pub fn rich_text(content: &RichTextContent, align: Option<TextAlign>) -> VNode {
    let centered = if align == Some(TextAlign::Center) { "text-center" } else { "" };
    let mut node = VNode::el("div", "container mx-auto px-4 max-w-4xl prose prose-lg").with_class(centered);
    if let Some(text) = content.heading.as_deref() {
        node = node.with_child(heading("h2", "text-3xl font-bold mb-6", text));
    }
    node.with_child(VNode::el("div", "whitespace-pre-wrap leading-relaxed opacity-90").with_text(content.body.as_deref()))
}

pub fn features(content: &FeaturesContent) -> VNode {
    let items = content.items.iter().enumerate().map(|(i, item)| {
        VNode::el("div", "bg-white p-6 rounded-xl shadow-sm border border-gray-100 text-left")
            .with_key(i.to_string())
            .with_child(heading("h3", "font-bold text-lg mb-2 flex items-center gap-2 text-gray-900", &item.title))
            .with_child(heading("p", "text-gray-600 text-sm", &item.desc))
    });

    VNode::el("div", "container mx-auto px-4")
        .with_child(VNode::el("div", "text-center mb-12").with_child(VNode::el("h2", "text-3xl font-bold").with_text(content.title.as_deref())))
        .with_child(VNode::el("div", "grid grid-cols-1 md:grid-cols-3 gap-8").with_children(items))
}

pub fn call_to_action(content: &CallToActionContent) -> VNode {
    VNode::el("div", "container mx-auto px-4 relative z-10 text-center")
        .with_child(heading(
            "h2",
            "text-3xl md:text-4xl font-bold mb-6",
            content.title.as_deref().unwrap_or("Ready to start?"),
        ))
        .with_child(VNode::el("p", "opacity-90 mb-8 max-w-2xl mx-auto text-lg").with_text(content.subtitle.as_deref()))
        .with_child(nav_link(
            content.link.as_deref().unwrap_or("contact"),
            "btn btn-white text-lg px-8",
            content.button_text.as_deref().unwrap_or("Contact Us"),
        ))
}

fn form_field(name: &str, label: &str, kind: &str, placeholder: &str) -> VNode {
    VNode::el("div", "mb-4")
        .with_child(heading("label", "block text-sm font-bold text-gray-700 mb-2", label))
        .with_child(
            VNode::el("input", "w-full p-3 border rounded-lg")
                .with_attr("type", kind)
                .with_attr("name", name)
                .with_attr("placeholder", placeholder),
        )
}

fn form_select(name: &str, label: &str, values: &[(&str, &str)]) -> VNode {
    let options = values.iter().map(|(value, text)| {
        VNode::element("option")
            .with_attr("value", *value)
            .with_child(VNode::text(*text))
    });
    VNode::el("div", "mb-4")
        .with_child(heading("label", "block text-sm font-bold text-gray-700 mb-2", label))
        .with_child(
            VNode::el("select", "w-full p-3 border rounded-lg")
                .with_attr("name", name)
                .with_children(options),
        )
}

pub fn contact_form(content: &ContactFormContent, snapshot: &SiteSnapshot) -> VNode {
    let config = &snapshot.site_config;
    let form = VNode::el("form", "space-y-4")
        .with_attr("data-form", "inquiry")
        .with_child(form_field("name", "Full Name *", "text", "John Doe"))
        .with_child(form_field("phone", "Phone Number *", "tel", "0700000000"))
        .with_child(form_field("email", "Email Address *", "email", "john@example.com"))
        .with_child(form_select(
            "purpose",
            "Purpose",
            &[
                ("Site Visit", "Book Site Visit"),
                ("General Inquiry", "General Inquiry"),
                ("Purchase", "Plot Purchase"),
                ("Construction", "Construction Quote"),
                ("Partnership", "Partnership"),
            ],
        ))
        .with_child(form_field("location", "Preferred Location *", "text", "e.g. Joska, Juja"))
        .with_child(
            VNode::el("div", "mb-4")
                .with_child(heading("label", "block text-sm font-bold text-gray-700 mb-2", "Message / Notes *"))
                .with_child(
                    VNode::el("textarea", "w-full p-3 border rounded-lg")
                        .with_attr("name", "message")
                        .with_attr("rows", "4")
                        .with_attr("placeholder", "Tell us more about your requirements..."),
                ),
        )
        .with_child(
            VNode::el("button", "btn btn-primary w-full")
                .with_attr("type", "submit")
                .with_child(VNode::text("Send Message")),
        );

    let details = VNode::el("div", "space-y-4 text-sm")
        .with_child(heading("p", "contact-phone", &config.contact_phone))
        .with_child(heading("p", "contact-email", &config.contact_email))
        .with_child(heading("p", "contact-address", &config.contact_address));

    VNode::el("div", "container mx-auto px-4")
        .with_child(
            VNode::el("div", "text-center mb-12")
                .with_child(heading("h2", "text-3xl font-bold", content.title.as_deref().unwrap_or("Contact Us")))
                .with_text_node(content.subtitle.as_deref(), "p", "text-gray-600 mt-4"),
        )
        .with_child(VNode::el("div", "grid grid-cols-1 lg:grid-cols-3 gap-8").with_child(details).with_child(form))
}

pub fn project_grid(content: &CollectionContent<Project>, snapshot: &SiteSnapshot) -> VNode {
    let cards = content
        .source
        .resolve(snapshot)
        .iter()
        .take(PROJECT_GRID_LIMIT)
        .map(|project| {
            let features = project.features.iter().take(PROJECT_FEATURE_LIMIT).map(|feature| {
                heading("div", "flex items-center text-xs text-gray-500 font-medium project-feature", feature)
            });
            VNode::el("div", "project-card bg-white rounded-xl overflow-hidden shadow-lg h-full flex flex-col border border-gray-100")
                .with_key(project.id.clone())
                .with_child(
                    VNode::el("div", "relative h-64 overflow-hidden")
                        .with_child(image(&project.image_url, &project.title, "w-full h-full object-cover"))
                        .with_child(heading("div", "absolute top-4 right-4 bg-[#007636] text-white px-3 py-1 rounded-full text-sm font-semibold", "Selling Fast")),
                )
                .with_child(
                    VNode::el("div", "p-6 flex-grow flex flex-col")
                        .with_child(
                            VNode::el("div", "flex justify-between items-start mb-2")
                                .with_child(heading("h3", "text-xl font-bold text-gray-900", &project.title))
                                .with_child(heading("span", "text-[#b96807] font-bold text-lg", &project.price_str)),
                        )
                        .with_child(heading("div", "flex items-center text-gray-500 mb-4 text-sm", &project.location))
                        .with_child(heading("p", "text-gray-600 text-sm mb-6 flex-grow line-clamp-3", &project.description))
                        .with_child(VNode::el("div", "space-y-2 mb-6").with_children(features))
                        .with_child(nav_link("properties", "btn btn-outline w-full", "View Plot Details")),
                )
        });

    VNode::el("div", "container mx-auto px-4")
        .with_child(
            VNode::el("div", "text-center mb-16")
                .with_child(heading(
                    "h2",
                    "text-3xl md:text-4xl font-bold text-gray-900 mb-4",
                    content.title.as_deref().unwrap_or("Featured Projects"),
                ))
                .with_child(heading(
                    "p",
                    "text-gray-600 max-w-2xl mx-auto",
                    content.subtitle.as_deref().unwrap_or(
                        "Discover our hand-picked selection of prime plots ready for development. Located in high-growth areas with ready title deeds.",
                    ),
                )),
        )
        .with_child(VNode::el("div", "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8").with_children(cards))
        .with_child(VNode::el("div", "text-center mt-12").with_child(nav_link("properties", "text-[#007636] font-semibold hover:underline", "View All Projects")))
}

pub fn testimonials(content: &CollectionContent<Testimonial>, snapshot: &SiteSnapshot) -> VNode {
    let stats = snapshot.stats.iter().map(|stat| {
        VNode::el("div", "stat text-center p-6 bg-white rounded-xl shadow-sm border border-gray-100")
            .with_key(stat.id.clone())
            .with_child(heading("div", "text-3xl font-bold text-gray-900 mb-1", &stat.value))
            .with_child(heading("div", "text-sm text-gray-500 uppercase tracking-wide font-medium", &stat.label))
    });
    let quotes = content.source.resolve(snapshot).iter().map(|t| {
        VNode::el("div", "testimonial bg-white p-8 rounded-2xl shadow-lg relative h-full border border-gray-100")
            .with_key(t.id.clone())
            .with_child(heading("p", "text-gray-600 mb-6 italic relative z-10", &format!("\"{}\"", t.content)))
            .with_child(
                VNode::el("div", "flex items-center gap-4")
                    .with_child(image(&t.image_url, &t.name, "w-12 h-12 rounded-full object-cover"))
                    .with_child(
                        VNode::element("div")
                            .with_child(heading("h4", "font-bold text-gray-900", &t.name))
                            .with_child(heading("p", "text-xs text-[#b96807] font-semibold uppercase", &t.role)),
                    ),
            )
    });
    let partners = snapshot.partners.iter().map(|p| {
        image(&p.logo_url, &p.name, "partner h-12 object-contain")
            .with_attr("title", p.name.clone())
            .with_key(p.id.clone())
    });

    VNode::el("div", "container mx-auto px-4")
        .with_child(VNode::el("div", "grid grid-cols-2 md:grid-cols-4 gap-8 mb-20").with_children(stats))
        .with_child(
            VNode::el("div", "mb-20")
                .with_child(heading(
                    "h2",
                    "text-3xl md:text-4xl font-bold text-center text-gray-900 mb-12",
                    content.title.as_deref().unwrap_or("What Our Clients Say"),
                ))
                .with_child(VNode::el("div", "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8").with_children(quotes)),
        )
        .with_child(
            VNode::el("div", "pt-12 border-t border-gray-200")
                .with_child(heading("p", "text-center text-gray-400 font-medium mb-8 uppercase tracking-widest text-sm", "Our Trusted Partners"))
                .with_child(VNode::el("div", "flex flex-wrap justify-center gap-8 md:gap-16 items-center").with_children(partners)),
        )
}

pub fn team_grid(content: &CollectionContent<TeamMember>, snapshot: &SiteSnapshot) -> VNode {
    let members = content.source.resolve(snapshot).iter().map(|m| {
        VNode::el("div", "team-member text-center group")
            .with_key(m.id.clone())
            .with_child(
                VNode::el("div", "w-48 h-48 mx-auto mb-6 rounded-full overflow-hidden border-4 border-gray-100")
                    .with_child(image(&m.image_url, &m.name, "w-full h-full object-cover")),
            )
            .with_child(heading("h3", "font-bold text-xl", &m.name))
            .with_child(heading("p", "text-[#b96807] font-medium text-sm", &m.role))
            .with_child(heading("p", "text-gray-500 text-sm mt-3 max-w-xs mx-auto", &m.bio))
    });

    VNode::el("div", "container mx-auto px-4")
        .with_child(heading("h2", "text-3xl font-bold text-center mb-12", content.title.as_deref().unwrap_or("Our Team")))
        .with_child(VNode::el("div", "grid grid-cols-1 md:grid-cols-3 gap-8").with_children(members))
}

pub fn faq(content: &CollectionContent<FaqItem>, snapshot: &SiteSnapshot) -> VNode {
    let entries = content.source.resolve(snapshot).iter().enumerate().map(|(i, f)| {
        VNode::el("div", "faq-item bg-white p-6 rounded-xl shadow-sm border border-gray-100")
            .with_key(i.to_string())
            .with_child(heading("h4", "font-bold mb-2 text-gray-900", &f.question))
            .with_child(heading("p", "text-gray-600 text-sm", &f.answer))
    });

    VNode::el("div", "container mx-auto px-4 max-w-3xl")
        .with_child(heading(
            "h2",
            "text-3xl font-bold text-center mb-12",
            content.title.as_deref().unwrap_or("Frequently Asked Questions"),
        ))
        .with_child(VNode::el("div", "space-y-4").with_children(entries))
}

pub fn why_choose_us(content: &WhyChooseUsContent, brand: &str) -> VNode {
    let defaults: Vec<Reason>;
    let reasons = match &content.reasons {
        Some(reasons) => reasons.as_slice(),
        None => {
            defaults = DEFAULT_REASONS
                .iter()
                .map(|(title, description)| Reason {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect();
            defaults.as_slice()
        }
    };
    let cards = reasons.iter().enumerate().map(|(i, reason)| {
        VNode::el("div", "reason flex flex-col gap-3 p-4 rounded-lg")
            .with_key(i.to_string())
            .with_child(heading("h3", "font-bold text-gray-900", &reason.title))
            .with_child(heading("p", "text-sm text-gray-500", &reason.description))
    });
    let subtitle = content
        .subtitle
        .clone()
        .unwrap_or_else(|| format!("Why Choose {}", brand));

    VNode::el("div", "container mx-auto px-4 relative z-10").with_child(
        VNode::el("div", "flex flex-col md:flex-row items-center gap-12 lg:gap-20")
            .with_child(
                VNode::el("div", "md:w-1/2")
                    .with_child(heading("h4", "text-[#b96807] font-bold uppercase tracking-wider mb-2", &subtitle))
                    .with_child(heading(
                        "h2",
                        "text-3xl md:text-4xl font-bold text-gray-900 mb-6",
                        content.title.as_deref().unwrap_or("Your Trusted Partner in Land & Construction"),
                    ))
                    .with_child(heading("p", "text-gray-600 mb-8 leading-relaxed", content.body.as_deref().unwrap_or(WHY_BODY)))
                    .with_child(VNode::el("div", "grid grid-cols-1 sm:grid-cols-2 gap-6").with_children(cards)),
            )
            .with_child(
                VNode::el("div", "md:w-1/2 relative").with_child(
                    VNode::el("div", "relative rounded-2xl overflow-hidden shadow-2xl border-8 border-white")
                        .with_child(image(content.image.as_deref().unwrap_or(WHY_IMAGE), "Construction Site Engineer", "w-full h-auto"))
                        .with_child(heading("p", "font-bold text-xl", "\"Quality is not an act, it is a habit.\"")),
                ),
            ),
    )
}

pub fn construction_teaser(content: &ConstructionTeaserContent, snapshot: &SiteSnapshot) -> VNode {
    let houses = snapshot.houses.iter().take(TEASER_HOUSE_LIMIT).map(|house| {
        VNode::el("div", "house-card group relative overflow-hidden rounded-xl")
            .with_key(house.id.clone())
            .with_child(image(&house.image_url, &house.title, "w-full h-80 object-cover"))
            .with_child(
                VNode::el("div", "absolute bottom-0 left-0 p-6 z-20 w-full")
                    .with_child(heading("h3", "text-2xl font-bold mb-2", &house.title))
                    .with_child(heading("p", "text-sm text-gray-200 mb-4", &house.description))
                    .with_child(nav_link("service_construction", "flex items-center text-[#b96807] font-semibold text-sm uppercase tracking-wider", "View Plan")),
            )
    });

    VNode::el("div", "container mx-auto px-4")
        .with_child(
            VNode::el("div", "max-w-2xl mb-12")
                .with_child(heading("h2", "text-3xl md:text-4xl font-bold mb-4", content.title.as_deref().unwrap_or("Build With Us")))
                .with_child(heading("p", "text-gray-300", content.body.as_deref().unwrap_or(TEASER_BODY))),
        )
        .with_child(VNode::el("div", "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8").with_children(houses))
}

pub fn how_it_works(content: &HowItWorksContent) -> VNode {
    let defaults: Vec<Step>;
    let steps = match &content.steps {
        Some(steps) => steps.as_slice(),
        None => {
            defaults = DEFAULT_STEPS
                .iter()
                .map(|(title, desc)| Step {
                    title: title.to_string(),
                    desc: desc.to_string(),
                })
                .collect();
            defaults.as_slice()
        }
    };
    let cards = steps.iter().enumerate().map(|(i, step)| {
        VNode::el("div", "step flex flex-col items-center text-center group")
            .with_key(i.to_string())
            .with_child(heading("div", "w-8 h-8 bg-[#b96807] text-white rounded-full flex items-center justify-center text-sm font-bold", &(i + 1).to_string()))
            .with_child(heading("h3", "text-xl font-bold text-gray-900 mb-2", &step.title))
            .with_child(heading("p", "text-gray-500 text-sm max-w-xs mx-auto", &step.desc))
    });

    VNode::el("div", "container mx-auto px-4")
        .with_child(
            VNode::el("div", "text-center mb-16")
                .with_child(heading("h2", "text-3xl md:text-4xl font-bold text-gray-900", content.title.as_deref().unwrap_or("How It Works")))
                .with_child(heading(
                    "p",
                    "text-gray-600 mt-4",
                    content.subtitle.as_deref().unwrap_or("Your simple path to homeownership."),
                )),
        )
        .with_child(VNode::el("div", "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8").with_children(cards))
}

pub fn services_grid(content: &ServicesGridContent, brand: &str) -> VNode {
    let cards = SERVICES.iter().map(|service| {
        VNode::el("div", "service bg-white rounded-2xl overflow-hidden shadow-xl h-full flex flex-col")
            .with_key(service.id)
            .with_child(
                VNode::el("div", "relative h-64 overflow-hidden")
                    .with_child(image(service.image, service.title, "w-full h-full object-cover"))
                    .with_child(VNode::el("div", "absolute top-4 left-4 text-white p-3 rounded-xl shadow-lg z-20").with_class(service.color)),
            )
            .with_child(
                VNode::el("div", "p-8 flex-grow flex flex-col")
                    .with_child(heading("h3", "text-2xl font-bold text-gray-900 mb-3", service.title))
                    .with_child(heading("p", "text-gray-600 mb-6 flex-grow", service.description))
                    .with_child(nav_link(service.view, "text-[#007636] font-bold", "Explore Service")),
            )
    });
    let intro = format!(
        "{} offers comprehensive construction solutions tailored to your needs. Choose a service below to explore our capabilities.",
        brand
    );

    VNode::el("div", "py-12").with_child(
        VNode::el("div", "container mx-auto px-4")
            .with_child(
                VNode::el("div", "text-center mb-12")
                    .with_child(heading("h2", "text-4xl md:text-5xl font-bold mb-6", content.title.as_deref().unwrap_or("Our Expertise")))
                    .with_child(heading("p", "text-xl max-w-3xl mx-auto mb-8", content.subtitle.as_deref().unwrap_or(&intro))),
            )
            .with_child(VNode::el("div", "grid grid-cols-1 md:grid-cols-2 gap-8").with_children(cards)),
    )
}

pub fn map(content: &MapContent, default_url: &str, brand: &str) -> VNode {
    VNode::el("div", "h-96 w-full bg-gray-200 relative").with_child(
        VNode::element("iframe")
            .with_attr("src", content.embed_url.as_deref().unwrap_or(default_url))
            .with_attr("width", "100%")
            .with_attr("height", "100%")
            .with_attr("loading", "lazy")
            .with_attr("allowfullscreen", "")
            .with_attr("title", format!("{} Location", brand))
            .with_style("border", "0"),
    )
}

/// Placeholder for a section whose type is not recognised
pub fn unknown(type_name: &str) -> VNode {
    VNode::el("div", "section-unknown p-8 text-center text-red-500")
        .with_child(VNode::text(format!("Unknown Section Type: {}", type_name)))
}

trait OptionalText {
    fn with_text_node(self, content: Option<&str>, tag: &str, class: &str) -> Self;
}

impl OptionalText for VNode {
    fn with_text_node(self, content: Option<&str>, tag: &str, class: &str) -> Self {
        match content {
            Some(text) => self.with_child(heading(tag, class, text)),
            None => self,
        }
    }
}
