use leptos::prelude::*;

use super::tilt::TiltBox;
use super::SectionRefs;

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    image: &'static str,
    demo_link: Option<&'static str>,
    repo_link: Option<&'static str>,
}

static PROJECTS: [Project; 6] = [
    Project {
        title: "HijabNazwa",
        description: "Modern e-commerce landing page with responsive layout and clean shopping experience.",
        tags: &["React", "Tailwind", "Vite"],
        image: "/images/projects/hijab.png",
        demo_link: Some("https://hijab-nazwa.vercel.app/"),
        repo_link: Some("https://github.com/nazwaym/HijabNazwa"),
    },
    Project {
        title: "Dompet Pintar",
        description: "Personal finance web app for tracking expenses, budgets, and insights.",
        tags: &["Laravel", "React", "Tailwind CSS", "MySQL"],
        image: "/images/projects/dompetpintar.png",
        demo_link: Some("https://dompet-pintar-gamma.vercel.app/"),
        repo_link: Some("https://github.com/nazwaym/DompetPintar"),
    },
    Project {
        title: "Islamic Kids",
        description: "Interactive Islamic learning app with child-friendly UI and UX research.",
        tags: &["Figma", "UI/UX Design"],
        image: "/images/projects/islamickids.png",
        demo_link: Some("https://play.google.com/store/apps/details?id=com.islamickids.uas"),
        repo_link: None,
    },
    Project {
        title: "Pizza App",
        description: "Android pizza ordering app with smooth navigation and dynamic menu.",
        tags: &["Kotlin", "Android"],
        image: "/images/projects/pizza.png",
        demo_link: None,
        repo_link: Some("https://github.com/nazwaym/PizzaApp"),
    },
    Project {
        title: "SATUSEHAT Redesign",
        description: "UI/UX redesign focused on accessibility and elderly-friendly interaction.",
        tags: &["Figma", "HCI", "UI/UX Design"],
        image: "/images/projects/redesainsatusehat.png",
        demo_link: Some("https://www.figma.com/design/RMLLmcFYpqMiqt9hYbDQBb/IMK"),
        repo_link: None,
    },
    Project {
        title: "Restoku",
        description: "Restaurant ordering system with clear user flow and admin management.",
        tags: &["Figma", "UI/UX Design"],
        image: "/images/projects/restoku.png",
        demo_link: Some("https://www.figma.com/design/xaM9BoP2nH9kdTRWZgmWma/PBO"),
        repo_link: None,
    },
];

/// Devicon class and brand color for the tech tags that have one.
fn tech_icon(tag: &str) -> Option<(&'static str, &'static str)> {
    match tag {
        "React" => Some(("devicon-react-original", "#61DAFB")),
        "Next.js" => Some(("devicon-nextjs-plain", "#ffffff")),
        "Tailwind" | "Tailwind CSS" => Some(("devicon-tailwindcss-original", "#38B2AC")),
        "Vite" => Some(("devicon-vitejs-plain", "#646CFF")),
        "TypeScript" => Some(("devicon-typescript-plain", "#3178C6")),
        "JavaScript" => Some(("devicon-javascript-plain", "#F7DF1E")),
        "HTML5" => Some(("devicon-html5-plain", "#E34F26")),
        "CSS3" => Some(("devicon-css3-plain", "#1572B6")),
        "Laravel" => Some(("devicon-laravel-original", "#FF2D20")),
        "MySQL" => Some(("devicon-mysql-original", "#4479A1")),
        "Kotlin" => Some(("devicon-kotlin-plain", "#7F52FF")),
        "Android" => Some(("devicon-android-plain", "#3DDC84")),
        "Figma" | "UI/UX Design" | "HCI" => Some(("devicon-figma-plain", "#F24E1E")),
        _ => None,
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let refs = expect_context::<SectionRefs>();

    let cards = PROJECTS
        .iter()
        .map(|project| view! { <ProjectCard project /> })
        .collect_view();

    view! {
        <section id="projects" node_ref=refs.projects class="py-28 relative overflow-hidden">
            <div class="container mx-auto px-6">
                <h2 class="text-center text-5xl font-black font-display text-white mb-16">
                    "PROJECTS"
                </h2>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let tag_icons = project
        .tags
        .iter()
        .filter_map(|tag| tech_icon(tag))
        .map(|(icon, color)| {
            view! {
                <div class="p-2 rounded-md bg-black/60 border border-white/10">
                    <i class=icon style=format!("color: {color}")></i>
                </div>
            }
        })
        .collect_view();

    let tag_labels = project
        .tags
        .iter()
        .map(|tag| {
            view! {
                <span class="text-[10px] px-2 py-0.5 rounded bg-white/5 border border-white/10 text-gray-400 uppercase tracking-wide">
                    {*tag}
                </span>
            }
        })
        .collect_view();

    view! {
        <TiltBox class="relative w-full rounded-2xl" max_degrees=8.0>
            <div class="bg-[#0F0F1A]/90 border border-white/10 rounded-2xl overflow-hidden shadow-xl flex flex-col h-full">
                <div class="relative h-48 overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover brightness-90"
                        loading="lazy"
                    />
                    <div class="absolute top-3 right-3 flex gap-1.5">{tag_icons}</div>
                </div>

                <div class="p-5 flex flex-col flex-grow">
                    <h3 class="text-lg font-bold text-white mb-2">{project.title}</h3>
                    <p class="text-gray-400 text-xs leading-relaxed line-clamp-2 mb-4">
                        {project.description}
                    </p>

                    <div class="flex flex-wrap gap-2 mt-auto mb-4">{tag_labels}</div>

                    <div class="flex gap-3">
                        {project
                            .demo_link
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noreferrer"
                                        class="flex-1 text-xs py-2 rounded-md bg-primary text-white font-semibold text-center hover:opacity-90"
                                    >
                                        "View Project"
                                    </a>
                                }
                            })}
                        {project
                            .repo_link
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noreferrer"
                                        class="p-2 rounded-md bg-white/10 text-white hover:bg-white/20"
                                        aria-label="Source repository"
                                    >
                                        <i class="devicon-github-original"></i>
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </TiltBox>
    }
}
