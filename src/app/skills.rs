use leptos::prelude::*;

use super::tilt::TiltBox;
use super::SectionRefs;

struct Skill {
    name: &'static str,
    icon: &'static str,
    color: &'static str,
}

static SKILLS: [Skill; 11] = [
    Skill {
        name: "React",
        icon: "devicon-react-original",
        color: "#61DAFB",
    },
    Skill {
        name: "Next.js",
        icon: "devicon-nextjs-plain",
        color: "#ffffff",
    },
    Skill {
        name: "JavaScript",
        icon: "devicon-javascript-plain",
        color: "#F7DF1E",
    },
    Skill {
        name: "TypeScript",
        icon: "devicon-typescript-plain",
        color: "#3178C6",
    },
    Skill {
        name: "Kotlin",
        icon: "devicon-kotlin-plain",
        color: "#7F52FF",
    },
    Skill {
        name: "HTML5",
        icon: "devicon-html5-plain",
        color: "#E34F26",
    },
    Skill {
        name: "CSS3",
        icon: "devicon-css3-plain",
        color: "#1572B6",
    },
    Skill {
        name: "Tailwind",
        icon: "devicon-tailwindcss-original",
        color: "#38B2AC",
    },
    Skill {
        name: "Vite",
        icon: "devicon-vitejs-plain",
        color: "#646CFF",
    },
    Skill {
        name: "Git",
        icon: "devicon-git-plain",
        color: "#F05032",
    },
    Skill {
        name: "Figma",
        icon: "devicon-figma-plain",
        color: "#F24E1E",
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    let refs = expect_context::<SectionRefs>();

    let cards = SKILLS
        .iter()
        .map(|skill| {
            view! {
                <TiltBox class="relative h-full" max_degrees=15.0>
                    <div class="glass-card p-6 rounded-2xl flex flex-col items-center justify-center group transition-all duration-300 border border-white/5 bg-[#0F0F1A]/40 h-full relative overflow-hidden">
                        <div
                            class="absolute inset-0 opacity-0 group-hover:opacity-20 transition-opacity duration-300 pointer-events-none"
                            style=format!(
                                "background: radial-gradient(circle at center, {}, transparent 70%)",
                                skill.color,
                            )
                        ></div>

                        <i
                            class=format!(
                                "{} text-5xl mb-4 transition-transform duration-300 group-hover:scale-110 drop-shadow-lg relative z-10",
                                skill.icon,
                            )
                            style=format!("color: {}; transform: translateZ(20px)", skill.color)
                        ></i>

                        <span
                            class="font-medium text-gray-300 group-hover:text-white transition-colors relative z-10"
                            style="transform: translateZ(10px)"
                        >
                            {skill.name}
                        </span>
                    </div>
                </TiltBox>
            }
        })
        .collect_view();

    view! {
        <section
            id="skills"
            node_ref=refs.skills
            class="py-24 md:py-32 relative overflow-hidden bg-transparent"
        >
            <div class="absolute top-1/2 left-0 w-80 h-80 bg-primary/5 rounded-full blur-[100px] pointer-events-none"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="text-center mb-16 lg:mb-24">
                    <div class="flex items-center justify-center gap-4 mb-6">
                        <span class="w-12 h-px bg-primary"></span>
                        <span class="text-primary font-mono text-lg font-bold tracking-[0.3em] uppercase">
                            "My Stack"
                        </span>
                        <span class="w-12 h-px bg-primary"></span>
                    </div>

                    <h2 class="text-5xl md:text-7xl font-display font-black text-white leading-tight mb-8">
                        "TOOLS OF" <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary via-secondary to-primary animate-gradient">
                            "THE TRADE."
                        </span>
                    </h2>

                    <p class="text-gray-400 max-w-2xl mx-auto text-lg font-light leading-relaxed">
                        "I leverage a modern ecosystem of tools and frameworks to build scalable, high-performance web applications."
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6">{cards}</div>
            </div>
        </section>
    }
}
