use leptos::prelude::*;

use crate::typewriter::TypewriterConfig;

use super::tilt::TiltBox;
use super::typing::use_typewriter;
use super::SectionRefs;

/// Roles cycled by the typewriter on the hero headline.
const ROLES: [&str; 2] = ["Frontend Developer", "UI/UX Designer"];

struct OrbitIcon {
    class: &'static str,
    color: &'static str,
}

static ORBIT_ICONS: [OrbitIcon; 6] = [
    OrbitIcon {
        class: "devicon-react-original",
        color: "#61DAFB",
    },
    OrbitIcon {
        class: "devicon-javascript-plain",
        color: "#F7DF1E",
    },
    OrbitIcon {
        class: "devicon-tailwindcss-original",
        color: "#38B2AC",
    },
    OrbitIcon {
        class: "devicon-figma-plain",
        color: "#F24E1E",
    },
    OrbitIcon {
        class: "devicon-html5-plain",
        color: "#E34F26",
    },
    OrbitIcon {
        class: "devicon-vitejs-plain",
        color: "#646CFF",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    let refs = expect_context::<SectionRefs>();
    let role = use_typewriter(&ROLES, TypewriterConfig::default());

    view! {
        <section
            id="home"
            node_ref=refs.home
            class="min-h-screen flex items-center relative overflow-hidden py-28 md:py-0"
        >
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-primary/5 rounded-full blur-[120px] pointer-events-none"></div>

            <div class="container mx-auto px-6 md:px-12 relative z-10 w-full">
                <div class="flex flex-col md:flex-row items-center justify-between gap-12 md:gap-8">
                    <div class="flex-1 text-center md:text-left flex flex-col items-center md:items-start z-20">
                        <h1 class="text-5xl md:text-7xl lg:text-8xl font-bold mb-6 leading-tight text-white font-display tracking-tight">
                            "Hello, I'm" <br />
                            <span class="bg-gradient-to-r from-primary via-secondary to-accent bg-clip-text text-transparent inline-block pb-1">
                                "Nazwa"
                            </span>
                        </h1>

                        <div class="h-10 mb-8 flex items-center justify-center md:justify-start">
                            <span class="text-xl md:text-3xl font-medium text-gray-400 mr-3">
                                "I am a"
                            </span>
                            <span class="text-xl md:text-3xl font-bold text-white font-mono min-w-[280px] text-left">
                                {move || role()}
                                // cursor blinking is pure CSS; the engine only owns the text
                                <span class="text-secondary ml-1 cursor-blink">"|"</span>
                            </span>
                        </div>

                        <p class="text-gray-400 text-base md:text-lg mb-10 max-w-xl leading-relaxed">
                            "Frontend Developer & UI/UX Designer dedicated to building responsive, user-centric web applications. I blend creative design with clean code."
                        </p>

                        <div class="flex flex-wrap justify-center md:justify-start gap-4">
                            <a
                                href="#contact"
                                class="bg-primary hover:bg-primary/90 text-white px-10 py-4 rounded-full font-medium shadow-lg shadow-primary/25 transition-all flex items-center gap-2 text-lg hover:scale-105"
                            >
                                "Contact Me"
                            </a>
                        </div>
                    </div>

                    <div class="flex-1 flex justify-center md:justify-end relative z-10 mt-8 md:mt-0">
                        <HeroVisual />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Spinning ring of tool icons around a static avatar, tilting with the
/// pointer.
#[component]
fn HeroVisual() -> impl IntoView {
    let icons = ORBIT_ICONS
        .iter()
        .enumerate()
        .map(|(i, icon)| {
            let angle = i as f64 * (360.0 / ORBIT_ICONS.len() as f64);
            // translate distance is the ring radius (half of 300px)
            let placement = format!(
                "left: 50%; top: 50%; transform: rotate({angle}deg) translate(150px) rotate(-{angle}deg);"
            );
            view! {
                <div
                    class="absolute w-12 h-12 md:w-16 md:h-16 -ml-6 -mt-6 md:-ml-8 md:-mt-8 flex items-center justify-center bg-[#2D1B4E] rounded-full border-2 border-[#F0ABFC] shadow-lg"
                    style=placement
                >
                    <div class="spin-reverse">
                        <i
                            class=format!("{} text-xl md:text-3xl", icon.class)
                            style=format!("color: {}", icon.color)
                        ></i>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <TiltBox class="relative w-[300px] h-[300px] md:w-[400px] md:h-[400px] flex items-center justify-center">
            <div class="absolute inset-0 w-full h-full rounded-full border-[6px] md:border-[8px] border-[#F0ABFC] spin-slow">
                {icons}
            </div>
            <div
                class="absolute w-32 h-32 md:w-40 md:h-40 bg-[#E0B0FF] rounded-full flex items-center justify-center shadow-[0_0_50px_rgba(224,176,255,0.4)] z-20"
                style="transform: translateZ(40px)"
            >
                <i class="devicon-devicon-plain text-5xl md:text-6xl text-[#2D1B4E]"></i>
            </div>
        </TiltBox>
    }
}
