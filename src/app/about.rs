use leptos::prelude::*;

use super::tilt::TiltBox;
use super::SectionRefs;

#[component]
pub fn About() -> impl IntoView {
    let refs = expect_context::<SectionRefs>();

    view! {
        <section
            id="about"
            node_ref=refs.about
            class="py-24 md:py-32 relative overflow-hidden bg-transparent"
        >
            <div class="container mx-auto px-6 relative z-10">
                <div class="mb-16 lg:mb-24 text-center">
                    <div class="flex flex-col items-center">
                        <div class="flex items-center gap-4 mb-8">
                            <span class="w-12 h-px bg-primary"></span>
                            <span class="text-primary font-mono text-sm font-bold tracking-[0.4em] uppercase">
                                "About Me"
                            </span>
                            <span class="w-12 h-px bg-primary"></span>
                        </div>

                        <h2 class="text-5xl md:text-7xl font-display font-black text-white leading-[1.1] mb-8 uppercase tracking-tight">
                            "CRAFTING WITH" <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary via-secondary to-primary animate-gradient text-glow">
                                "PASSION."
                            </span>
                        </h2>
                    </div>
                </div>

                <div class="grid lg:grid-cols-12 gap-12 items-start">
                    <div class="lg:col-span-5 relative lg:sticky lg:top-32">
                        <ProfileVisual />
                    </div>

                    <div class="lg:col-span-7 grid grid-cols-1 md:grid-cols-2 gap-6">
                        <BentoBox class="md:col-span-2 bg-gradient-to-br from-primary/5 to-transparent border-primary/10">
                            <p class="text-xl md:text-2xl text-gray-200 font-light leading-relaxed relative z-10">
                                "I am a "
                                <span class="text-white font-medium italic underline decoration-primary/30 underline-offset-8">
                                    "Frontend Developer"
                                </span> " and "
                                <span class="text-white font-medium italic underline decoration-secondary/30 underline-offset-8">
                                    "UI/UX Designer"
                                </span>
                                " focused on building clean, intuitive, and user-friendly web interfaces."
                            </p>
                        </BentoBox>

                        <BentoBox title="My Process">
                            <p class="text-sm text-gray-400 leading-relaxed">
                                "I usually design in "
                                <span class="text-white font-medium">"Figma"</span>
                                " and implement the designs into responsive frontends using "
                                <span class="text-primary">"React.js"</span> ", "
                                <span class="text-primary">"Next.js"</span> ", "
                                <span class="text-secondary">"Laravel"</span> ", and "
                                <span class="text-accent">"Tailwind CSS"</span> "."
                            </p>
                        </BentoBox>

                        <BentoBox title="Attention to Detail">
                            <p class="text-sm text-gray-400 leading-relaxed">
                                "I pay heavy attention to details, user flow, and visual consistency to ensure the highest quality experience."
                            </p>
                        </BentoBox>

                        <BentoBox title="Collaboration" class="md:col-span-2">
                            <p class="text-lg text-gray-300 font-light leading-relaxed">
                                "I enjoy collaborating with teams and am open to feedback to continuously improve the quality of my work."
                            </p>
                        </BentoBox>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BentoBox(
    #[prop(optional, into)] class: String,
    #[prop(optional)] title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "relative group overflow-hidden rounded-3xl bg-[#0F0F1A]/40 border border-white/5 hover:border-primary/20 transition-all duration-500 p-8 {class}"
        )>
            {title
                .map(|t| {
                    view! {
                        <div class="flex items-center gap-3 mb-6 relative z-10">
                            <h4 class="text-[10px] font-mono font-bold text-white/40 uppercase tracking-[0.2em]">
                                {t}
                            </h4>
                        </div>
                    }
                })}
            <div class="relative z-10">{children()}</div>
        </div>
    }
}

#[component]
fn ProfileVisual() -> impl IntoView {
    view! {
        <TiltBox class="relative w-full aspect-[4/5] group">
            <div class="absolute inset-0 bg-gradient-to-br from-primary/10 to-secondary/10 rounded-[2.5rem] blur-2xl opacity-0 group-hover:opacity-40 transition-opacity duration-500"></div>
            <div class="absolute inset-0 bg-[#0F0F1A] rounded-[2.5rem] border border-white/10 overflow-hidden shadow-2xl z-10">
                <img
                    src="/images/nazwaym.png"
                    alt="Nazwa"
                    class="w-full h-full object-cover opacity-80 group-hover:opacity-100 transition-all duration-700 grayscale-[20%] group-hover:grayscale-0"
                    style="object-position: center 20%; transform: translateZ(30px)"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-[#0F0F1A] via-transparent to-transparent opacity-80"></div>

                <div class="absolute top-6 left-6" style="transform: translateZ(50px)">
                    <div class="px-3 py-1 bg-black/40 backdrop-blur-md rounded-full border border-white/10">
                        <span class="text-[10px] font-mono text-primary uppercase tracking-widest font-bold">
                            "Designer & Dev"
                        </span>
                    </div>
                </div>
            </div>
        </TiltBox>
    }
}
