use leptos::prelude::*;

use super::SectionRefs;

struct Activity {
    title: &'static str,
    date: &'static str,
    description: &'static str,
    image: &'static str,
    location: &'static str,
    details: &'static [&'static str],
}

static ACTIVITIES: [Activity; 4] = [
    Activity {
        title: "HIMATIF - Nalar Division",
        date: "March 2025",
        description: "Active member of HIMATIF - Nalar Division, contributing to organizational excellence and digital innovation.",
        image: "/images/activities/HIMATIF1.jpeg",
        location: "Universitas Sultan Ageng Tirtayasa",
        details: &[
            "Collaborated with cross-functional teams to organize tech workshops.",
            "Developed digital strategies for organizational growth.",
            "Maintained internal documentation and project tracking.",
            "Fostered a collaborative environment for logic and innovation-based projects.",
        ],
    },
    Activity {
        title: "Paramuda Goes To School V2",
        date: "August 2024",
        description: "Led publication and documentation efforts as a volunteer, capturing and sharing the essence of community education.",
        image: "/images/activities/paramuda.jpeg",
        location: "Sunter Jaya, Jakarta",
        details: &[
            "Managed event cinematography and photography for official records.",
            "Produced engaging social media content reaching hundreds of students.",
            "Coordinated with various schools for event execution.",
            "Documented success stories from volunteer programs.",
        ],
    },
    Activity {
        title: "JuaraGCP 2024",
        date: "August 2024",
        description: "Facilitated workshops on Cloud technologies and Open Source contributions.",
        image: "/images/activities/juaragcp.jpeg",
        location: "Google Developers Group",
        details: &[
            "Guided developers through Google Cloud Platform fundamentals.",
            "Demonstrated productive Git workflows for collaborative coding.",
            "Shared best practices for open-source project management.",
            "Mentored newcomers in the cloud ecosystem.",
        ],
    },
    Activity {
        title: "Ekraf Developer Day 2025",
        date: "November 2025",
        description: "Participated in intensive workshops covering modern creative technologies and ecosystem development.",
        image: "/images/activities/bddekraf.jpeg",
        location: "Creative Hub Indonesia",
        details: &[
            "Explored cutting-edge web technologies and design trends.",
            "Engaged with industry leaders about the future of digital economy.",
            "Analyzed best practices for creative app development.",
            "Expanded professional network within the Indonesian tech ecosystem.",
        ],
    },
];

// Bento placement: one large feature, two small, one wide bottom row.
fn grid_class(index: usize) -> &'static str {
    match index {
        0 => "md:col-span-8 md:row-span-2",
        1 | 2 => "md:col-span-4 md:row-span-1",
        3 => "md:col-span-12 md:row-span-1",
        _ => "md:col-span-4",
    }
}

#[component]
pub fn Activities() -> impl IntoView {
    let refs = expect_context::<SectionRefs>();
    let (selected, set_selected) = signal(None::<&'static Activity>);

    let cards = ACTIVITIES
        .iter()
        .enumerate()
        .map(|(index, activity)| {
            view! {
                <div
                    class=format!(
                        "group relative overflow-hidden rounded-3xl cursor-pointer bg-[#0F0F1A]/40 border border-white/5 hover:border-primary/30 transition-all duration-500 min-h-[280px] {}",
                        grid_class(index),
                    )
                    on:click=move |_| set_selected(Some(activity))
                >
                    <div class="absolute inset-0 z-0">
                        <img
                            src=activity.image
                            alt=activity.title
                            class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-[#0A0A0F] via-[#0A0A0F]/60 to-transparent opacity-80 group-hover:opacity-90 transition-opacity"></div>
                    </div>

                    <div class="absolute inset-0 z-10 p-6 md:p-8 flex flex-col justify-end">
                        <div class="flex justify-between items-end">
                            <div class="max-w-[80%]">
                                <div class="flex items-center gap-2 mb-2 text-primary/80 font-mono text-[10px] uppercase tracking-widest font-bold">
                                    {activity.date}
                                </div>
                                <h3 class="text-xl md:text-2xl font-bold font-display text-white group-hover:text-primary transition-colors leading-tight mb-2">
                                    {activity.title}
                                </h3>
                                <p class="text-gray-400 text-sm line-clamp-2 font-light leading-relaxed group-hover:text-gray-300 transition-colors">
                                    {activity.description}
                                </p>
                            </div>

                            <div class="w-10 h-10 rounded-full bg-white/10 backdrop-blur-md border border-white/20 flex items-center justify-center text-white group-hover:bg-primary group-hover:border-primary transition-all duration-300 group-hover:scale-110 mb-1">
                                "⤢"
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id="activities"
            node_ref=refs.activities
            class="py-24 md:py-32 relative overflow-hidden bg-transparent"
        >
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[1000px] h-[1000px] bg-primary/5 rounded-full blur-[140px] pointer-events-none"></div>
            <div class="absolute -top-24 -right-24 w-96 h-96 bg-secondary/5 rounded-full blur-[120px] pointer-events-none"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="mb-20 text-center">
                    <div class="flex flex-col items-center">
                        <div class="flex items-center gap-4 mb-6">
                            <span class="w-12 h-px bg-secondary/50"></span>
                            <span class="text-secondary font-mono text-sm font-bold tracking-[0.4em] uppercase">
                                "Activities"
                            </span>
                            <span class="w-12 h-px bg-secondary/50"></span>
                        </div>
                        <h2 class="text-5xl md:text-7xl font-display font-black text-white leading-[1.1] mb-8 uppercase tracking-tight">
                            "COMMUNITY" <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary via-secondary to-primary animate-gradient text-glow">
                                "& IMPACT."
                            </span>
                        </h2>
                        <p class="text-gray-400 max-w-2xl text-lg font-light leading-relaxed">
                            "A collection of documentation of academic activities, organizations, and workshops"
                        </p>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-12 gap-4 md:gap-6 auto-rows-fr md:auto-rows-[250px]">
                    {cards}
                </div>
            </div>

            {move || {
                selected()
                    .map(|activity| {
                        view! {
                            <ActivityModal activity on_close=move |_| set_selected(None) />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ActivityModal(
    activity: &'static Activity,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let details = activity
        .details
        .iter()
        .map(|detail| {
            view! {
                <li class="flex items-start gap-3">
                    <span class="w-1.5 h-1.5 rounded-full bg-primary mt-2 shrink-0"></span>
                    <span class="text-sm">{*detail}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 md:p-8">
            // backdrop closes the modal
            <div
                class="absolute inset-0 bg-black/90 backdrop-blur-xl"
                on:click=move |_| on_close.run(())
            ></div>

            <div class="relative w-full max-w-5xl bg-[#0F0F1A] border border-white/10 rounded-[2.5rem] overflow-hidden shadow-2xl z-10 flex flex-col md:flex-row h-auto max-h-[90vh]">
                <div class="md:w-1/2 relative overflow-hidden h-64 md:h-auto">
                    <img src=activity.image alt=activity.title class="w-full h-full object-cover" />
                    <div class="absolute inset-0 bg-gradient-to-t from-[#0F0F1A] via-transparent to-transparent md:bg-gradient-to-r"></div>
                </div>

                <div class="md:w-1/2 p-8 md:p-12 overflow-y-auto">
                    <button
                        class="absolute top-6 right-6 p-3 rounded-full bg-white/5 border border-white/10 text-white hover:bg-white/10 transition-colors z-20"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>

                    <div class="flex items-center gap-3 mb-6">
                        <span class="px-3 py-1 bg-primary/20 text-primary rounded-full text-[10px] font-mono font-bold uppercase tracking-widest border border-primary/20">
                            "Activity Detail"
                        </span>
                        <div class="flex items-center gap-2 text-gray-500 font-mono text-[10px] italic">
                            {activity.date}
                        </div>
                    </div>

                    <h2 class="text-3xl md:text-4xl font-black font-display text-white mb-6 leading-tight">
                        {activity.title}
                    </h2>

                    <div class="space-y-6 text-gray-400 font-light leading-relaxed text-lg">
                        <p>{activity.description}</p>
                        <div class="pt-6 border-t border-white/5">
                            <h4 class="text-white font-bold mb-4 flex items-center gap-2">
                                <span class="w-6 h-px bg-primary"></span>
                                "Key Contributions"
                            </h4>
                            <ul class="space-y-3">{details}</ul>
                        </div>
                    </div>

                    <div class="mt-12 flex flex-wrap gap-4">
                        <div class="flex items-center gap-2 text-white/40 text-xs italic">
                            {activity.location}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
