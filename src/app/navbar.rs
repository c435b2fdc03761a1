use leptos::prelude::*;
use leptos_use::{use_intersection_observer, use_window_scroll};

use super::SectionRefs;

const NAV_LINKS: [(&str, &str, &str); 6] = [
    ("Home", "#home", "home"),
    ("About", "#about", "about"),
    ("Skills", "#skills", "skills"),
    ("Projects", "#projects", "projects"),
    ("Activities", "#activities", "activities"),
    ("Contact", "#contact", "contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let refs = expect_context::<SectionRefs>();
    let (is_open, set_is_open) = signal(false);
    let (active, set_active) = signal("home".to_string());

    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y() > 20.0;

    // Highlight the link of whichever section is in view.
    for section in refs.all() {
        use_intersection_observer(section, move |entries, _| {
            if let Some(entry) = entries.first() {
                if entry.is_intersecting() {
                    set_active(entry.target().id());
                }
            }
        });
    }

    let desktop_links = NAV_LINKS
        .iter()
        .map(|&(name, href, id)| {
            let is_active = move || active() == id;
            view! {
                <a
                    href=href
                    class=move || {
                        if is_active() {
                            "relative group font-medium transition-all duration-300 text-primary"
                        } else {
                            "relative group font-medium transition-all duration-300 text-gray-300 hover:text-white"
                        }
                    }
                >
                    {name}
                    <span class=move || {
                        if is_active() {
                            "absolute -bottom-1 left-0 h-0.5 bg-gradient-to-r from-primary to-secondary transition-all duration-300 w-full opacity-100"
                        } else {
                            "absolute -bottom-1 left-0 h-0.5 bg-gradient-to-r from-primary to-secondary transition-all duration-300 w-0 opacity-0 group-hover:w-full group-hover:opacity-100"
                        }
                    }></span>
                </a>
            }
        })
        .collect_view();

    let mobile_links = move || {
        NAV_LINKS
            .iter()
            .map(|&(name, href, _)| {
                view! {
                    <a
                        href=href
                        class="text-gray-300 hover:text-primary font-medium text-lg"
                        on:click=move |_| set_is_open(false)
                    >
                        {name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if scrolled() {
                "fixed w-full z-50 transition-all duration-300 glass-nav py-4"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent py-6"
            }
        }>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a
                    href="#"
                    class="text-2xl font-bold font-display bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent"
                >
                    "Nazwa Yulianti M"
                </a>

                <div class="hidden md:flex space-x-8 items-center">
                    {desktop_links}
                    <div class="flex gap-4 pl-4 border-l border-white/10">
                        <a
                            href="https://github.com/nazwaym"
                            target="_blank"
                            rel="noreferrer"
                            class="text-gray-400 hover:text-primary transition-colors text-xl"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-original"></i>
                        </a>
                        <a
                            href="https://www.linkedin.com/in/nazwa-yulianti-munjana-89775b2b4/"
                            target="_blank"
                            rel="noreferrer"
                            class="text-gray-400 hover:text-secondary transition-colors text-xl"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                    </div>
                </div>

                <button
                    class="md:hidden text-white text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_is_open(!is_open.get_untracked())
                >
                    {move || if is_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || is_open()>
                <div class="md:hidden bg-[#0F0F1A] border-b border-white/10 overflow-hidden">
                    <div class="flex flex-col items-center py-8 space-y-6">{mobile_links}</div>
                </div>
            </Show>
        </nav>
    }
}
