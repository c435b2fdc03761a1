mod about;
mod activities;
mod contact;
mod footer;
mod hero;
mod homepage;
mod navbar;
mod projects;
mod skills;
mod tilt;
mod typing;
mod welcome;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_mouse, UseMouseReturn};

use footer::Footer;
use homepage::HomePage;
use navbar::Navbar;
use welcome::Welcome;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans text-gray-200 bg-[#0A0A0F] overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

/// NodeRefs for the page's anchor sections, provided as context so the
/// navbar can observe which one is currently in view.
#[derive(Clone, Copy, Default)]
pub struct SectionRefs {
    pub home: NodeRef<html::Section>,
    pub about: NodeRef<html::Section>,
    pub skills: NodeRef<html::Section>,
    pub projects: NodeRef<html::Section>,
    pub activities: NodeRef<html::Section>,
    pub contact: NodeRef<html::Section>,
}

impl SectionRefs {
    pub fn all(&self) -> [NodeRef<html::Section>; 6] {
        [
            self.home,
            self.about,
            self.skills,
            self.projects,
            self.activities,
            self.contact,
        ]
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SectionRefs::default());

    let (show_welcome, set_show_welcome) = signal(true);

    let UseMouseReturn { x, y, .. } = use_mouse();
    let spotlight = move || {
        format!(
            "background: radial-gradient(600px circle at {}px {}px, rgba(167, 139, 250, 0.08), transparent 40%)",
            x(),
            y(),
        )
    };

    view! {
        // sets the document title
        <Title formatter=|title| format!("Nazwa Yulianti M - {title}") />

        <Router>
            <Show when=move || show_welcome()>
                <Welcome on_complete=move |_| set_show_welcome(false) />
            </Show>

            <Background />

            // global spotlight following the pointer
            <div
                class="pointer-events-none fixed inset-0 z-50 transition-opacity duration-300"
                style=spotlight
            ></div>

            <div class="relative z-10 flex flex-col">
                <Navbar />
                <main class="flex flex-col flex-grow">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Background() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 overflow-hidden bg-[#0A0A0F]">
            // soft mesh gradients
            <div class="absolute top-[-20%] left-[-10%] w-[60%] h-[60%] bg-primary/5 rounded-full blur-[140px] animate-blob pointer-events-none"></div>
            <div class="absolute bottom-[-20%] right-[-10%] w-[70%] h-[70%] bg-secondary/5 rounded-full blur-[140px] animate-blob animation-delay-2000 pointer-events-none"></div>
            <div class="absolute top-[30%] left-[20%] w-[40%] h-[40%] bg-accent/3 rounded-full blur-[100px] animate-blob animation-delay-4000 pointer-events-none"></div>
            <div class="absolute inset-0 bg-gradient-to-b from-[#0A0A0F]/50 via-transparent to-[#0A0A0F]/50 pointer-events-none"></div>
        </div>
    }
}
