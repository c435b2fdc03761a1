use leptos::prelude::*;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-[#0b0b14] py-12 border-t border-white/5 relative z-10">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center">
                <div class="mb-4 md:mb-0 text-center md:text-left">
                    <h3 class="text-xl font-bold font-display text-white mb-1">
                        "Nazwa" <span class="text-secondary">" Yulianti M"</span>
                    </h3>
                    <p class="text-xs text-gray-600 font-mono">"built " {BUILD_TIME}</p>
                </div>

                <div class="flex space-x-6 text-2xl">
                    <a
                        href="https://github.com/nazwaym"
                        class="text-gray-400 hover:text-primary transition-colors hover:scale-110 transform"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-original"></i>
                    </a>
                    <a
                        href="https://www.linkedin.com/in/nazwa-yulianti-munjana-89775b2b4/"
                        class="text-gray-400 hover:text-secondary transition-colors hover:scale-110 transform"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
