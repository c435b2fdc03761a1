use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos_use::{use_mouse, use_window_size, UseMouseReturn, UseWindowSizeReturn};

/// Pupil offset for the mascot: the pointer's position across the window,
/// mapped to `-limit..limit` pixels. Degenerate window sizes pin the eyes
/// to the center.
pub fn eye_offset(current: f64, window_size: f64, limit: f64) -> f64 {
    if window_size <= 0.0 {
        return 0.0;
    }
    let percentage = (current / window_size * 2.0 - 1.0).clamp(-1.0, 1.0);
    percentage * limit
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortalStatus {
    Idle,
    Connecting,
    Connected,
}

/// Entry overlay shown before the page content, dismissed by the visitor.
#[component]
pub fn Welcome(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let (status, set_status) = signal(PortalStatus::Idle);

    let connect = move |_| {
        if status.get_untracked() != PortalStatus::Idle {
            return;
        }
        set_status(PortalStatus::Connecting);
        set_timeout(
            move || {
                set_status(PortalStatus::Connected);
                set_timeout(move || on_complete.run(()), Duration::from_millis(800));
            },
            Duration::from_secs(2),
        );
    };

    view! {
        <div class="fixed inset-0 z-[100] bg-[#050505] flex flex-col items-center justify-center font-display overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -inset-[100%] border-t border-b border-primary/20 grid-floor"></div>
                <div class="absolute inset-0 bg-gradient-to-t from-[#050505] via-[#050505]/50 to-transparent"></div>
            </div>

            <div class="relative z-10 flex flex-col items-center">
                <DevBot />

                <div class="text-center mb-8">
                    <h1 class="text-4xl md:text-5xl font-bold text-white mb-2 tracking-tight">
                        "Welcome to "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary">
                            "Nazwa's Portal"
                        </span>
                    </h1>
                    <p class="text-gray-400 font-light text-lg">
                        "Frontend Developer & UI/UX Designer"
                    </p>
                </div>

                <button
                    on:click=connect
                    disabled=move || status() != PortalStatus::Idle
                    class=move || {
                        match status() {
                            PortalStatus::Idle => {
                                "relative overflow-hidden px-8 py-3 rounded-full font-bold text-lg transition-all shadow-xl flex items-center gap-3 bg-gradient-to-r from-primary to-accent text-white hover:shadow-primary/50 cursor-pointer"
                            }
                            PortalStatus::Connecting => {
                                "relative overflow-hidden px-8 py-3 rounded-full font-bold text-lg transition-all shadow-xl flex items-center gap-3 bg-white/10 text-white"
                            }
                            PortalStatus::Connected => {
                                "relative overflow-hidden px-8 py-3 rounded-full font-bold text-lg transition-all shadow-xl flex items-center gap-3 bg-green-500 text-white cursor-default"
                            }
                        }
                    }
                >
                    <span class="relative z-10 flex items-center gap-2">
                        {move || {
                            match status() {
                                PortalStatus::Idle => "▶ Enter Universe",
                                PortalStatus::Connecting => "Loading System...",
                                PortalStatus::Connected => "Access Granted",
                            }
                        }}
                    </span>
                </button>
            </div>
        </div>
    }
}

/// Robot mascot whose eyes follow the pointer.
#[component]
fn DevBot() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let UseWindowSizeReturn { width, height } = use_window_size();

    let eyes = move || {
        format!(
            "translate({} {})",
            eye_offset(x(), width(), 6.0),
            eye_offset(y(), height(), 6.0),
        )
    };

    view! {
        <div class="relative w-48 h-48 md:w-64 md:h-64 mb-8 float-slow">
            <div class="absolute inset-0 bg-[#A78BFA] opacity-20 blur-[60px] rounded-full animate-pulse"></div>

            <svg viewBox="0 0 200 200" class="w-full h-full drop-shadow-2xl">
                // antennas
                <line x1="60" y1="60" x2="40" y2="30" stroke="#A78BFA" stroke-width="4"></line>
                <circle cx="40" cy="30" r="6" fill="#F472B6" class="animate-pulse"></circle>
                <line x1="140" y1="60" x2="160" y2="30" stroke="#A78BFA" stroke-width="4"></line>
                <circle cx="160" cy="30" r="6" fill="#F472B6" class="animate-pulse"></circle>

                // head and face screen
                <rect
                    x="40"
                    y="60"
                    width="120"
                    height="100"
                    rx="30"
                    fill="#1F2937"
                    stroke="#A78BFA"
                    stroke-width="4"
                ></rect>
                <rect x="55" y="80" width="90" height="60" rx="15" fill="#0F172A"></rect>

                // eyes
                <g transform="translate(75, 100)">
                    <rect x="0" y="0" width="20" height="25" rx="5" fill="#A78BFA" opacity="0.3"></rect>
                    <rect
                        x="0"
                        y="0"
                        width="20"
                        height="25"
                        rx="5"
                        fill="#A78BFA"
                        transform=eyes
                    ></rect>
                </g>
                <g transform="translate(105, 100)">
                    <rect x="0" y="0" width="20" height="25" rx="5" fill="#A78BFA" opacity="0.3"></rect>
                    <rect
                        x="0"
                        y="0"
                        width="20"
                        height="25"
                        rx="5"
                        fill="#A78BFA"
                        transform=eyes
                    ></rect>
                </g>

                // mouth
                <path
                    d="M 85 150 Q 100 155 115 150"
                    stroke="#A78BFA"
                    stroke-width="3"
                    fill="transparent"
                    stroke-linecap="round"
                ></path>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_keeps_eyes_centered() {
        assert_eq!(eye_offset(500.0, 1000.0, 6.0), 0.0);
    }

    #[test]
    fn pointer_at_edges_reaches_the_limit() {
        assert_eq!(eye_offset(0.0, 1000.0, 6.0), -6.0);
        assert_eq!(eye_offset(1000.0, 1000.0, 6.0), 6.0);
    }

    #[test]
    fn pointer_outside_window_is_clamped() {
        assert_eq!(eye_offset(1500.0, 1000.0, 6.0), 6.0);
        assert_eq!(eye_offset(-200.0, 1000.0, 6.0), -6.0);
    }

    #[test]
    fn zero_window_size_pins_eyes_to_center() {
        assert_eq!(eye_offset(300.0, 0.0, 6.0), 0.0);
    }
}
