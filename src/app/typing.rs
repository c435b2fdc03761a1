use leptos::prelude::*;

use crate::typewriter::TypewriterConfig;

/// Typewriter signal for a rotating line of text.
///
/// The engine lives behind a single rearming timeout: each firing runs one
/// transition, publishes the new snapshot through the returned signal, and
/// schedules the next firing with whatever delay the state machine asks
/// for. Server-rendered markup shows the pre-start text (empty); the loop
/// starts on hydration and is stopped on cleanup so no stale timer fires
/// into a torn-down reactive graph.
#[cfg(feature = "hydrate")]
pub fn use_typewriter(phrases: &[&str], config: TypewriterConfig) -> ReadSignal<String> {
    use crate::typewriter::Typewriter;

    let engine = Typewriter::new(phrases.iter().map(|s| s.to_string()).collect(), config)
        .expect("phrase rotation should not be empty");
    dom::run_typewriter(engine)
}

#[cfg(not(feature = "hydrate"))]
pub fn use_typewriter(phrases: &[&str], config: TypewriterConfig) -> ReadSignal<String> {
    let _ = (phrases, config);
    let (text, _) = signal(String::new());
    text
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
    use leptos::prelude::*;

    use crate::typewriter::{Timer, Typewriter, TypewriterRunner};

    type SharedRunner = Arc<Mutex<TypewriterRunner<DomTimer>>>;
    type RunnerSlot = StoredValue<Option<SharedRunner>, LocalStorage>;

    /// Copyable handles the timeout closure needs to reach back into the
    /// runner that armed it.
    #[derive(Clone, Copy)]
    struct FireCtx {
        runner: RunnerSlot,
        set_text: WriteSignal<String>,
    }

    /// Single-shot `window.setTimeout` timer. At most one handle is ever
    /// outstanding; arming clears the previous one first.
    struct DomTimer {
        pending: Option<TimeoutHandle>,
        ctx: FireCtx,
    }

    impl Timer for DomTimer {
        fn arm(&mut self, delay: Duration) {
            self.cancel();
            let ctx = self.ctx;
            if let Ok(handle) = set_timeout_with_handle(move || fire(ctx), delay) {
                self.pending = Some(handle);
            }
        }

        fn cancel(&mut self) {
            if let Some(handle) = self.pending.take() {
                handle.clear();
            }
        }
    }

    fn fire(ctx: FireCtx) {
        let Some(runner) = ctx.runner.try_get_value().flatten() else {
            return;
        };
        let mut runner = runner
            .lock()
            .expect("should be able to lock typewriter runner");
        runner.timer_fired();
        ctx.set_text.set(runner.current_text().to_owned());
    }

    pub fn run_typewriter(engine: Typewriter) -> ReadSignal<String> {
        let (text, set_text) = signal(String::new());
        let slot: RunnerSlot = StoredValue::new_local(None);
        let timer = DomTimer {
            pending: None,
            ctx: FireCtx {
                runner: slot,
                set_text,
            },
        };
        slot.set_value(Some(Arc::new(Mutex::new(TypewriterRunner::new(
            engine, timer,
        )))));

        if let Some(runner) = slot.get_value() {
            runner
                .lock()
                .expect("should be able to lock typewriter runner")
                .start();
        }
        on_cleanup(move || {
            if let Some(runner) = slot.try_get_value().flatten() {
                runner
                    .lock()
                    .expect("should be able to lock typewriter runner")
                    .stop();
            }
        });

        text
    }
}
