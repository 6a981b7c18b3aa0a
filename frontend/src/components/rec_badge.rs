use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::timecode::format_clock;

/// Blinking "REC" pill whose clock counts up from mount.
#[function_component(RecBadge)]
pub fn rec_badge() -> Html {
    let elapsed = use_state(|| 1u64);

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |_| {
                // the handle captured here is a snapshot, so count locally
                let mut seconds = *elapsed;
                let interval = Interval::new(1000, move || {
                    seconds += 1;
                    elapsed.set(seconds);
                });
                // Dropping the interval cancels it
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="rec-badge">
            <style>
                {r#"
                    .rec-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                    }
                    .rec-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #dc2626;
                        box-shadow: 0 0 10px red;
                        animation: rec-blink 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    @keyframes rec-blink {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    .rec-label {
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #d1d5db;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-variant-numeric: tabular-nums;
                    }
                "#}
            </style>
            <span class="rec-dot"></span>
            <span class="rec-label">{ format!("REC \u{2022} {}", format_clock(*elapsed)) }</span>
        </div>
    }
}
