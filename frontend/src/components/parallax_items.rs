use yew::prelude::*;

use crate::motion::{Layer, PointerOffset};
use crate::timecode::format_timecode;

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub offset: PointerOffset,
}

// Frame count shown on the clapperboard slate (00:01:24:12 at 24fps).
const SLATE_FRAMES: u64 = 84 * 24 + 12;

const SLATE_STRIPES: &str = "background-image: linear-gradient(110deg, #1a1a1a 25%, transparent 25%, transparent 50%, #1a1a1a 50%, #1a1a1a 75%, transparent 75%, transparent); background-size: 36px 36px;";

fn layer_style(layer: Layer, offset: PointerOffset) -> String {
    format!("transform: {};", layer.css(offset))
}

/// Decorative props floating behind the hero copy. Each one drifts with the
/// pointer at its own depth.
#[function_component(ParallaxFloatingItems)]
pub fn parallax_floating_items(props: &ParallaxProps) -> Html {
    let offset = props.offset;

    html! {
        <div class="parallax-items">
            <style>
                {r#"
                    .parallax-items {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                        overflow: hidden;
                    }
                    .film-strip {
                        position: absolute;
                        top: -50px;
                        left: 2.5rem;
                        width: 6rem;
                        height: 120%;
                        opacity: 0.1;
                        transition: transform 0.3s ease-out;
                    }
                    .film-strip-inner {
                        width: 100%;
                        height: 100%;
                        background: #000;
                        border-left: 4px dashed #374151;
                        border-right: 4px dashed #374151;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 0;
                    }
                    .film-frame {
                        margin: 0 0.5rem;
                        height: 8rem;
                        flex-shrink: 0;
                        background: #1f2937;
                        border-radius: 0.25rem;
                        opacity: 0.5;
                    }
                    .microphone {
                        position: absolute;
                        top: 20%;
                        left: 5%;
                        opacity: 0.3;
                        transition: transform 0.2s ease-out;
                    }
                    .mic-head {
                        width: 4rem;
                        height: 8rem;
                        background: linear-gradient(to right, #1f2937, #000);
                        border-radius: 9999px;
                        border: 1px solid #4b5563;
                        position: relative;
                        overflow: hidden;
                    }
                    .mic-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.4;
                        background-image: radial-gradient(circle, #888 1px, transparent 1px);
                        background-size: 4px 4px;
                    }
                    .mic-handle {
                        margin: -0.5rem auto 0;
                        width: 1.5rem;
                        height: 10rem;
                        background: #111827;
                        border-left: 1px solid #374151;
                        border-right: 1px solid #374151;
                    }
                    .clapperboard {
                        position: absolute;
                        bottom: 15%;
                        right: 5%;
                        width: 14rem;
                        opacity: 0.8;
                        transition: transform 0.1s ease-out;
                    }
                    .clapper-top {
                        position: absolute;
                        top: -1.75rem;
                        left: 0;
                        width: 100%;
                        height: 2rem;
                        background-color: #fff;
                        border: 2px solid #000;
                        transform: rotate(-15deg);
                        transform-origin: bottom left;
                        animation: clapper-pulse 4s infinite;
                    }
                    @keyframes clapper-pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    .clapper-bar {
                        width: 100%;
                        height: 2rem;
                        background-color: #fff;
                        border: 2px solid #000;
                    }
                    .clapper-body {
                        height: 10rem;
                        background: #1a1a1a;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        border: 2px solid rgba(255, 255, 255, 0.2);
                        border-radius: 0 0 0.375rem 0.375rem;
                        font-family: monospace;
                        color: #fff;
                    }
                    .slate-header {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.75rem;
                        opacity: 0.6;
                        letter-spacing: 0.05em;
                    }
                    .slate-timecode {
                        text-align: center;
                    }
                    .slate-timecode .label {
                        color: #FDC500;
                        font-size: 0.75rem;
                        margin-bottom: 0.25rem;
                    }
                    .slate-timecode .value {
                        display: inline-block;
                        font-size: 1.875rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.25rem;
                        padding: 0.25rem 0.5rem;
                    }
                    .slate-cells {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.5rem;
                        text-align: center;
                        margin-top: 0.5rem;
                    }
                    .slate-cell {
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 0.25rem;
                        background: rgba(0, 0, 0, 0.3);
                        padding: 0.25rem;
                    }
                    .slate-cell .label {
                        font-size: 8px;
                        text-transform: uppercase;
                        color: #006B3F;
                    }
                    .slate-cell .value {
                        font-size: 1.125rem;
                        font-weight: 700;
                    }
                    .focus-reticle {
                        position: absolute;
                        top: 33%;
                        left: 33%;
                        width: 6rem;
                        height: 6rem;
                        border: 1px solid rgba(0, 107, 63, 0.2);
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0.4;
                        transition: transform 0.5s;
                    }
                    .focus-reticle .h-line {
                        width: 100%;
                        height: 1px;
                        background: rgba(0, 107, 63, 0.2);
                    }
                    .focus-reticle .v-line {
                        position: absolute;
                        height: 100%;
                        width: 1px;
                        background: rgba(0, 107, 63, 0.2);
                    }
                    .focus-reticle .mode {
                        position: absolute;
                        top: 0;
                        right: 0;
                        font-size: 8px;
                        font-family: monospace;
                        color: #006B3F;
                    }
                    .lens-glow-orb {
                        position: absolute;
                        bottom: 25%;
                        left: 50%;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: linear-gradient(to top right, rgba(59, 130, 246, 0.1), rgba(168, 85, 247, 0.1));
                        filter: blur(24px);
                        transition: transform 0.3s;
                    }
                    @media (max-width: 768px) {
                        .film-strip {
                            left: -2.5rem;
                        }
                        .microphone, .clapperboard {
                            display: none;
                        }
                    }
                "#}
            </style>

            <div class="film-strip" style={layer_style(Layer::FilmStrip, offset)}>
                <div class="film-strip-inner">
                    { (0..12).map(|i| html! { <div key={i.to_string()} class="film-frame"></div> }).collect::<Html>() }
                </div>
            </div>

            <div class="microphone" style={layer_style(Layer::Microphone, offset)}>
                <div class="mic-head">
                    <div class="mic-grid"></div>
                </div>
                <div class="mic-handle"></div>
            </div>

            <div class="clapperboard" style={layer_style(Layer::Clapperboard, offset)}>
                <div class="clapper-top" style={SLATE_STRIPES}></div>
                <div class="clapper-bar" style={SLATE_STRIPES}></div>
                <div class="clapper-body">
                    <div class="slate-header">
                        <span>{"PROD. ADMOX"}</span>
                        <span>{"DIR. CREATIVE"}</span>
                    </div>
                    <div class="slate-timecode">
                        <div class="label">{"TIMECODE"}</div>
                        <div class="value">{ format_timecode(SLATE_FRAMES) }</div>
                    </div>
                    <div class="slate-cells">
                        { for [("Scene", "24"), ("Take", "3"), ("Cam", "A")].iter().map(|(label, value)| html! {
                            <div class="slate-cell">
                                <div class="label">{ *label }</div>
                                <div class="value">{ *value }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="focus-reticle" style={layer_style(Layer::FocusReticle, offset)}>
                <div class="h-line"></div>
                <div class="v-line"></div>
                <div class="mode">{"AF-C"}</div>
            </div>

            <div class="lens-glow-orb" style={layer_style(Layer::LensGlow, offset)}></div>
        </div>
    }
}
