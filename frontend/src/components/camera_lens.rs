use yew::prelude::*;

use crate::motion::{compute_focus_transform, FOCUS_NEUTRAL};

#[derive(Properties, PartialEq)]
pub struct CameraLensProps {
    /// Focus distance in `[0, 100]`; 50 is sharp.
    #[prop_or(FOCUS_NEUTRAL)]
    pub focus: f64,
}

#[function_component(CameraLens)]
pub fn camera_lens(props: &CameraLensProps) -> Html {
    let focus = compute_focus_transform(props.focus);
    let barrel_style = format!("transform: {};", focus.barrel_css());
    let glass_style = format!(
        "transform: {}; filter: {};",
        focus.glass_css(),
        focus.filter_css()
    );

    html! {
        <div class="camera-lens">
            <style>
                {r#"
                    .camera-lens {
                        position: relative;
                        width: 24rem;
                        height: 24rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        animation: lens-float 6s ease-in-out infinite;
                    }
                    @media (max-width: 768px) {
                        .camera-lens {
                            width: 16rem;
                            height: 16rem;
                        }
                    }
                    @keyframes lens-float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    @keyframes lens-spin {
                        from { transform: rotate(0deg); }
                        to { transform: rotate(360deg); }
                    }
                    @keyframes lens-glow {
                        0%, 100% { opacity: 1; box-shadow: 0 0 20px rgba(253, 197, 0, 0.4); }
                        50% { opacity: 0.6; box-shadow: 0 0 40px rgba(253, 197, 0, 0.7); }
                    }
                    .lens-body {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom right, #1f2937, #000);
                        border-radius: 1.5rem;
                        transform: rotate(3deg);
                        border: 1px solid #374151;
                        opacity: 0.8;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .lens-barrel {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        height: 100%;
                        border-radius: 50%;
                        background: linear-gradient(to bottom, #111827, #000);
                        box-shadow: 0 0 50px rgba(0, 0, 0, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border: 4px solid #1f2937;
                        transition: transform 0.3s ease-out;
                    }
                    .lens-grip {
                        position: absolute;
                        inset: 0.5rem;
                        border-radius: 50%;
                        border: 2px dashed #374151;
                        opacity: 0.3;
                        animation: lens-spin 12s linear infinite;
                    }
                    .lens-middle {
                        width: 85%;
                        height: 85%;
                        border-radius: 50%;
                        background: linear-gradient(to bottom right, #1f2937, rgba(0, 107, 63, 0.2), #000);
                        border: 1px solid #374151;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .lens-glass {
                        width: 70%;
                        height: 70%;
                        border-radius: 50%;
                        background: linear-gradient(to top right, #111827, #000, #1f2937);
                        border: 8px solid #111827;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        transition: transform 0.3s ease-out, filter 0.3s ease-out;
                    }
                    .aperture {
                        position: absolute;
                        inset: 0;
                        background: #000;
                        opacity: 0.6;
                    }
                    .aperture .blade {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        width: 100%;
                        height: 100%;
                        border-left: 2px solid #1f2937;
                        transform-origin: bottom left;
                    }
                    .lens-sensor {
                        position: relative;
                        z-index: 20;
                        width: 30%;
                        height: 30%;
                        border-radius: 50%;
                        background: linear-gradient(to bottom right, rgba(253, 197, 0, 0.4), #000);
                        animation: lens-glow 3s ease-in-out infinite;
                    }
                    .lens-glare {
                        position: absolute;
                        top: 2.5rem;
                        left: 2.5rem;
                        width: 2rem;
                        height: 1rem;
                        background: #fff;
                        opacity: 0.1;
                        border-radius: 9999px;
                        transform: rotate(-45deg);
                        filter: blur(4px);
                    }
                    .lens-tag {
                        position: absolute;
                        font-size: 0.75rem;
                        font-weight: 700;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                    }
                    .lens-tag.rec {
                        right: -1rem;
                        top: 25%;
                        background: #FDC500;
                        color: #000;
                        transform: rotate(12deg);
                    }
                    .lens-tag.hdr {
                        left: -1rem;
                        bottom: 25%;
                        background: #006B3F;
                        color: #fff;
                        transform: rotate(-12deg);
                    }
                "#}
            </style>
            <div class="lens-body"></div>
            <div class="lens-barrel" style={barrel_style}>
                <div class="lens-grip"></div>
                <div class="lens-middle">
                    <div class="lens-glass" style={glass_style}>
                        <div class="aperture">
                            {
                                (0..6).map(|i| {
                                    let style = format!("transform: rotate({}deg);", i * 60);
                                    html! { <div key={i.to_string()} class="blade" style={style}></div> }
                                }).collect::<Html>()
                            }
                        </div>
                        <div class="lens-sensor"></div>
                        <div class="lens-glare"></div>
                    </div>
                </div>
            </div>
            <div class="lens-tag rec">{"REC"}</div>
            <div class="lens-tag hdr">{"4K HDR"}</div>
        </div>
    }
}
