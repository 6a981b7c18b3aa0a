use yew::prelude::*;

#[function_component(AdmoxLogo)]
pub fn admox_logo() -> Html {
    html! {
        <svg viewBox="0 0 100 110" class="admox-logo" fill="none" xmlns="http://www.w3.org/2000/svg">
            // right leg and top arch
            <path d="M 45 20 L 62 5 L 90 95 L 70 95 L 56 40 Z" fill="#FDC500" />
            <path d="M 15 95 L 45 20 L 56 40 L 32 105 Z" fill="#006B3F" />
            <g transform="translate(30, 98) rotate(-68)">
                <text x="0" y="0" font-size="10" font-weight="900" fill="white" font-family="sans-serif" style="text-shadow: 0px 1px 2px rgba(0,0,0,0.3);">{"ADMOX"}</text>
                <text x="0.2" y="5" font-size="4" font-weight="700" fill="white" font-family="sans-serif" letter-spacing="0.8" opacity="0.95">{"MEDIA"}</text>
            </g>
        </svg>
    }
}
