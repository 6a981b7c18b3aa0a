use yew::prelude::*;

use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct SvgIconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    /// Fill the glyph with the current color as well as stroking it.
    #[prop_or(false)]
    pub filled: bool,
}

/// Inner SVG nodes for each icon on a 24x24 grid.
fn glyph(icon: Icon) -> Html {
    match icon {
        Icon::Video => html! {
            <>
                <path d="m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5" />
                <rect x="2" y="6" width="14" height="12" rx="2" />
            </>
        },
        Icon::Palette => html! {
            <>
                <circle cx="13.5" cy="6.5" r=".5" />
                <circle cx="17.5" cy="10.5" r=".5" />
                <circle cx="8.5" cy="7.5" r=".5" />
                <circle cx="6.5" cy="12.5" r=".5" />
                <path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" />
            </>
        },
        Icon::Smartphone => html! {
            <>
                <rect x="5" y="2" width="14" height="20" rx="2" ry="2" />
                <path d="M12 18h.01" />
            </>
        },
        Icon::Zap => html! {
            <path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z" />
        },
        Icon::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
        Icon::TrendingUp => html! {
            <>
                <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
                <polyline points="16 7 22 7 22 13" />
            </>
        },
        Icon::Instagram => html! {
            <>
                <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
            </>
        },
        Icon::Mail => html! {
            <>
                <rect x="2" y="4" width="20" height="16" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
        Icon::Phone => html! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        },
        Icon::Menu => html! {
            <>
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        Icon::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
        Icon::ArrowRight => html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        },
        Icon::Play => html! {
            <polygon points="5 3 19 12 5 21 5 3" />
        },
        Icon::Aperture => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <line x1="14.31" x2="20.05" y1="8" y2="17.94" />
                <line x1="9.69" x2="21.17" y1="8" y2="8" />
                <line x1="7.38" x2="13.12" y1="12" y2="2.06" />
                <line x1="9.69" x2="3.95" y1="16" y2="6.06" />
                <line x1="14.31" x2="2.83" y1="16" y2="16" />
                <line x1="16.62" x2="10.88" y1="12" y2="21.94" />
            </>
        },
    }
}

#[function_component(SvgIcon)]
pub fn svg_icon(props: &SvgIconProps) -> Html {
    let size = props.size.to_string();
    let fill = if props.filled { "currentColor" } else { "none" };

    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { glyph(props.icon) }
        </svg>
    }
}
