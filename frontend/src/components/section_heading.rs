use yew::prelude::*;

use crate::content::heading_words;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Center,
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let align_class = match props.align {
        Align::Center => "align-center",
        Align::Left => "align-left",
    };

    html! {
        <div class={classes!("section-heading", align_class)}>
            <style>
                {r#"
                    .section-heading {
                        margin-bottom: 3rem;
                    }
                    .section-heading.align-center {
                        text-align: center;
                    }
                    .section-heading.align-left {
                        text-align: left;
                    }
                    .section-heading .eyebrow {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(0, 107, 63, 0.1);
                        border: 1px solid #006B3F;
                        color: #006B3F;
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .section-heading h2 {
                        font-family: 'Outfit', sans-serif;
                        font-size: 3rem;
                        font-weight: 700;
                        line-height: 1.2;
                        color: #fff;
                        margin: 0;
                    }
                    .section-heading .accent {
                        color: #FDC500;
                    }
                    .section-heading .underline {
                        height: 4px;
                        width: 6rem;
                        margin-top: 1.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #006B3F, #FDC500);
                    }
                    .section-heading.align-center .underline {
                        margin-left: auto;
                        margin-right: auto;
                    }
                    @media (max-width: 768px) {
                        .section-heading h2 {
                            font-size: 1.875rem;
                        }
                    }
                "#}
            </style>
            <span class="eyebrow">{ props.subtitle.clone() }</span>
            <h2>
                {
                    heading_words(&props.title).into_iter().map(|(word, accent)| {
                        html! {
                            <span class={classes!(accent.then(|| "accent"))}>
                                { word.to_string() }{" "}
                            </span>
                        }
                    }).collect::<Html>()
                }
            </h2>
            <div class="underline"></div>
        </div>
    }
}
