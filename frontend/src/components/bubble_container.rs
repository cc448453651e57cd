use yew::prelude::*;
use gloo_timers::callback::Interval;
use crate::animation::field::BubbleField;
use crate::components::floating_bubble::FloatingBubble;
use crate::config::AnimationConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct BubbleContainerProps {
    #[prop_or_default]
    pub config: AnimationConfig,
}

/// Owns the bubbles of the hero: an initial batch on mount, one more per
/// interval tick, and nothing after unmount.
#[function_component(BubbleContainer)]
pub fn bubble_container(props: &BubbleContainerProps) -> Html {
    let field = {
        let config = props.config.clone();
        use_mut_ref(move || BubbleField::mount_with_entropy(config))
    };
    let live = use_state(|| field.borrow().len());

    {
        let field = field.clone();
        let live = live.clone();
        let interval_ms = props.config.spawn_interval_ms;
        use_effect_with_deps(
            move |_| {
                let ticking = field.clone();
                let interval = Interval::new(interval_ms, move || {
                    let count = {
                        let mut field = ticking.borrow_mut();
                        field.advance(u64::from(interval_ms));
                        field.len()
                    };
                    live.set(count);
                });
                move || {
                    drop(interval);
                    field.borrow_mut().unmount();
                }
            },
            (), // Mount/unmount only
        );
    }

    let field = field.borrow();
    let fade_fraction = field.config().fade_fraction;
    let fallback_height = field.config().fallback_viewport_height;

    html! {
        <div class="bubble-container" data-live={(*live).to_string()}>
            <style>
                {r#"
                    .bubble-container {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .bubble {
                        position: absolute;
                        border-radius: 9999px;
                        background: #bfdbfe;
                        opacity: 0;
                        will-change: transform, opacity;
                    }
                "#}
            </style>
            {
                field.bubbles().map(|bubble| html! {
                    <FloatingBubble
                        key={bubble.id.to_string()}
                        bubble={bubble.clone()}
                        fade_fraction={fade_fraction}
                        fallback_height={fallback_height}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
