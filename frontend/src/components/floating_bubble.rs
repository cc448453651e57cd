use yew::prelude::*;
use gloo_timers::callback::Timeout;
use crate::animation::bubble::Bubble;
use crate::animation::cycle::CyclePlan;
use crate::animation::viewport::viewport_height_or;

#[derive(Properties, PartialEq, Clone)]
pub struct FloatingBubbleProps {
    pub bubble: Bubble,
    pub fade_fraction: f64,
    pub fallback_height: f64,
}

#[derive(Clone, PartialEq)]
struct CycleState {
    index: u32,
    plan: CyclePlan,
}

/// One bubble drifting up through the hero, restarting forever.
#[function_component(FloatingBubble)]
pub fn floating_bubble(props: &FloatingBubbleProps) -> Html {
    let FloatingBubbleProps { bubble, fade_fraction, fallback_height } = props.clone();

    let cycle = {
        let bubble = bubble.clone();
        use_state(move || CycleState {
            index: 0,
            plan: CyclePlan::new(&bubble, viewport_height_or(fallback_height), fade_fraction),
        })
    };

    // Re-arm a timeout for every cycle; the next one samples the viewport again.
    {
        let cycle = cycle.clone();
        let bubble = bubble.clone();
        let index = cycle.index;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(bubble.duration_ms(), move || {
                    let plan = CyclePlan::new(&bubble, viewport_height_or(fallback_height), fade_fraction);
                    log::debug!("{} starting cycle {} over {}px", bubble.id, index.wrapping_add(1), plan.viewport_height());
                    cycle.set(CycleState { index: index.wrapping_add(1), plan });
                });
                move || drop(timeout)
            },
            index,
        );
    }

    // A fresh animation name per cycle makes the browser restart from the top.
    let name = format!("rise-{}-{}", bubble.id, cycle.index);
    let style = format!("{} {}", bubble.base_style(), cycle.plan.animation_style(&name));

    html! {
        <>
            <style>{ cycle.plan.keyframes_css(&name) }</style>
            <div class="bubble" style={style}></div>
        </>
    }
}
