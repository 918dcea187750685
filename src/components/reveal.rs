use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::{Reveal as Phase, ViewportEnter};

/// Which way a block slides in from.
#[derive(Clone, Copy, PartialEq)]
pub enum Direction {
    Up,
    Left,
    Right,
}

impl Direction {
    fn class(self) -> &'static str {
        match self {
            Direction::Up => "reveal-up",
            Direction::Left => "reveal-left",
            Direction::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Direction::Up)]
    pub direction: Direction,
    /// Extra transition delay, for staggering siblings in source order.
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Static content block with a one-shot entrance animation. The block starts
/// transparent and offset; the first time its bounding box intersects the
/// viewport it fades/slides into place and stops observing, so scrolling it
/// out and back in never replays the animation.
#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let phase = use_reducer_eq(Phase::default);

    {
        let node = node.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let mut subscription = None;
                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    phase.dispatch(ViewportEnter);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(0.15));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        subscription = Some((observer, callback));
                    }
                }
                move || {
                    if let Some((observer, callback)) = subscription {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            (),
        );
    }

    let class = classes!(
        "reveal",
        props.direction.class(),
        phase.is_revealed().then_some("visible"),
        props.class.clone(),
    );
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={node} {class} {style}>
            { for props.children.iter() }
        </div>
    }
}
