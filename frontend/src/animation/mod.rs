//! Scroll-sequenced presentation effects.

pub mod context;
pub mod counter;
pub mod easing;
pub mod hover;
pub mod pose;
pub mod trigger;
pub mod tween;

pub use context::{AnimationContext, SceneBuilder};
pub use easing::Ease;
pub use hover::HoverEffect;
pub use pose::Pose;
pub use trigger::{Anchor, Edge, Mode, ScrollWindow};
pub use tween::Tween;

use std::rc::Rc;
use std::sync::Once;

use log::{debug, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

const BASE_STYLE_ID: &str = "st3-fx";

/// Rules every animated element relies on. Strokes drawn with `Pose::draw`
/// carry `pathLength="1"` and the `fx-stroke` class.
const BASE_STYLE: &str = r#"
.fx { will-change: transform, opacity; backface-visibility: hidden; }
.fx-stroke { stroke-dasharray: 1; stroke-dashoffset: 0; }
.fx-stage { perspective: 1000px; }
"#;

static INSTALL: Once = Once::new();

/// Process-wide setup for the effects engine. Safe to call any number of
/// times; only the first call does anything. Returns whether this call did
/// the work.
pub fn install() -> bool {
    let mut first = false;
    INSTALL.call_once(|| {
        first = true;
        inject_base_style();
    });
    first
}

fn inject_base_style() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        debug!("no document, skipping base animation style");
        return;
    };
    if document.get_element_by_id(BASE_STYLE_ID).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        debug!("could not create base animation style");
        return;
    };
    style.set_id(BASE_STYLE_ID);
    style.set_text_content(Some(BASE_STYLE));
    if head.append_child(&style).is_ok() {
        info!("Animation effects installed");
    }
}

/// Registers effects once the component has mounted and releases them when
/// it unmounts. `build` only runs for the first render.
#[hook]
pub fn use_animation<F>(build: F)
where
    F: FnOnce(&mut SceneBuilder) + 'static,
{
    use_effect_once(move || {
        let fx = AnimationContext::attach(build);
        move || drop(fx)
    });
}

/// `count` distinct node refs that live as long as the component.
#[hook]
pub fn use_node_refs(count: usize) -> Rc<Vec<NodeRef>> {
    use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect(), count)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn install_is_idempotent() {
        install();
        assert!(!install());
        assert!(!install());

        let document = web_sys::window().unwrap().document().unwrap();
        let styles = document
            .query_selector_all(&format!("style#{}", BASE_STYLE_ID))
            .unwrap();
        assert_eq!(styles.length(), 1);
    }
}
