//! Scroll and pointer driven effects bound to a component's lifetime.
//!
//! A section builds an [`AnimationContext`] when it mounts and keeps it until
//! it unmounts. Dropping the context removes every listener it added, cancels
//! its pending animation frame and puts back the inline style and text each
//! touched element had before.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, EventTarget, HtmlElement, SvgElement, Window};
use yew::NodeRef;

use super::counter::Counter;
use super::hover::{HoverEffect, HoverState};
use super::pose::Pose;
use super::trigger::{Action, Geometry, Mode, ScrollWindow, TriggerState};
use super::tween::{Playhead, Tween};

fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        element.dyn_ref::<SvgElement>().map(|svg| svg.style())
    }
}

fn write_pose(element: &Element, pose: &Pose) {
    if let Some(style) = inline_style(element) {
        for (name, value) in pose.declarations() {
            let _ = style.set_property(name, &value);
        }
    }
}

enum Output {
    Pose(Tween),
    Count(Counter),
}

struct Track {
    element: Element,
    output: Output,
    playhead: Playhead,
}

impl Track {
    fn render(&self) {
        let t = self.playhead.time_ms();
        match &self.output {
            Output::Pose(tween) => write_pose(&self.element, &tween.at_time(t)),
            Output::Count(counter) => self.element.set_text_content(Some(&counter.text_at(t))),
        }
    }
}

enum Effect {
    /// Indices into the scene's tracks.
    Timed(Vec<usize>),
    Scrub(Vec<(Element, Tween)>),
    Observe(Box<dyn FnMut(f64)>),
}

struct Binding {
    trigger: Element,
    window: ScrollWindow,
    mode: Mode,
    state: TriggerState,
    effect: Effect,
}

struct HoverTrack {
    element: Element,
    state: HoverState,
    animating: bool,
}

/// An element's inline style and text from before we first touched it.
struct Saved {
    element: Element,
    style: Option<String>,
    text: Option<Option<String>>,
}

#[derive(Default)]
struct Scene {
    tracks: Vec<Track>,
    bindings: Vec<Binding>,
    hovers: Vec<HoverTrack>,
    saved: Vec<Saved>,
}

impl Scene {
    fn remember(&mut self, element: &Element, with_text: bool) {
        if let Some(saved) = self.saved.iter_mut().find(|s| &s.element == element) {
            if with_text && saved.text.is_none() {
                saved.text = Some(element.text_content());
            }
            return;
        }
        self.saved.push(Saved {
            element: element.clone(),
            style: element.get_attribute("style"),
            text: with_text.then(|| element.text_content()),
        });
    }

    fn add_track(&mut self, element: Element, output: Output) -> usize {
        let total = match &output {
            Output::Pose(tween) => tween.total_ms(),
            Output::Count(counter) => counter.duration_ms,
        };
        self.remember(&element, matches!(output, Output::Count(_)));
        let track = Track {
            element,
            output,
            playhead: Playhead::new(total),
        };
        if matches!(track.output, Output::Pose(_)) {
            track.render();
        }
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    /// Re-evaluates every scroll binding. Returns whether a timed track started.
    fn on_scroll(&mut self, viewport_height: f64) -> bool {
        let Scene {
            tracks, bindings, ..
        } = self;
        let mut started = false;

        for binding in bindings.iter_mut() {
            let rect = binding.trigger.get_bounding_client_rect();
            let geometry = Geometry {
                top: rect.top(),
                height: rect.height(),
                viewport_height,
            };
            let progress = binding.window.progress(&geometry);
            let Some(action) = binding.state.update(binding.mode, progress) else {
                continue;
            };

            match (&mut binding.effect, action) {
                (Effect::Timed(indices), Action::Play) => {
                    for &i in indices.iter() {
                        tracks[i].playhead.play();
                    }
                    started = true;
                }
                (Effect::Timed(indices), Action::Reverse) => {
                    for &i in indices.iter() {
                        tracks[i].playhead.reverse();
                    }
                    started = true;
                }
                (Effect::Scrub(targets), Action::Seek(p)) => {
                    for (element, tween) in targets.iter() {
                        write_pose(element, &tween.at_progress(p));
                    }
                }
                (Effect::Observe(callback), Action::Seek(p)) => callback(p),
                _ => {}
            }
        }
        started
    }

    /// Advances everything in motion to `now`. Returns whether anything is
    /// still moving.
    fn tick(&mut self, now: f64) -> bool {
        let mut busy = false;
        for track in self.tracks.iter_mut().filter(|t| t.playhead.is_running()) {
            busy |= track.playhead.tick(now);
            track.render();
        }
        for hover in self.hovers.iter_mut().filter(|h| h.animating) {
            write_pose(&hover.element, &hover.state.pose_at(now));
            hover.animating = !hover.state.is_settled(now);
            busy |= hover.animating;
        }
        busy
    }

    fn revert(&mut self) {
        for saved in self.saved.drain(..) {
            match &saved.style {
                Some(style) => {
                    let _ = saved.element.set_attribute("style", style);
                }
                None => {
                    let _ = saved.element.remove_attribute("style");
                }
            }
            if let Some(text) = &saved.text {
                saved.element.set_text_content(text.as_deref());
            }
        }
        self.tracks.clear();
        self.bindings.clear();
        self.hovers.clear();
    }
}

struct Inner {
    window: Window,
    scene: RefCell<Scene>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    frame_id: Cell<Option<i32>>,
}

impl Inner {
    fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    /// Makes sure a frame is scheduled.
    fn kick(&self) {
        if self.frame_id.get().is_some() {
            return;
        }
        if let Some(callback) = self.frame.borrow().as_ref() {
            match self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
            {
                Ok(id) => self.frame_id.set(Some(id)),
                Err(e) => debug!("animation frame request failed: {:?}", e),
            }
        }
    }

    fn on_scroll(&self) {
        let viewport_height = self.viewport_height();
        if self.scene.borrow_mut().on_scroll(viewport_height) {
            self.kick();
        }
    }

    fn on_frame(&self, now: f64) {
        self.frame_id.set(None);
        if self.scene.borrow_mut().tick(now) {
            self.kick();
        }
    }
}

/// An event listener that is removed when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Listener {
    fn add(target: EventTarget, event: &'static str, callback: Closure<dyn FnMut()>) -> Option<Self> {
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target,
                event,
                callback,
            }),
            Err(e) => {
                debug!("could not listen for {}: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Anything that can name the element an effect applies to.
pub trait Bindable {
    fn element(&self) -> Option<Element>;
}

impl Bindable for NodeRef {
    fn element(&self) -> Option<Element> {
        self.cast::<Element>()
    }
}

impl Bindable for Element {
    fn element(&self) -> Option<Element> {
        Some(self.clone())
    }
}

/// Registration surface handed to the closure passed to [`AnimationContext::attach`].
///
/// Every method takes explicit element references. A `NodeRef` that is not
/// mounted yet is skipped.
pub struct SceneBuilder<'a> {
    inner: &'a Rc<Inner>,
    listeners: &'a mut Vec<Listener>,
}

impl SceneBuilder<'_> {
    fn resolve(node: &impl Bindable, what: &str) -> Option<Element> {
        let element = node.element();
        if element.is_none() {
            debug!("skipping {}: node is not mounted", what);
        }
        element
    }

    fn timed_tracks<T: Bindable>(&self, targets: &[T], tween: Tween, stagger_ms: f64) -> Vec<usize> {
        let mut scene = self.inner.scene.borrow_mut();
        targets
            .iter()
            .filter_map(|node| Self::resolve(node, "tween target"))
            .enumerate()
            .map(|(i, element)| {
                let tween = tween.delay_ms(tween.delay_ms + stagger_ms * i as f64);
                scene.add_track(element, Output::Pose(tween))
            })
            .collect()
    }

    fn bind(&self, trigger: &impl Bindable, window: ScrollWindow, mode: Mode, effect: Effect) {
        if let Some(trigger) = Self::resolve(trigger, "scroll trigger") {
            self.inner.scene.borrow_mut().bindings.push(Binding {
                trigger,
                window,
                mode,
                state: TriggerState::default(),
                effect,
            });
        }
    }

    /// Plays `tween` on each target right away, `stagger_ms` apart.
    pub fn intro<T: Bindable>(&mut self, targets: &[T], tween: Tween, stagger_ms: f64) {
        let indices = self.timed_tracks(targets, tween, stagger_ms);
        let mut scene = self.inner.scene.borrow_mut();
        for i in indices {
            scene.tracks[i].playhead.play();
        }
    }

    /// Plays `tween` on each target when `trigger` enters `window`, reversing
    /// on the way back out if `mode` is [`Mode::Toggle`].
    pub fn reveal<T: Bindable>(
        &mut self,
        trigger: &impl Bindable,
        window: ScrollWindow,
        mode: Mode,
        targets: &[T],
        tween: Tween,
        stagger_ms: f64,
    ) {
        let indices = self.timed_tracks(targets, tween, stagger_ms);
        self.bind(trigger, window, mode, Effect::Timed(indices));
    }

    /// Ties `tween` on `target` directly to scroll progress through `window`.
    pub fn scrub(&mut self, trigger: &impl Bindable, window: ScrollWindow, target: &impl Bindable, tween: Tween) {
        let Some(element) = Self::resolve(target, "scrub target") else {
            return;
        };
        self.inner.scene.borrow_mut().remember(&element, false);
        self.bind(
            trigger,
            window,
            Mode::Scrub,
            Effect::Scrub(vec![(element, tween)]),
        );
    }

    /// Calls `observer` with the scroll progress through `window` whenever it changes.
    pub fn observe(&mut self, trigger: &impl Bindable, window: ScrollWindow, observer: impl FnMut(f64) + 'static) {
        self.bind(trigger, window, Mode::Scrub, Effect::Observe(Box::new(observer)));
    }

    /// Counts the number rendered in `node` up from zero, once, when it enters `window`.
    pub fn count_up(&mut self, node: &impl Bindable, window: ScrollWindow) {
        let Some(element) = Self::resolve(node, "counter") else {
            return;
        };
        let Some(counter) = element.text_content().as_deref().and_then(Counter::parse) else {
            debug!("skipping counter: element text is not a number");
            return;
        };
        let index = self
            .inner
            .scene
            .borrow_mut()
            .add_track(element.clone(), Output::Count(counter));
        self.bind(&element, window, Mode::OneShot, Effect::Timed(vec![index]));
    }

    /// Runs `effect` on `node` while the pointer is over it.
    pub fn hover(&mut self, node: &impl Bindable, effect: HoverEffect) {
        self.pointer(node, node, effect, "mouseenter", "mouseleave");
    }

    /// Runs `effect` on `target` while the pointer is over `source`.
    pub fn hover_via(&mut self, source: &impl Bindable, target: &impl Bindable, effect: HoverEffect) {
        self.pointer(source, target, effect, "mouseenter", "mouseleave");
    }

    /// Runs `effect` on `target` while `input` has focus.
    pub fn focus(&mut self, input: &impl Bindable, target: &impl Bindable, effect: HoverEffect) {
        self.pointer(input, target, effect, "focus", "blur");
    }

    fn pointer(
        &mut self,
        source: &impl Bindable,
        target: &impl Bindable,
        effect: HoverEffect,
        on: &'static str,
        off: &'static str,
    ) {
        let (Some(source), Some(element)) = (
            Self::resolve(source, "pointer source"),
            Self::resolve(target, "pointer target"),
        ) else {
            return;
        };

        let index = {
            let mut scene = self.inner.scene.borrow_mut();
            scene.remember(&element, false);
            scene.hovers.push(HoverTrack {
                element,
                state: HoverState::new(effect),
                animating: false,
            });
            scene.hovers.len() - 1
        };

        for (event, entering) in [(on, true), (off, false)] {
            let weak: Weak<Inner> = Rc::downgrade(self.inner);
            let callback = Closure::<dyn FnMut()>::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let now = inner.now();
                if let Some(hover) = inner.scene.borrow_mut().hovers.get_mut(index) {
                    if entering {
                        hover.state.enter(now);
                    } else {
                        hover.state.leave(now);
                    }
                    hover.animating = true;
                }
                inner.kick();
            });
            if let Some(listener) = Listener::add(source.clone().into(), event, callback) {
                self.listeners.push(listener);
            }
        }
    }
}

/// Owns every effect a section registered. See the module docs.
pub struct AnimationContext {
    inner: Rc<Inner>,
    listeners: Vec<Listener>,
}

impl AnimationContext {
    /// Builds a context, runs `build` to register effects, then evaluates
    /// every scroll binding once against the current scroll position.
    pub fn attach(build: impl FnOnce(&mut SceneBuilder)) -> Option<Self> {
        let window = web_sys::window()?;
        let inner = Rc::new(Inner {
            window: window.clone(),
            scene: RefCell::new(Scene::default()),
            frame: RefCell::new(None),
            frame_id: Cell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        *inner.frame.borrow_mut() = Some(Closure::new(move |now: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(now);
            }
        }));

        let mut context = AnimationContext {
            inner,
            listeners: Vec::new(),
        };

        build(&mut SceneBuilder {
            inner: &context.inner,
            listeners: &mut context.listeners,
        });

        for event in ["scroll", "resize"] {
            let weak = Rc::downgrade(&context.inner);
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.on_scroll();
                }
            });
            if let Some(listener) = Listener::add(window.clone().into(), event, callback) {
                context.listeners.push(listener);
            }
        }

        // Initial check
        context.inner.on_scroll();
        context.inner.kick();
        Some(context)
    }

    /// Number of listeners currently installed.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for AnimationContext {
    fn drop(&mut self) {
        self.listeners.clear();
        if let Some(id) = self.inner.frame_id.take() {
            let _ = self.inner.window.cancel_animation_frame(id);
        }
        self.inner.frame.borrow_mut().take();
        self.inner.scene.borrow_mut().revert();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::animation::easing::Ease;
    use crate::animation::trigger::{Anchor, Edge};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted(style: Option<&str>) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        if let Some(style) = style {
            element.set_attribute("style", style).unwrap();
        }
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn drop_restores_original_inline_style() {
        let element = mounted(Some("color: red;"));
        let context = AnimationContext::attach(|scene| {
            scene.reveal(
                &element,
                ScrollWindow::from(Anchor::new(Edge::Top, 0.8)),
                Mode::Toggle,
                &[element.clone()],
                Tween::reveal(Pose::REST.opacity(0.0).y(30.0)),
                0.0,
            );
        })
        .unwrap();
        assert_ne!(element.get_attribute("style").as_deref(), Some("color: red;"));

        drop(context);
        assert_eq!(element.get_attribute("style").as_deref(), Some("color: red;"));
    }

    #[wasm_bindgen_test]
    fn drop_removes_style_that_was_not_there() {
        let element = mounted(None);
        let context = AnimationContext::attach(|scene| {
            scene.scrub(
                &element,
                ScrollWindow::full_pass(),
                &element,
                Tween::new(Pose::REST.y(-50.0), Pose::REST.y(50.0)).ease(Ease::Linear),
            );
        })
        .unwrap();
        assert!(element.get_attribute("style").is_some());

        drop(context);
        assert!(element.get_attribute("style").is_none());
    }

    #[wasm_bindgen_test]
    fn counters_restore_their_text() {
        let element = mounted(None);
        element.set_text_content(Some("4.9"));
        let context = AnimationContext::attach(|scene| {
            scene.count_up(&element, ScrollWindow::from(Anchor::new(Edge::Top, 0.8)));
        })
        .unwrap();
        drop(context);
        assert_eq!(element.text_content().as_deref(), Some("4.9"));
    }

    #[wasm_bindgen_test]
    fn unmounted_refs_are_skipped() {
        let context = AnimationContext::attach(|scene| {
            scene.hover(&NodeRef::default(), HoverEffect::new(Pose::REST.scale(1.1)));
        })
        .unwrap();
        // Only the window scroll and resize listeners.
        assert_eq!(context.listener_count(), 2);
    }

    #[wasm_bindgen_test]
    fn hover_adds_two_listeners() {
        let element = mounted(None);
        let context = AnimationContext::attach(|scene| {
            scene.hover(&element, HoverEffect::new(Pose::REST.scale(1.1)));
        })
        .unwrap();
        assert_eq!(context.listener_count(), 4);
    }
}
