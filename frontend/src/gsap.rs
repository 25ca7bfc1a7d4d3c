//! GSAP bridge: tweens, `ScrollToPlugin` window scrolling and the
//! `ScrollTrigger` hooks. GSAP is loaded by the page as a global script;
//! without it the page still navigates, just without motion.

use js_sys::{Function, Object, Reflect};
use portfolio_shared::{
    chrome::{Animator, Scroller},
    motion::{self, AnimTarget, Pose, ScrollRequest, ScrollTarget, Tween},
    Section,
};
use wasm_bindgen::{prelude::*, JsCast};

use crate::config;

fn global(name: &str) -> Option<JsValue> {
    let value = Reflect::get(&js_sys::global(), &name.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value)
}

fn call(receiver: &JsValue, method: &str, args: &[&JsValue]) {
    let Some(func) = Reflect::get(receiver, &method.into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };
    let result = match args {
        [] => func.call0(receiver),
        [a] => func.call1(receiver, a),
        [a, b] => func.call2(receiver, a, b),
        _ => return,
    };
    if let Err(err) = result {
        web_sys::console::error_1(&err);
    }
}

fn set(object: &Object, key: &str, value: impl Into<JsValue>) {
    if let Err(err) = Reflect::set(object, &key.into(), &value.into()) {
        web_sys::console::error_1(&err);
    }
}

fn seconds(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64()
}

/// Selector text GSAP resolves for `target`.
fn selector(target: &AnimTarget) -> String {
    match target {
        AnimTarget::Section(id) => format!("#{id}"),
        AnimTarget::Title(id) => format!("#{id} {}", config::CONTENT_TITLE),
        AnimTarget::TextBlocks(id) => format!("#{id} {}", config::CONTENT_TEXT_BLOCK),
        AnimTarget::StickyNav => format!("#{}", config::STICKY_NAV_ID),
    }
}

fn scroll_selector(target: &ScrollTarget) -> String {
    match target {
        ScrollTarget::Section(id) => format!("#{id}"),
        ScrollTarget::Content => config::CONTENT_CONTAINER.to_string(),
        ScrollTarget::Landing => config::LANDING_CONTAINER.to_string(),
    }
}

fn pose_vars(pose: Pose) -> Object {
    let vars = Object::new();
    if let Some(opacity) = pose.opacity {
        set(&vars, "opacity", opacity);
    }
    if let Some(x) = pose.x {
        set(&vars, "x", x);
    }
    if let Some(y) = pose.y {
        set(&vars, "y", y);
    }
    vars
}

fn tween_vars(tween: &Tween) -> Object {
    let vars = pose_vars(tween.to);
    set(&vars, "duration", seconds(tween.duration));
    set(&vars, "ease", tween.ease.as_str());
    if !tween.delay.is_zero() {
        set(&vars, "delay", seconds(tween.delay));
    }
    if !tween.stagger.is_zero() {
        set(&vars, "stagger", seconds(tween.stagger));
    }
    vars
}

/// Handle on the global `gsap` object.
pub struct Gsap {
    gsap: JsValue,
    scroll_trigger: Option<JsValue>,
}

impl Gsap {
    /// Find GSAP and register the plugins the page loaded alongside it.
    pub fn detect() -> Option<Self> {
        let gsap = global("gsap")?;
        let scroll_trigger = global("ScrollTrigger");
        for plugin in [scroll_trigger.clone(), global("ScrollToPlugin")]
            .into_iter()
            .flatten()
        {
            call(&gsap, "registerPlugin", &[&plugin]);
        }
        Some(Self {
            gsap,
            scroll_trigger,
        })
    }

    fn to(&self, targets: &str, vars: &Object) {
        let targets = JsValue::from_str(targets);
        call(&self.gsap, "to", &[&targets, vars.as_ref()]);
    }

    /// Slow upward drift of the landing container while scrolling past it.
    pub fn install_parallax(&self) {
        if self.scroll_trigger.is_none() {
            return;
        }
        let trigger = Object::new();
        set(&trigger, "trigger", config::LANDING_CONTAINER);
        set(&trigger, "start", "top top");
        set(&trigger, "end", "bottom top");
        set(&trigger, "scrub", 2);

        let vars = Object::new();
        set(&vars, "yPercent", -20);
        set(&vars, "ease", "none");
        set(&vars, "scrollTrigger", trigger);
        self.to(config::LANDING_CONTAINER, &vars);
    }

    /// One-shot reveal of `section` the first time it scrolls into view.
    pub fn install_scroll_reveal(&self, section: &Section) {
        if self.scroll_trigger.is_none() {
            return;
        }
        let trigger_selector = selector(&AnimTarget::Section(section.id().clone()));
        for (target, tween) in motion::scroll_reveal(section) {
            let trigger = Object::new();
            set(&trigger, "trigger", trigger_selector.as_str());
            set(&trigger, "start", "top 85%");
            set(&trigger, "once", true);

            let vars = tween_vars(&tween);
            set(&vars, "scrollTrigger", trigger);
            self.to(&selector(&target), &vars);
        }
    }

    /// Call `on_enter` when the content container scrolls into view and
    /// `on_leave_back` when it scrolls back out above the fold.
    pub fn on_content_trigger(
        &self,
        on_enter: impl FnMut() + 'static,
        on_leave_back: impl FnMut() + 'static,
    ) {
        let Some(scroll_trigger) = &self.scroll_trigger else {
            return;
        };
        let enter = Closure::<dyn FnMut()>::new(on_enter);
        let leave_back = Closure::<dyn FnMut()>::new(on_leave_back);

        let vars = Object::new();
        set(&vars, "trigger", config::CONTENT_CONTAINER);
        set(&vars, "start", "top 80%");
        set(&vars, "onEnter", enter.as_ref().clone());
        set(&vars, "onLeaveBack", leave_back.as_ref().clone());
        call(scroll_trigger, "create", &[vars.as_ref()]);

        // ScrollTrigger holds these for the page's lifetime
        enter.forget();
        leave_back.forget();
    }
}

impl Animator for Gsap {
    fn kill_tweens(&self, target: &AnimTarget) {
        let targets = JsValue::from(selector(target));
        call(&self.gsap, "killTweensOf", &[&targets]);
    }

    fn set(&self, target: &AnimTarget, pose: Pose) {
        let targets = JsValue::from(selector(target));
        call(&self.gsap, "set", &[&targets, pose_vars(pose).as_ref()]);
    }

    fn tween(&self, target: &AnimTarget, tween: &Tween) {
        self.to(&selector(target), &tween_vars(tween));
    }
}

impl Scroller for Gsap {
    fn scroll_to(&self, request: &ScrollRequest) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let destination = Object::new();
        set(&destination, "y", scroll_selector(&request.target));
        set(&destination, "offsetY", 0);

        let vars = Object::new();
        set(&vars, "duration", seconds(request.duration));
        set(&vars, "ease", request.ease.as_str());
        set(&vars, "scrollTo", destination);
        let window = JsValue::from(window);
        call(&self.gsap, "to", &[&window, vars.as_ref()]);
    }
}
