//! Wasm client of the portfolio page. It binds the navigator from
//! `portfolio-shared` to the static markup, GSAP and browser timers.

mod config;
mod dom;
mod gsap;
mod timers;
mod wiring;

fn main() {
    wiring::boot();
}
