//! Traffic Light Host Loop
//!
//! This example drives a cyclic registry from a fixed-step loop.
//!
//! Key concepts:
//! - Per-state update actions counting down a phase timer
//! - Transitions triggered by the host, not the registry
//! - Enter listeners and a change subscriber for side effects
//! - Registry logging through `tracing`
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use statehost::builder::RegistryBuilder;
use statehost::core::{ChangeSubscriber, Listener, State};
use statehost::state_enum;
use std::cell::Cell;
use std::rc::Rc;

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

impl TrafficLight {
    fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }

    fn ticks(self) -> u32 {
        match self {
            Self::Red => 3,
            Self::Green => 3,
            Self::Yellow => 1,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Traffic Light Host Loop ===\n");

    let remaining = Rc::new(Cell::new(0u32));
    let mut builder = RegistryBuilder::new().history_limit(16);

    for light in TrafficLight::ALL.iter().copied() {
        let countdown = Rc::clone(&remaining);
        let reset = Rc::clone(&remaining);
        builder = builder
            .state(&light, move || countdown.set(countdown.get().saturating_sub(1)))
            .on_enter(&light, Listener::new(move || reset.set(light.ticks())));
    }

    let registry = builder
        .on_change(ChangeSubscriber::new(|old, new| {
            println!("  {:>6} -> {}", old.to_string(), new);
        }))
        .initial(&TrafficLight::Red)
        .build()
        .expect("traffic light states are declared once");

    let mut current = TrafficLight::Red;
    for frame in 0..14 {
        registry.dispatch_tick();
        if remaining.get() == 0 {
            current = current.next();
            registry
                .transition(&current)
                .expect("every light is declared");
        }
        println!("frame {frame:>2}: {}", registry.get_state());
    }

    let history = registry.history();
    let path: Vec<String> = history.get_path().iter().map(|s| s.to_string()).collect();
    println!("\nPath: {}", path.join(" -> "));
    println!("Current light: {}", current.name());

    println!("\n=== Example Complete ===");
}
