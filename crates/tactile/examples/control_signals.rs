//! Tactile control signals example
//!
//! Drives a headless text field and button through a short interaction and
//! prints what the subscribers observe.
//!
//! Run with: RUST_LOG=tactile=debug cargo run -p tactile --example control_signals

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tactile::control::headless::HeadlessControl;
use tactile::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let field = ControlBuilder::new()
        .name("search-field")
        .allocation(StoreAllocation::Eager)
        .build(HeadlessControl::new());
    let button = ControlBuilder::new().name("search-button").build(HeadlessControl::new());

    let edits = Arc::new(AtomicUsize::new(0));
    let edits_clone = edits.clone();
    field.on_editing_changed().connect(move |()| {
        edits_clone.fetch_add(1, Ordering::SeqCst);
    });
    field
        .on_editing_did_end_on_exit()
        .connect(|()| println!("field: return pressed"));

    // Kinds can also be picked by identifier, e.g. from a config file.
    let kind: ControlEvent = "TouchUpInside".parse()?;
    let _guard = button
        .signal(kind)
        .connect_scoped(move |()| println!("button: tapped"));

    for _ in 0..3 {
        field
            .native()
            .send_actions(ControlEvent::EditingChanged.into());
    }
    field
        .native()
        .send_actions(ControlEvent::EditingDidEnd | ControlEvent::EditingDidEndOnExit);
    button.native().tap();

    println!("field: {} edits", edits.load(Ordering::SeqCst));
    println!("field bound: {}", field.store().bound_events());
    println!("button bound: {}", button.store().bound_events());
    Ok(())
}
