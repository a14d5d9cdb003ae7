//! Sharing flow demonstration.
//!
//! This example walks one sermon through its sharing lifecycle:
//! 1. Alice writes a private sermon and Bob writes a lesson on it
//! 2. Carol is refused, then gains access when the sermon is shared
//! 3. Edits by non-owners are rejected with a 403
//! 4. The audit trail summarises every decision
//!
//! Run with: `cargo run --example sharing_flow`

use std::sync::Arc;

use sermon_policy::{audit::AuditTrail, Ability, Gate, Lesson, RequestMeta, Sermon, User};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Sharing Flow Example ===\n");

    let trail = AuditTrail::new();

    let alice = User::new(1, "Alice");
    let bob = User::new(2, "Bob");
    let carol = User::new(3, "Carol");

    // Scenario 1: private sermon with a lesson by someone else
    println!("--- Scenario 1: Private sermon ---");

    let sermon = Arc::new(Sermon::new(10, alice.id));
    let lesson = Lesson::new(20, bob.id).with_sermon(Arc::clone(&sermon));

    let alice_gate =
        Gate::new(RequestMeta::authenticated("req-001", alice.clone())).with_trail(&trail);
    let carol_gate =
        Gate::new(RequestMeta::authenticated("req-002", carol.clone())).with_trail(&trail);

    println!(
        "Alice views Bob's lesson on her sermon: {}",
        alice_gate.allows(Ability::View, &lesson)
    );
    println!(
        "Carol views the private sermon: {}",
        carol_gate.allows(Ability::View, &*sermon)
    );

    // Scenario 2: Alice shares the sermon with Carol
    println!("\n--- Scenario 2: Shared with Carol ---");

    let shared = Arc::new(Sermon::clone(&sermon).shared_with_user(carol.id));
    let lesson = Lesson::new(20, bob.id).with_sermon(Arc::clone(&shared));

    if alice_gate.authorize(Ability::Share, &*shared).is_ok() {
        println!("✓ Alice may share her sermon");
    }
    println!(
        "Carol views the lesson through the shared sermon: {}",
        carol_gate.allows(Ability::View, &lesson)
    );

    // Scenario 3: writes stay with the owner
    println!("\n--- Scenario 3: Edits ---");

    match carol_gate.authorize(Ability::Update, &lesson) {
        Ok(()) => println!("Carol updated the lesson"),
        Err(v) => println!("✗ Carol cannot update the lesson ({}): {}", v.status_code(), v),
    }
    match carol_gate.authorize_named("delete", &*shared) {
        Ok(()) => println!("Carol deleted the sermon"),
        Err(e) => println!("✗ Carol cannot delete the sermon: {}", e),
    }

    let anonymous = Gate::new(RequestMeta::anonymous("req-003")).with_trail(&trail);
    if let Err(v) = anonymous.authorize_class::<Sermon>(Ability::Create) {
        println!("✗ Anonymous create rejected ({})", v.status_code());
    }

    // Query the audit trail
    println!("\n--- Audit Trail Summary ---");
    println!("Total decisions recorded: {}", trail.len());
    println!("Denials: {}", trail.denials().len());
    for event in trail.events() {
        println!("  {}", event);
    }
}
