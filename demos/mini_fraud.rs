//! Builds the mini-fraud system used throughout the test suite and walks it
//! through a handful of observations, printing how the label on `fraud`
//! narrows (or fails to narrow) at each step.
//!
//! A shipment is fraudulent unless either the wrong product was delivered or
//! the counter-party never delivered; a completed, paid trade is evidence of
//! no fraud.

use stability_label::structures::system::ArgumentationSystemBuilder;
use stability_label::{ArgumentationEngine, LabellerKind};

fn main() {
    let mut builder = ArgumentationSystemBuilder::new();
    let (fraud, not_fraud) =
        builder.add_literal("fraud", "fraud occurred", "no fraud").expect("fresh identifier");
    let (wrong_product, _) = builder
        .add_literal("wrong_product", "wrong product delivered", "correct product delivered")
        .expect("fresh identifier");
    let (counter_party_delivered, not_counter_party_delivered) = builder
        .add_literal("counter_party_delivered", "counter-party delivered", "counter-party did not deliver")
        .expect("fresh identifier");
    let (paid, _) = builder.add_literal("paid", "paid", "not paid").expect("fresh identifier");
    let (sent, _) = builder.add_literal("sent", "sent", "not sent").expect("fresh identifier");

    builder.mark_observable(wrong_product, "was the wrong product delivered?", "wrong product?", 0);
    builder.mark_observable(counter_party_delivered, "did the counter-party deliver?", "delivered?", 0);
    builder.mark_observable(not_counter_party_delivered, "did the counter-party deliver?", "delivered?", 0);
    builder.mark_observable(paid, "was it paid?", "paid?", 0);
    builder.mark_observable(sent, "was it sent?", "sent?", 0);

    builder.add_rule(vec![sent, not_counter_party_delivered], fraud, "non-delivery implies fraud").expect("valid rule");
    builder.add_rule(vec![paid, wrong_product], fraud, "wrong product implies fraud").expect("valid rule");
    builder.add_rule(vec![sent, paid], not_fraud, "a completed trade implies no fraud").expect("valid rule");

    let system = builder.finish().expect("system is well-formed");
    let engine = ArgumentationEngine::new(&system, LabellerKind::FourBool);
    let identifier = |atom| system.language().identifier(atom).to_string();

    let steps = [
        vec![],
        vec![identifier(wrong_product)],
        vec![identifier(wrong_product), identifier(counter_party_delivered)],
        vec![identifier(sent), identifier(paid)],
    ];

    for observations in steps {
        let borrowed: Vec<&str> = observations.iter().map(String::as_str).collect();
        match engine.update(&borrowed) {
            Ok(labels) => println!("observed {borrowed:?} -> fraud = {}", labels.literal(fraud)),
            Err(error) => eprintln!("observed {borrowed:?} -> error: {error}"),
        }
    }
}
