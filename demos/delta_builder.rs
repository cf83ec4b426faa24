//! Example: Building canonical Deltas
//!
//! This example demonstrates:
//! 1. Tail merging of text, retains and deletes
//! 2. Attribute-gated merging and embeds that never merge
//! 3. Inserts moving ahead of trailing deletes
//! 4. Raw construction, copying and chop

use plato_core::{attributes, AttributeMap, Embed, Op};
use plato_delta::{Delta, Violation};

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Delta Builder Examples for Plato");
    println!("═══════════════════════════════════════════════════════════════\n");

    example_1_tail_merge();
    example_2_attributes_and_embeds();
    example_3_delete_insert_reorder();
    example_4_raw_copy_and_chop();

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  All examples completed successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

/// Example 1: adjacent compatible ops fold into one
fn example_1_tail_merge() {
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Example 1: Tail Merge                                       │");
    println!("└─────────────────────────────────────────────────────────────┘\n");

    let mut delta = Delta::new();
    delta.insert("Hello").insert(", ").insert("world");
    println!("insert x3           -> {}", delta);

    delta.retain(2).retain(3).delete(1).delete(4);
    println!("retain x2, delete x2 -> {}", delta);

    delta.insert("").retain(0).delete(0);
    println!("no-ops are dropped   -> {} ({} ops)\n", delta, delta.len());
}

/// Example 2: attributes gate merging, embeds never merge
fn example_2_attributes_and_embeds() {
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Example 2: Attributes and Embeds                            │");
    println!("└─────────────────────────────────────────────────────────────┘\n");

    let bold = attributes! { "bold" => true };

    let mut delta = Delta::new();
    delta
        .insert_with("Bold", Some(bold.clone()))
        .insert_with(" text", Some(bold.clone()))
        .insert(" plain")
        .insert_with(" empty attrs", Some(AttributeMap::new()));
    println!("formatted text       -> {}", delta);

    let image = Embed::object([("image", "https://plato.mantoux.org/logo.png")]);
    let alt = attributes! { "alt" => "Plato" };
    let mut embeds = Delta::new();
    embeds
        .insert_with(image.clone(), Some(alt.clone()))
        .insert_with(image, Some(alt));
    println!("two identical embeds -> {}\n", embeds);
}

/// Example 3: inserts commute ahead of deletes
fn example_3_delete_insert_reorder() {
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Example 3: Delete/Insert Reorder                            │");
    println!("└─────────────────────────────────────────────────────────────┘\n");

    let mut delta = Delta::new();
    delta.delete(1).insert("a");
    println!("delete, insert       -> {}", delta);

    let mut delta = Delta::new();
    delta.insert("a").delete(1).insert("b");
    println!("insert, delete, ins  -> {}", delta);

    let mut delta = Delta::new();
    delta.insert(1).delete(1).insert("a");
    println!("embed blocks merge   -> {}\n", delta);
}

/// Example 4: raw sequences are trusted, copies are independent
fn example_4_raw_copy_and_chop() {
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Example 4: Raw Construction, Copy and Chop                  │");
    println!("└─────────────────────────────────────────────────────────────┘\n");

    let raw = Delta::from_ops(vec![Op::insert("a"), Op::insert("b"), Op::delete(0)]);
    let problems: Vec<String> = raw.violations().iter().map(Violation::to_string).collect();
    println!("raw (not renormalized) -> {}", raw);
    println!("  violations: {}", problems.join("; "));

    let normalized: Delta = raw.clone().into_iter().collect();
    println!("collected              -> {}", normalized);

    let mut copy = normalized.clone();
    copy.retain(5);
    println!("copy + retain(5)       -> {}", copy);
    copy.chop();
    println!("copy after chop        -> {}", copy);
    println!("original untouched     -> {}", normalized);
    println!(
        "length {} / change length {}",
        normalized.length(),
        normalized.change_length()
    );
}
