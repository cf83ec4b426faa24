//! Delta building scenarios
//!
//! Covers construction, the insert/delete/retain sugar and direct
//! `push` calls, checking the resulting op lists.

use plato_core::{attributes, AttributeMap, Embed, Op};
use plato_delta::Delta;

fn sample_ops() -> Vec<Op> {
    vec![
        Op::insert("abc"),
        Op::retain_with(1, Some(attributes! { "color" => "red" })),
        Op::delete(4),
        Op::insert_with("def", Some(attributes! { "bold" => true })),
        Op::retain(6),
    ]
}

// ============================================================================
// Constructor Tests
// ============================================================================

#[test]
fn test_constructor_empty() {
    let delta = Delta::new();
    assert!(delta.is_empty());
    assert_eq!(delta.ops().len(), 0);
    assert_eq!(delta, Delta::default());
}

#[test]
fn test_constructor_empty_ops() {
    let mut delta = Delta::new();
    delta.insert("").delete(0).retain(0);
    assert_eq!(delta.ops().len(), 0);
}

#[test]
fn test_constructor_array_of_ops() {
    let ops = sample_ops();
    let delta = Delta::from_ops(ops.clone());
    assert_eq!(delta.ops(), ops.as_slice());
}

#[test]
fn test_constructor_from_vec() {
    let ops = sample_ops();
    let delta: Delta = ops.clone().into();
    assert_eq!(delta.into_ops(), ops);
}

#[test]
fn test_constructor_copy() {
    let ops = sample_ops();
    let original = Delta::from_ops(ops.clone());
    let copy = original.clone();
    assert_eq!(original.ops(), copy.ops());
    assert_eq!(copy.ops(), ops.as_slice());
}

#[test]
fn test_copy_is_independent() {
    let original = Delta::from_ops(sample_ops());
    let mut copy = original.clone();

    copy.insert("tail").delete(3);

    assert_eq!(original.ops(), sample_ops().as_slice());
    assert_ne!(original, copy);
}

// ============================================================================
// Insert Tests
// ============================================================================

#[test]
fn test_insert_text() {
    let mut delta = Delta::new();
    delta.insert("test");
    assert_eq!(delta.ops(), &[Op::insert("test")]);
}

#[test]
fn test_insert_text_null_attributes() {
    let mut delta = Delta::new();
    delta.insert_with("test", None);
    assert_eq!(delta.ops(), &[Op::insert("test")]);
}

#[test]
fn test_insert_embed() {
    let mut delta = Delta::new();
    delta.insert(1);
    assert_eq!(delta.ops(), &[Op::insert(1)]);
}

#[test]
fn test_insert_embed_with_attributes() {
    let attrs = attributes! { "url" => "https://plato.mantoux.org", "alt" => "Plato" };
    let mut delta = Delta::new();
    delta.insert_with(1, Some(attrs.clone()));
    assert_eq!(delta.ops(), &[Op::insert_with(1, Some(attrs))]);
}

#[test]
fn test_insert_object_embed() {
    let embed = Embed::object([("url", "https://plato.mantoux.org")]);
    let attrs = attributes! { "alt" => "Plato" };
    let mut delta = Delta::new();
    delta.insert_with(embed.clone(), Some(attrs.clone()));
    assert_eq!(delta.ops(), &[Op::insert_with(embed, Some(attrs))]);
}

#[test]
fn test_insert_text_with_attributes() {
    let mut delta = Delta::new();
    delta.insert_with("test", Some(attributes! { "bold" => true }));
    assert_eq!(
        delta.ops(),
        &[Op::insert_with("test", Some(attributes! { "bold" => true }))]
    );
}

#[test]
fn test_insert_text_after_delete() {
    let mut delta = Delta::new();
    delta.delete(1).insert("a");

    let mut expected = Delta::new();
    expected.insert("a").delete(1);

    assert_eq!(delta, expected);
}

#[test]
fn test_insert_text_after_delete_with_merge() {
    let mut delta = Delta::new();
    delta.insert("a").delete(1).insert("b");

    let mut expected = Delta::new();
    expected.insert("ab").delete(1);

    assert_eq!(delta, expected);
}

#[test]
fn test_insert_text_after_delete_no_merge() {
    let mut delta = Delta::new();
    delta.insert(1).delete(1).insert("a");

    let mut expected = Delta::new();
    expected.insert(1).insert("a").delete(1);

    assert_eq!(delta, expected);
    assert_eq!(
        delta.ops(),
        &[Op::insert(1), Op::insert("a"), Op::delete(1)]
    );
}

#[test]
fn test_insert_after_delete_run_moves_to_front() {
    let mut delta = Delta::new();
    delta.delete(1).delete(2);
    delta.push(Op::delete(3)).insert("x");

    assert_eq!(delta.ops(), &[Op::insert("x"), Op::delete(6)]);
}

#[test]
fn test_insert_after_deletes_does_not_pass_formatted_text() {
    let bold = attributes! { "bold" => true };
    let mut delta = Delta::new();
    delta.insert_with("a", Some(bold.clone())).delete(2).insert("b");

    assert_eq!(
        delta.ops(),
        &[
            Op::insert_with("a", Some(bold)),
            Op::insert("b"),
            Op::delete(2),
        ]
    );
}

#[test]
fn test_insert_text_empty_attributes() {
    let mut delta = Delta::new();
    delta.insert_with("a", Some(AttributeMap::new()));

    let mut expected = Delta::new();
    expected.insert("a");

    assert_eq!(delta, expected);
}

// ============================================================================
// Delete Tests
// ============================================================================

#[test]
fn test_delete_zero() {
    let mut delta = Delta::new();
    delta.delete(0);
    assert_eq!(delta.ops().len(), 0);
}

#[test]
fn test_delete_positive() {
    let mut delta = Delta::new();
    delta.delete(1);
    assert_eq!(delta.ops(), &[Op::delete(1)]);
}

// ============================================================================
// Retain Tests
// ============================================================================

#[test]
fn test_retain_zero() {
    let mut delta = Delta::new();
    delta.retain(0);
    assert_eq!(delta.ops().len(), 0);
}

#[test]
fn test_retain_positive() {
    let mut delta = Delta::new();
    delta.retain(2);
    assert_eq!(delta.ops(), &[Op::retain(2)]);
}

#[test]
fn test_retain_empty_attributes() {
    let mut delta = Delta::new();
    delta.retain_with(2, Some(AttributeMap::new()));
    assert_eq!(delta.ops(), &[Op::retain(2)]);
}

#[test]
fn test_retain_with_attributes() {
    let mut delta = Delta::new();
    delta.retain_with(1, Some(attributes! { "bold" => true }));
    assert_eq!(
        delta.ops(),
        &[Op::retain_with(1, Some(attributes! { "bold" => true }))]
    );
}

#[test]
fn test_retain_empty_attributes_with_delete() {
    // A trailing delete keeps the retain even after chop.
    let mut delta = Delta::new();
    delta.retain_with(2, Some(AttributeMap::new())).delete(1).chop();

    let mut expected = Delta::new();
    expected.retain(2).delete(1);

    assert_eq!(delta, expected);
}

// ============================================================================
// Push Tests
// ============================================================================

#[test]
fn test_push_on_empty() {
    let mut delta = Delta::new();
    delta.push(Op::insert("test"));
    assert_eq!(delta.ops().len(), 1);
}

#[test]
fn test_push_consecutive_delete() {
    let mut delta = Delta::new();
    delta.delete(2);
    delta.push(Op::delete(3));
    assert_eq!(delta.ops(), &[Op::delete(5)]);
}

#[test]
fn test_push_consecutive_text() {
    let mut delta = Delta::new();
    delta.insert("a");
    delta.push(Op::insert("b"));
    assert_eq!(delta.ops(), &[Op::insert("ab")]);
}

#[test]
fn test_push_consecutive_text_with_matching_attributes() {
    let mut delta = Delta::new();
    delta.insert_with("a", Some(attributes! { "bold" => true }));
    delta.push(Op::insert_with("b", Some(attributes! { "bold" => true })));
    assert_eq!(
        delta.ops(),
        &[Op::insert_with("ab", Some(attributes! { "bold" => true }))]
    );
}

#[test]
fn test_push_consecutive_retains_with_matching_attributes() {
    let mut delta = Delta::new();
    delta.retain_with(1, Some(attributes! { "bold" => true }));
    delta.push(Op::retain_with(3, Some(attributes! { "bold" => true })));
    assert_eq!(
        delta.ops(),
        &[Op::retain_with(4, Some(attributes! { "bold" => true }))]
    );
}

#[test]
fn test_push_consecutive_text_with_mismatched_attributes() {
    let mut delta = Delta::new();
    delta.insert_with("a", Some(attributes! { "bold" => true }));
    delta.push(Op::insert("b"));
    assert_eq!(delta.ops().len(), 2);
}

#[test]
fn test_push_consecutive_retains_with_mismatched_attributes() {
    let mut delta = Delta::new();
    delta.retain_with(1, Some(attributes! { "bold" => true }));
    delta.retain(3);
    assert_eq!(delta.ops().len(), 2);
}

#[test]
fn test_push_consecutive_embeds_with_matching_attributes() {
    let mut delta = Delta::new();
    delta.insert_with(1, Some(attributes! { "alt" => "Description" }));
    delta.push(Op::insert_with(
        Embed::object([("url", "https://plato.mantoux.org")]),
        Some(attributes! { "alt" => "Plato" }),
    ));
    assert_eq!(delta.ops().len(), 2);
}

#[test]
fn test_push_identical_embeds_never_merge() {
    let attrs = attributes! { "alt" => "Plato" };
    let mut delta = Delta::new();
    delta
        .insert_with(1, Some(attrs.clone()))
        .insert_with(1, Some(attrs.clone()));
    assert_eq!(
        delta.ops(),
        &[
            Op::insert_with(1, Some(attrs.clone())),
            Op::insert_with(1, Some(attrs)),
        ]
    );
}

#[test]
fn test_push_returns_same_delta_for_chaining() {
    let mut delta = Delta::new();
    let len = delta
        .push(Op::insert("a"))
        .push(Op::retain(2))
        .push(Op::delete(1))
        .len();
    assert_eq!(len, 3);
}

#[test]
fn test_extend_pushes_each_op() {
    let mut delta = Delta::new();
    delta.insert("a");
    delta.extend(vec![Op::insert("b"), Op::delete(1), Op::insert("c")]);
    assert_eq!(delta.ops(), &[Op::insert("abc"), Op::delete(1)]);
}
