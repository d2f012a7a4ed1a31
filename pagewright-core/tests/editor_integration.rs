//! Editor Integration Tests
//!
//! Exercises the editor through its public API:
//! - Undo/redo laws over arbitrary edit sequences
//! - Duplicate, delete and the two reorder operations
//! - Prompt synthesis scenarios
//! - Structured-data round trip and persistence across sessions

use pagewright_core::{
    Direction, DocumentState, Editor, ElementId, ElementKind, IdAllocator, StateStore, Theme,
    HISTORY_LIMIT,
};
use proptest::prelude::*;

fn editor() -> Editor {
    Editor::new().with_ids(IdAllocator::with_session("it"))
}

fn ids(state: &DocumentState) -> Vec<String> {
    state.ids().map(|id| id.as_str().to_string()).collect()
}

fn kinds(state: &DocumentState) -> Vec<ElementKind> {
    state.elements.iter().map(|e| e.kind).collect()
}

/// One editing action, with element references as list positions.
#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Label(usize, String),
    Delete(usize),
    Duplicate(usize),
    Move(usize, bool),
    Reorder(usize, usize),
    Theme(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..ElementKind::ALL.len()).prop_map(Op::Add),
        (any::<usize>(), "[a-z]{1,8}").prop_map(|(i, s)| Op::Label(i, s)),
        any::<usize>().prop_map(Op::Delete),
        any::<usize>().prop_map(Op::Duplicate),
        (any::<usize>(), any::<bool>()).prop_map(|(i, up)| Op::Move(i, up)),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Reorder(a, b)),
        (0usize..Theme::ALL.len()).prop_map(Op::Theme),
    ]
}

fn id_at(editor: &Editor, index: usize) -> Option<ElementId> {
    let len = editor.state().len();
    if len == 0 {
        return None;
    }
    Some(editor.state().elements[index % len].id.clone())
}

/// Apply an op; returns whether it committed.
fn apply(editor: &mut Editor, op: &Op) -> bool {
    match op {
        Op::Add(kind) => {
            editor.add_element(ElementKind::ALL[*kind]);
            true
        }
        Op::Label(i, text) => id_at(editor, *i).is_some_and(|id| editor.update_label(&id, text)),
        Op::Delete(i) => id_at(editor, *i).is_some_and(|id| editor.delete_element(&id)),
        Op::Duplicate(i) => {
            id_at(editor, *i).is_some_and(|id| editor.duplicate_element(&id).is_some())
        }
        Op::Move(i, up) => id_at(editor, *i).is_some_and(|id| {
            let dir = if *up { Direction::Up } else { Direction::Down };
            editor.move_element(&id, dir)
        }),
        Op::Reorder(a, b) => match (id_at(editor, *a), id_at(editor, *b)) {
            (Some(from), Some(to)) => editor.reorder(&from, &to),
            _ => false,
        },
        Op::Theme(t) => editor.set_theme(Theme::ALL[*t]),
    }
}

proptest! {
    #[test]
    fn prop_undo_all_then_redo_all(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut ed = editor();
        let mut snapshots = vec![ed.state().clone()];
        for op in &ops {
            if apply(&mut ed, op) {
                snapshots.push(ed.state().clone());
            }
        }
        let commits = snapshots.len() - 1;
        prop_assert_eq!(ed.history().undo_levels(), commits);

        for expected in snapshots.iter().rev().skip(1) {
            prop_assert!(ed.undo());
            prop_assert_eq!(ed.state(), expected);
        }
        prop_assert!(!ed.undo());

        for expected in snapshots.iter().skip(1) {
            prop_assert!(ed.redo());
            prop_assert_eq!(ed.state(), expected);
        }
        prop_assert!(!ed.redo());
    }

    #[test]
    fn prop_commit_after_undo_clears_future(
        ops in prop::collection::vec(arb_op(), 1..20),
        undos in 1usize..5,
    ) {
        let mut ed = editor();
        for op in &ops {
            apply(&mut ed, op);
        }
        for _ in 0..undos {
            ed.undo();
        }
        ed.add_element(ElementKind::Text);
        prop_assert!(!ed.history().can_redo());
    }

    #[test]
    fn prop_history_never_exceeds_limit(adds in 0usize..120) {
        let mut ed = editor();
        for _ in 0..adds {
            ed.add_element(ElementKind::Badge);
        }
        prop_assert_eq!(ed.history().undo_levels(), adds.min(HISTORY_LIMIT));
    }

    #[test]
    fn prop_reorder_matches_remove_then_insert(
        len in 2usize..8,
        from in any::<usize>(),
        to in any::<usize>(),
    ) {
        let mut ed = editor();
        for _ in 0..len {
            ed.add_element(ElementKind::Text);
        }
        let (from, to) = (from % len, to % len);
        prop_assume!(from != to);

        let mut model = ids(ed.state());
        let moved = model.remove(from);
        model.insert(to, moved);

        let from_id = ed.state().elements[from].id.clone();
        let to_id = ed.state().elements[to].id.clone();
        prop_assert!(ed.reorder(&from_id, &to_id));
        prop_assert_eq!(ids(ed.state()), model);
    }
}

#[test]
fn test_duplicate_then_delete_restores_list() {
    let mut ed = editor();
    let a = ed.add_element(ElementKind::Card);
    ed.add_element(ElementKind::Button);
    let before = ed.state().clone();

    let copy = ed.duplicate_element(&a).expect("source exists");
    assert_ne!(copy, a);
    assert_eq!(ed.state().len(), before.len() + 1);
    assert_eq!(ed.state().position(&copy), Some(1));
    assert_eq!(
        ed.state().element(&copy).map(|e| (&e.label, e.kind)),
        ed.state().element(&a).map(|e| (&e.label, e.kind))
    );

    assert!(ed.delete_element(&copy));
    assert_eq!(ed.state(), &before);
}

#[test]
fn test_reorder_back_is_not_a_swap() {
    let mut ed = editor();
    let a = ed.add_element(ElementKind::Text);
    let b = ed.add_element(ElementKind::Text);
    let c = ed.add_element(ElementKind::Text);

    assert!(ed.reorder(&a, &c));
    assert_eq!(
        ids(ed.state()),
        vec![b.to_string(), c.to_string(), a.to_string()]
    );
    assert!(ed.reorder(&c, &a));
    assert_eq!(
        ids(ed.state()),
        vec![b.to_string(), a.to_string(), c.to_string()]
    );
}

#[test]
fn test_dashboard_prompt_appends_section() {
    let mut ed = editor();
    ed.add_element(ElementKind::Text);
    ed.synthesize("build me a dashboard");

    use ElementKind as K;
    assert_eq!(
        &kinds(ed.state())[1..],
        &[
            K::Navbar,
            K::Hero,
            K::Badge,
            K::Divider,
            K::Card,
            K::Card,
            K::Text,
            K::Button
        ]
    );
}

#[test]
fn test_unknown_prompt_echoes_input() {
    let mut ed = editor();
    ed.synthesize("xyzzy");
    assert_eq!(
        kinds(ed.state()),
        vec![ElementKind::Hero, ElementKind::Button, ElementKind::Text]
    );
    assert_eq!(ed.state().elements[0].label, "xyzzy");
}

#[test]
fn test_ids_unique_across_creation_paths() {
    let mut ed = editor();
    let a = ed.add_element(ElementKind::Text);
    ed.duplicate_element(&a);
    ed.synthesize("contact us");
    ed.insert_template(pagewright_core::Template::PricingTable);

    let mut all = ids(ed.state());
    let total = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), total);
}

#[test]
fn test_structured_round_trip() {
    let mut ed = editor();
    ed.synthesize("portfolio");
    ed.set_theme(Theme::Sunset);
    let exported = ed.export_json();

    let mut other = editor();
    other.import_json(&exported).expect("import");
    assert_eq!(other.state().elements, ed.state().elements);
    assert_eq!(other.state().theme, Theme::Sunset);
    assert_eq!(other.state().columns, ed.state().columns);

    // import is one undo step
    assert!(other.undo());
    assert!(other.state().is_empty());
}

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut ed = Editor::with_store(StateStore::with_data_dir(dir.path()).expect("store"));
    let id = ed.add_element(ElementKind::Hero);
    ed.update_label(&id, "Persisted");
    ed.set_project_name("Saved");
    ed.save_project();
    ed.undo();

    let reopened = Editor::with_store(StateStore::with_data_dir(dir.path()).expect("store"));
    // undo is mirrored too
    assert_eq!(reopened.state().elements[0].label, "Welcome to My App");
    // history is not durable
    assert!(!reopened.history().can_undo());
    assert_eq!(
        reopened
            .projects()
            .get("Saved")
            .map(|p| p.state.elements[0].label.as_str()),
        Some("Persisted")
    );
}

#[test]
fn test_corrupt_store_starts_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("state.json"), "not json").expect("write");
    std::fs::write(dir.path().join("projects.json"), "[{").expect("write");
    let mut ed = Editor::with_store(StateStore::with_data_dir(dir.path()).expect("store"));
    assert!(ed.state().is_empty());
    assert!(ed.projects().is_empty());

    // the next commit and save must not clobber the unreadable files
    ed.add_element(ElementKind::Text);
    ed.save_project();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("state.json.corrupt")).expect("state kept"),
        "not json"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("projects.json.corrupt")).expect("projects kept"),
        "[{"
    );
    let reopened = Editor::with_store(StateStore::with_data_dir(dir.path()).expect("store"));
    assert_eq!(reopened.state().len(), 1);
}
