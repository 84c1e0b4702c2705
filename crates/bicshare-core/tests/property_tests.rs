//! Property-based tests for wizard state
//!
//! Uses proptest to verify the tag toggle, server change, step and cancel
//! invariants.

use bicshare_core::{
    FileBlob, SelectionState, Server, StepController, TagCatalog, TagCategory, TagSet, UploadWizard,
    WizardStep,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn server_strategy() -> impl Strategy<Value = Server> {
    prop::sample::select(Server::ALL.to_vec())
}

fn category_strategy() -> impl Strategy<Value = TagCategory> {
    prop::sample::select(TagCategory::ALL.to_vec())
}

/// Any tag name from any server's catalog
fn tag_strategy() -> impl Strategy<Value = String> {
    let mut all: Vec<String> = Vec::new();
    for server in Server::ALL {
        for category in TagCategory::ALL {
            all.extend(TagCatalog::tags(server, category).iter().map(|t| t.to_string()));
        }
    }
    prop::sample::select(all)
}

/// Operations that can be performed on a wizard
#[derive(Debug, Clone)]
enum WizardOp {
    SetServer(Server),
    Toggle(TagCategory, String),
    Next,
    Previous,
}

fn wizard_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<WizardOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => server_strategy().prop_map(WizardOp::SetServer),
            4 => (category_strategy(), tag_strategy()).prop_map(|(c, t)| WizardOp::Toggle(c, t)),
            1 => Just(WizardOp::Next),
            1 => Just(WizardOp::Previous),
        ],
        0..max_ops,
    )
}

fn apply(wizard: &mut UploadWizard, op: &WizardOp) {
    match op {
        WizardOp::SetServer(server) => wizard.selection_mut().set_server(*server),
        WizardOp::Toggle(category, name) => wizard.toggle_tag(*category, name),
        WizardOp::Next => wizard.next(),
        WizardOp::Previous => wizard.previous(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Toggling the same tag an even number of times restores membership
    #[test]
    fn toggle_is_its_own_inverse(
        initial in prop::collection::vec(tag_strategy(), 0..10),
        tag in tag_strategy(),
        pairs in 1..5usize,
    ) {
        let before: TagSet = initial.into_iter().collect();
        let mut after = before.clone();
        for _ in 0..pairs * 2 {
            after = after.toggled(&tag);
        }
        prop_assert_eq!(after, before);
    }

    /// Changing server always empties every tag set
    #[test]
    fn set_server_clears_all_tags(ops in wizard_ops_strategy(40), server in server_strategy()) {
        let mut wizard = UploadWizard::new();
        for op in &ops {
            apply(&mut wizard, op);
        }
        wizard.selection_mut().set_server(server);

        for category in TagCategory::ALL {
            prop_assert!(wizard.selection().tags(category).is_empty());
        }
    }

    /// Tag sets only ever contain names valid for the current server
    #[test]
    fn tags_stay_within_server_catalog(ops in wizard_ops_strategy(60)) {
        let mut wizard = UploadWizard::new();
        for op in &ops {
            apply(&mut wizard, op);
        }
        let selection = wizard.selection();
        for category in TagCategory::ALL {
            let ordered = selection.ordered_tags(category);
            prop_assert_eq!(ordered.len(), selection.tags(category).len());
        }
    }

    /// The step controller never leaves the two defined steps, and moving
    /// past either end changes nothing
    #[test]
    fn steps_stay_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..50)) {
        let mut steps = StepController::default();
        for forward in moves {
            let before = steps.current();
            if forward {
                steps.next();
                if before == WizardStep::SelectPortrait {
                    prop_assert_eq!(steps.current(), before);
                }
            } else {
                steps.previous();
                if before == WizardStep::SelectMetadata {
                    prop_assert_eq!(steps.current(), before);
                }
            }
            prop_assert!(matches!(
                steps.current(),
                WizardStep::SelectMetadata | WizardStep::SelectPortrait
            ));
        }
    }

    /// Cancel from any reachable state restores defaults
    #[test]
    fn cancel_restores_defaults(ops in wizard_ops_strategy(40), with_portrait in any::<bool>()) {
        let mut wizard = UploadWizard::new();
        wizard.open_with_file(FileBlob::new("hero.bic", vec![1, 2, 3]));
        if with_portrait {
            wizard.set_portrait(FileBlob::new("hero.tga", vec![4]));
        }
        for op in &ops {
            apply(&mut wizard, op);
        }

        wizard.cancel();

        let defaults = SelectionState::default();
        prop_assert_eq!(wizard.selection(), &defaults);
        prop_assert_eq!(wizard.step(), WizardStep::SelectMetadata);
    }
}
